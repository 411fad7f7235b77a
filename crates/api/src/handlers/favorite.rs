//! Handlers for the `/favorite` resource.
//!
//! Planet and character favorites share one add path and one delete path,
//! parameterised by [`FavoriteTarget`]. The request body must be valid JSON
//! but none of its fields are read.

use axum::extract::State;
use holonet_core::favorites::{
    FavoriteTarget, ACTING_USER_ID, MSG_CREATED_FAVORITE, MSG_DELETED_FAVORITE,
};
use holonet_core::types::DbId;
use holonet_db::repositories::{FavoritoRepo, PersonajeRepo, PlanetaRepo};
use holonet_db::DbPool;
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::{IdPath, JsonBody};
use crate::response::{MsgReply, MsgResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /favorite/planet/{id}
pub async fn add_planet(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    JsonBody(_body): JsonBody<Value>,
) -> AppResult<MsgReply> {
    add(&state.pool, FavoriteTarget::Planeta(id)).await
}

/// POST /favorite/people/{id}
pub async fn add_people(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    JsonBody(_body): JsonBody<Value>,
) -> AppResult<MsgReply> {
    add(&state.pool, FavoriteTarget::Personaje(id)).await
}

/// DELETE /favorite/planet/{id}
pub async fn delete_planet(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    JsonBody(_body): JsonBody<Value>,
) -> AppResult<MsgReply> {
    delete(&state.pool, FavoriteTarget::Planeta(id)).await
}

/// DELETE /favorite/people/{id}
pub async fn delete_people(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    JsonBody(_body): JsonBody<Value>,
) -> AppResult<MsgReply> {
    delete(&state.pool, FavoriteTarget::Personaje(id)).await
}

// ---------------------------------------------------------------------------
// Shared logic
// ---------------------------------------------------------------------------

async fn target_exists(pool: &DbPool, target: FavoriteTarget) -> Result<bool, sqlx::Error> {
    match target {
        FavoriteTarget::Planeta(id) => PlanetaRepo::exists(pool, id).await,
        FavoriteTarget::Personaje(id) => PersonajeRepo::exists(pool, id).await,
    }
}

/// Favorite `target` as the acting user if it exists.
async fn add(pool: &DbPool, target: FavoriteTarget) -> AppResult<MsgReply> {
    if !target_exists(pool, target).await? {
        tracing::debug!(entity = target.entity(), id = target.id(), "Favorite target missing");
        return Ok(MsgResponse::bad_request(target.not_exist_message()));
    }

    let favorito = FavoritoRepo::create(pool, ACTING_USER_ID, target).await?;
    tracing::info!(
        favorito_id = favorito.id,
        entity = target.entity(),
        target_id = target.id(),
        "Favorite created"
    );
    Ok(MsgResponse::ok(MSG_CREATED_FAVORITE))
}

/// Remove the first favorite pointing at `target`, whoever owns it.
///
/// Unlike [`add`], this is not restricted to [`ACTING_USER_ID`].
async fn delete(pool: &DbPool, target: FavoriteTarget) -> AppResult<MsgReply> {
    match FavoritoRepo::delete_first_by_target(pool, target).await? {
        Some(favorito) => {
            tracing::info!(
                favorito_id = favorito.id,
                user_id = favorito.user_id,
                entity = target.entity(),
                target_id = target.id(),
                "Favorite deleted"
            );
            Ok(MsgResponse::ok(MSG_DELETED_FAVORITE))
        }
        None => Ok(MsgResponse::bad_request(target.not_exist_message())),
    }
}
