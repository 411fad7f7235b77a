//! Handlers for the read-only `/personajes` catalog.

use axum::extract::State;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_db::models::personaje::Personaje;
use holonet_db::repositories::PersonajeRepo;

use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::state::AppState;

/// GET /personajes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Personaje>>> {
    let personajes = PersonajeRepo::list(&state.pool).await?;
    Ok(Json(personajes))
}

/// GET /personajes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Personaje>> {
    let personaje = PersonajeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Personaje",
            id,
        }))?;
    Ok(Json(personaje))
}
