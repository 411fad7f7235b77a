//! Handlers for the read-only `/planetas` catalog.

use axum::extract::State;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_db::models::planeta::Planeta;
use holonet_db::repositories::PlanetaRepo;

use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::state::AppState;

/// GET /planetas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Planeta>>> {
    let planetas = PlanetaRepo::list(&state.pool).await?;
    Ok(Json(planetas))
}

/// GET /planetas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Planeta>> {
    let planeta = PlanetaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Planeta",
            id,
        }))?;
    Ok(Json(planeta))
}
