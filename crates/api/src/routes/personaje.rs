//! Route definitions for the `/personajes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::personaje;
use crate::state::AppState;

/// Routes mounted at `/personajes`.
///
/// ```text
/// GET    /        -> list
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(personaje::list))
        .route("/{id}", get(personaje::get_by_id))
}
