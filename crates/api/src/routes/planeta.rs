//! Route definitions for the `/planetas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::planeta;
use crate::state::AppState;

/// Routes mounted at `/planetas`.
///
/// ```text
/// GET    /        -> list
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(planeta::list))
        .route("/{id}", get(planeta::get_by_id))
}
