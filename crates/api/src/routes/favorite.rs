//! Route definitions for the `/favorite` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::favorite;
use crate::state::AppState;

/// Routes mounted at `/favorite`.
///
/// ```text
/// POST   /planet/{id}   -> add_planet
/// DELETE /planet/{id}   -> delete_planet
/// POST   /people/{id}   -> add_people
/// DELETE /people/{id}   -> delete_people
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/planet/{id}",
            post(favorite::add_planet).delete(favorite::delete_planet),
        )
        .route(
            "/people/{id}",
            post(favorite::add_people).delete(favorite::delete_people),
        )
}
