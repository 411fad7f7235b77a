//! Route definitions for the `/user` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// GET    /            -> list
/// GET    /favorites   -> list_favorites
/// POST   /create      -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list))
        .route("/favorites", get(user::list_favorites))
        .route("/create", post(user::create))
}
