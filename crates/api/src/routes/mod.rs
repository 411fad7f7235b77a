pub mod favorite;
pub mod health;
pub mod personaje;
pub mod planeta;
pub mod sitemap;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree. All paths are unprefixed.
///
/// Route hierarchy:
///
/// ```text
/// /user                       list users (GET)
/// /user/favorites             acting user's favorites (GET)
/// /user/create                register (POST)
///
/// /personajes                 list (GET)
/// /personajes/{id}            get (GET)
///
/// /planetas                   list (GET)
/// /planetas/{id}              get (GET)
///
/// /favorite/planet/{id}       add, remove (POST, DELETE)
/// /favorite/people/{id}       add, remove (POST, DELETE)
/// ```
///
/// The sitemap at `/` and `/health` are mounted separately by
/// [`crate::router::build_app_router`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/user", user::router())
        .nest("/personajes", personaje::router())
        .nest("/planetas", planeta::router())
        .nest("/favorite", favorite::router())
}
