//! Machine-readable index of every route, served at `/`.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// One method + path pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
}

const fn endpoint(method: &'static str, path: &'static str) -> Endpoint {
    Endpoint { method, path }
}

/// Every route the server answers. Keep in sync with [`super::api_routes`];
/// `tests/sitemap.rs` checks that each entry is routable.
pub const ENDPOINTS: &[Endpoint] = &[
    endpoint("GET", "/"),
    endpoint("GET", "/health"),
    endpoint("GET", "/user"),
    endpoint("GET", "/user/favorites"),
    endpoint("POST", "/user/create"),
    endpoint("GET", "/personajes"),
    endpoint("GET", "/personajes/{id}"),
    endpoint("GET", "/planetas"),
    endpoint("GET", "/planetas/{id}"),
    endpoint("POST", "/favorite/planet/{id}"),
    endpoint("DELETE", "/favorite/planet/{id}"),
    endpoint("POST", "/favorite/people/{id}"),
    endpoint("DELETE", "/favorite/people/{id}"),
];

#[derive(Serialize)]
pub struct SitemapResponse {
    pub endpoints: &'static [Endpoint],
}

/// GET /
async fn sitemap() -> Json<SitemapResponse> {
    Json(SitemapResponse {
        endpoints: ENDPOINTS,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(sitemap))
}
