#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use holonet_api::config::{LogFormat, ServerConfig};
use holonet_api::router::{build_app_router, App};
use holonet_api::state::AppState;
use holonet_core::favorites::{FavoriteTarget, ACTING_USER_ID};
use holonet_db::models::favorito::Favorito;
use holonet_db::models::personaje::{CreatePersonaje, Personaje};
use holonet_db::models::planeta::{CreatePlaneta, Planeta};
use holonet_db::repositories::{PersonajeRepo, PlanetaRepo};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the single CORS origin and a 30-second
/// request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
        seed_demo_data: false,
        log_format: LogFormat::Text,
    }
}

/// Build the full application with all middleware layers, using the given
/// database pool. Same construction as `main.rs`.
pub fn build_test_app(pool: PgPool) -> App {
    build_app_router(AppState { pool }, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: App, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: App, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: App, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json_body(app, Method::POST, uri, body).await
}

pub async fn delete_json(app: App, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json_body(app, Method::DELETE, uri, body).await
}

/// Send `raw` as the body with no content type.
pub async fn send_raw(app: App, method: Method, uri: &str, raw: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(raw))
        .unwrap();
    send(app, request).await
}

async fn with_json_body(
    app: App,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert the acting user with its fixed id and move the sequence past it.
pub async fn insert_acting_user(pool: &PgPool) {
    sqlx::query("INSERT INTO users (id, email, password) VALUES ($1, 'me@holonet.local', 'p')")
        .bind(ACTING_USER_ID)
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("SELECT setval(pg_get_serial_sequence('users', 'id'), $1)")
        .bind(ACTING_USER_ID)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_planeta(pool: &PgPool, name: &str) -> Planeta {
    PlanetaRepo::create(
        pool,
        &CreatePlaneta {
            name: name.to_string(),
            rotation_period: 24,
            orbital_period: 364,
            diameter: 12500,
            climate: "temperate".to_string(),
            gravity: "1 standard".to_string(),
            terrain: "grasslands, mountains".to_string(),
            surface_water: 40,
            population: 2_000_000_000,
        },
    )
    .await
    .unwrap()
}

pub async fn insert_personaje(pool: &PgPool, first_name: &str, last_name: &str) -> Personaje {
    PersonajeRepo::create(
        pool,
        &CreatePersonaje {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            height: 180,
            mass: 80,
            hair_color: "brown".to_string(),
            skin_color: "fair".to_string(),
            eye_color: "brown".to_string(),
            birth_year: "29BBY".to_string(),
            gender: "male".to_string(),
            homeworld: "Corellia".to_string(),
        },
    )
    .await
    .unwrap()
}

/// All favorites pointing at `target`, oldest first, across every user.
pub async fn favoritos_for(pool: &PgPool, target: FavoriteTarget) -> Vec<Favorito> {
    let column = match target {
        FavoriteTarget::Planeta(_) => "planetas_id",
        FavoriteTarget::Personaje(_) => "personajes_id",
    };
    let query = format!(
        "SELECT id, user_id, planetas_id, personajes_id FROM favoritos WHERE {column} = $1 ORDER BY id"
    );
    sqlx::query_as::<_, Favorito>(&query)
        .bind(target.id())
        .fetch_all(pool)
        .await
        .unwrap()
}
