#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use encore_api::config::{LogFormat, ServerConfig};
use encore_api::router::build_app_router;
use encore_api::state::AppState;

/// A `ServerConfig` with local-development values.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5000".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// The production router and middleware stack over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty(), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty(), None).await
}

/// POST an `application/x-www-form-urlencoded` body built from `fields`.
///
/// Repeated keys (e.g. several `genres`) are sent in order.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    let body = serde_urlencoded::to_string(fields).unwrap();
    send(
        app,
        Method::POST,
        uri,
        Body::from(body),
        Some("application/x-www-form-urlencoded"),
    )
    .await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The id of the record in a flash envelope.
pub async fn created_id(response: Response) -> i64 {
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Body,
    content_type: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub fn musical_hop() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "The Musical Hop"),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("address", "1015 Folsom Street"),
        ("phone", "123-123-1234"),
        ("genres", "Jazz"),
        ("genres", "Reggae"),
        ("genres", "Classical"),
        ("website_link", "https://www.themusicalhop.com"),
        ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
        ("seeking_talent", "y"),
        ("seeking_description", "We are on the lookout for a local artist to play every two weeks."),
        ("image_link", "https://images.unsplash.com/photo-1543900694-133f37abaaa5"),
    ]
}

pub fn park_square() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Park Square Live Music & Coffee"),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("address", "34 Whiskey Moore Ave"),
        ("phone", "415-000-1234"),
        ("genres", "Rock n Roll"),
        ("genres", "Jazz"),
        ("genres", "Classical"),
        ("genres", "Folk"),
    ]
}

pub fn dueling_pianos() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "The Dueling Pianos Bar"),
        ("city", "New York"),
        ("state", "NY"),
        ("address", "335 Delancey Street"),
        ("phone", "914-003-1132"),
        ("genres", "Classical"),
        ("genres", "R&B"),
        ("genres", "Hip-Hop"),
    ]
}

pub fn guns_n_petals() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Guns N Petals"),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("phone", "326-123-5000"),
        ("genres", "Rock n Roll"),
        ("seeking_venue", "y"),
        ("seeking_description", "Looking for shows to perform at in the San Francisco Bay Area!"),
    ]
}

pub fn matt_quevedo() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Matt Quevedo"),
        ("city", "New York"),
        ("state", "NY"),
        ("phone", "300-400-5000"),
        ("genres", "Jazz"),
    ]
}

/// Create a record through its form and return its id.
pub async fn create(pool: &PgPool, uri: &str, fields: &[(&str, &str)]) -> i64 {
    let app = build_test_app(pool.clone());
    created_id(post_form(app, uri, fields).await).await
}
