//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as `main.rs`)
//! on top of a `#[sqlx::test]`-provided pool, and provides request helpers
//! driving it through `tower::ServiceExt`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use causeway_api::auth::jwt::{generate_access_token, JwtConfig};
use causeway_api::config::ServerConfig;
use causeway_api::router::build_app_router;
use causeway_api::state::AppState;
use causeway_core::roles::{ROLE_ADMIN, ROLE_USER};

/// Secret shared between the test token helpers and the test config.
const TEST_JWT_SECRET: &str = "integration-test-secret";

fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry_mins: 15,
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: test_jwt_config(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A valid token carrying the admin role.
pub fn admin_token() -> String {
    generate_access_token(1, ROLE_ADMIN, &test_jwt_config()).unwrap()
}

/// A valid token carrying the regular user role.
pub fn user_token() -> String {
    generate_access_token(2, ROLE_USER, &test_jwt_config()).unwrap()
}

async fn send(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, path: &str, token: &str) -> Response {
    send(app, "GET", path, Some(token), None).await
}

pub async fn get_anonymous(app: &Router, path: &str) -> Response {
    send(app, "GET", path, None, None).await
}

pub async fn post_json(
    app: &Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, "POST", path, Some(token), Some(body)).await
}

pub async fn put_json(app: &Router, path: &str, token: &str, body: serde_json::Value) -> Response {
    send(app, "PUT", path, Some(token), Some(body)).await
}

pub async fn delete(app: &Router, path: &str, token: &str) -> Response {
    send(app, "DELETE", path, Some(token), None).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert an error response shape: expected status plus `code` field.
pub async fn assert_error(response: Response, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
}
