#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use pagila_db::services::DataAccessConfig;
use sqlx::PgPool;
use tower::ServiceExt;

use pagila_api::config::ServerConfig;
use pagila_api::router::build_app_router;
use pagila_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and the given strategy.
pub fn test_config(use_sql_builder: bool) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8080".to_string()],
        request_timeout_secs: 30,
        data_access: DataAccessConfig {
            use_sql_builder,
            film_query_buckets: 4,
        },
        apply_schema: false,
    }
}

/// Build the full application router, entity strategy.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, false)
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app_with(pool: PgPool, use_sql_builder: bool) -> Router {
    let config = test_config(use_sql_builder);
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
