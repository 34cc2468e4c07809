//! API endpoint handlers
//!
//! This module implements the HTTP endpoints for the backend: service
//! identity, health check, and the documentation routes built from the
//! OpenAPI descriptor.

use crate::api::docs;
use crate::core::config::Config;
use crate::core::constants::{api, route};
use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Create the API router with all endpoints
///
/// Builds the OpenAPI descriptor once and mounts the interactive
/// documentation UI and the raw document alongside the API routes.
pub fn create_router(state: AppState) -> Router {
    let (api_routes, api_doc) = OpenApiRouter::with_openapi(docs::openapi())
        .routes(routes!(root))
        .routes(routes!(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let spec = api_doc.clone();

    Router::new()
        .merge(api_routes)
        .merge(Scalar::with_url(route::SWAGGER_UI, api_doc))
        .route(
            route::OPENAPI_JSON,
            get(move || {
                let spec = spec.clone();
                async move { Json(spec) }
            }),
        )
}

/// GET / - Root endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses((status = 200, description = "Service identity and status"))
)]
async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "message": format!("{} v{}", api::TITLE, api::VERSION),
        "status": "running",
        "documentation": state.config.docs_url(),
        "endpoints": {
            "health": "/health",
            "swagger_ui": route::SWAGGER_UI,
            "openapi": route::OPENAPI_JSON,
        },
    }))
}

/// GET /health - Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses((status = 200, description = "Service liveness"))
)]
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": api::VERSION,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_router() -> Router {
        create_router(AppState {
            config: Arc::new(Config::default()),
        })
    }

    async fn get_response(uri: &str) -> (StatusCode, Value) {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .method("GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get_response("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], api::VERSION);
    }

    #[tokio::test]
    async fn test_root() {
        let (status, body) = get_response("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
        assert_eq!(
            body["documentation"],
            "http://localhost:8080/swagger-ui.html"
        );
    }

    #[tokio::test]
    async fn test_openapi_document_route() {
        let (status, body) = get_response(route::OPENAPI_JSON).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], api::TITLE);
        assert_eq!(body["info"]["version"], api::VERSION);
    }

    #[tokio::test]
    async fn test_swagger_ui_served() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri(route::SWAGGER_UI)
                    .method("GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
