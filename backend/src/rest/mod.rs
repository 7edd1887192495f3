//! # REST API Interface Layer
//!
//! HTTP endpoints for the expense tracker. This layer handles:
//! - JSON request/response serialization and contract validation
//! - Error translation from storage failures to HTTP status codes
//! - CORS configuration for the browser frontend
//! - Request logging
//!
//! Handlers open one storage session per request and never share it.

pub mod aiml_apis;
pub mod expense_apis;
pub mod extract;
pub mod mappers;

use axum::{http::HeaderValue, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::db::ExpenseStore;

pub use extract::{ApiJson, ApiPath};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: ExpenseStore,
}

impl AppState {
    pub fn new(store: ExpenseStore) -> Self {
        Self { store }
    }
}

/// CORS for the given origins. Credentials are allowed, so methods and
/// headers are mirrored from the request instead of using a wildcard.
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Create the Axum router with all routes configured
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(expense_apis::router())
        .nest("/aiml", aiml_apis::router())
        .layer(cors)
        .with_state(state)
}


#[cfg(test)]
mod tests {
    use super::test_support::setup_test_app;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use tower::util::ServiceExt; // for `oneshot`

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/expenses")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_preflight_from_dev_origin() {
        let app = setup_test_app().await;

        let response = app.oneshot(preflight("http://localhost:5173")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "DELETE");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "content-type");
    }

    #[tokio::test]
    async fn test_preflight_from_second_dev_origin() {
        let app = setup_test_app().await;

        let response = app.oneshot(preflight("http://localhost:5174")).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5174"
        );
    }

    #[tokio::test]
    async fn test_preflight_from_foreign_origin() {
        let app = setup_test_app().await;

        let response = app.oneshot(preflight("http://evil.test")).await.unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = setup_test_app().await;

        let request = Request::builder()
            .uri("/api/expenses")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
