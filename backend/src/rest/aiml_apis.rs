//! # REST API for Predictions
//!
//! Placeholder endpoints reserved for category prediction and spending
//! comparison. Both return fixed values.

use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use shared::{CompareResponse, PredictRequest, PredictResponse};
use tracing::info;

use crate::error::ApiError;
use crate::rest::{ApiJson, AppState};

/// Create the prediction API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/predict", post(predict_category))
        .route("/compare", get(compare_spending))
}

/// Predict a category for free text. The text is not inspected yet.
pub async fn predict_category(
    ApiJson(request): ApiJson<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    info!("POST /aiml/predict - {} chars", request.text.len());

    Ok(Json(PredictResponse {
        predicted_category: "Mocked Category".to_string(),
        confidence: Some(0.95),
    }))
}

pub async fn compare_spending() -> Json<CompareResponse> {
    info!("GET /aiml/compare");

    Json(CompareResponse {
        message: "Spending analysis placeholder.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::rest::test_support::setup_test_app;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt; // for `oneshot`

    async fn read_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn predict_request(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/aiml/predict")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_predict_returns_fixed_category() {
        let app = setup_test_app().await;

        let response = app
            .oneshot(predict_request(json!({"text": "groceries"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({"predicted_category": "Mocked Category", "confidence": 0.95})
        );
    }

    #[tokio::test]
    async fn test_predict_ignores_text() {
        let app = setup_test_app().await;

        let first = app
            .clone()
            .oneshot(predict_request(json!({"text": "rent"})))
            .await
            .unwrap();
        let second = app
            .oneshot(predict_request(json!({"text": ""})))
            .await
            .unwrap();

        assert_eq!(read_json(first).await, read_json(second).await);
    }

    #[tokio::test]
    async fn test_predict_requires_text() {
        let app = setup_test_app().await;

        let response = app.oneshot(predict_request(json!({}))).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_compare_returns_placeholder() {
        let app = setup_test_app().await;

        let request = Request::builder()
            .uri("/aiml/compare")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({"message": "Spending analysis placeholder."})
        );
    }
}
