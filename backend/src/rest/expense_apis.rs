//! # REST API for Expenses
//!
//! Endpoints for listing, creating and deleting expenses.

use axum::{
    extract::State,
    response::Json,
    routing::{delete, get},
    Router,
};
use shared::{ExpenseCreate, ExpenseDeleteResponse, ExpensePostResponse, ExpenseResponse};
use tracing::info;

use crate::error::ApiError;
use crate::rest::mappers::ExpenseMapper;
use crate::rest::{ApiJson, ApiPath, AppState};

/// Create the expense API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/:id", delete(delete_expense))
}

/// List every stored expense
pub async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseResponse>>, ApiError> {
    info!("GET /expenses");

    let mut session = state.store.session().await?;
    let expenses = session.list().await?;
    session.commit().await?;

    Ok(Json(expenses.into_iter().map(ExpenseMapper::to_dto).collect()))
}

/// Create a new expense
pub async fn create_expense(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ExpenseCreate>,
) -> Result<Json<ExpensePostResponse>, ApiError> {
    info!("POST /expenses - title: {:?}", request.title);

    let new_expense = ExpenseMapper::to_domain(request);

    let mut session = state.store.session().await?;
    let stored = session.insert(&new_expense).await?;
    session.commit().await?;

    info!("Created expense {}", stored.id);
    Ok(Json(ExpensePostResponse {
        message: "Expense Added".to_string(),
        id: stored.id,
    }))
}

/// Delete an expense by id
pub async fn delete_expense(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ExpenseDeleteResponse>, ApiError> {
    info!("DELETE /expenses/{}", id);

    let mut session = state.store.session().await?;
    if !session.delete(id).await? {
        session.rollback().await?;
        return Err(ApiError::NotFound("Expense not found".to_string()));
    }
    session.commit().await?;

    Ok(Json(ExpenseDeleteResponse {
        message: "Deleted Successfully".to_string(),
    }))
}
