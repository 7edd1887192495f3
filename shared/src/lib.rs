use serde::{Deserialize, Serialize};

/// Payload for creating an expense. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCreate {
    pub title: String,
    pub amount: f64,
    pub category: String,
    /// Caller-supplied date, stored as given
    pub date: String,
}

/// A persisted expense as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseResponse {
    pub id: i64,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

/// Response after an expense has been stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensePostResponse {
    pub message: String,
    /// Identifier assigned by the store
    pub id: i64,
}

/// Response after an expense has been removed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDeleteResponse {
    pub message: String,
}

/// Free text to categorize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_category: String,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareResponse {
    pub message: String,
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: ErrorDetail,
}

/// A plain message, or one entry per rejected input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

/// Why one input was rejected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Where the input came from (`body`, `path`) followed by the field path
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}
