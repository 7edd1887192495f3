//! # API Errors
//!
//! Every failure a handler can produce, and its translation into an HTTP
//! status plus an [`ErrorResponse`] body.

use axum::{
    extract::{path::ErrorKind, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::error::Category;
use shared::{ErrorDetail, ErrorResponse, FieldError};
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Input does not match the contract; nothing was stored
    #[error("invalid input: {0:?}")]
    Validation(Vec<FieldError>),
    /// The request body could not be read at all
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// A single rejected input at `loc`
    pub fn validation(loc: Vec<String>, msg: impl Into<String>, kind: &str) -> Self {
        ApiError::Validation(vec![FieldError {
            loc,
            msg: msg.into(),
            kind: kind.to_string(),
        }])
    }

    /// Rejection for a JSON body that failed to deserialize at a known path
    pub fn from_json(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err
            .path()
            .iter()
            .filter_map(|segment| match segment {
                serde_path_to_error::Segment::Map { key } => Some(key.clone()),
                serde_path_to_error::Segment::Seq { index } => Some(index.to_string()),
                serde_path_to_error::Segment::Enum { variant } => Some(variant.clone()),
                serde_path_to_error::Segment::Unknown => None,
            })
            .collect();

        Self::json_body(path, err.into_inner())
    }

    /// Rejection for a JSON body error found at `path` inside the body
    pub fn json_body(path: Vec<String>, inner: serde_json::Error) -> Self {
        let mut msg = inner.to_string();
        let position = format!(" at line {} column {}", inner.line(), inner.column());
        if let Some(stripped) = msg.strip_suffix(&position) {
            msg = stripped.to_string();
        }

        let mut loc = vec!["body".to_string()];
        loc.extend(path);

        let kind = match inner.classify() {
            Category::Data => match missing_field(&msg) {
                Some(field) => {
                    loc.push(field);
                    "missing"
                }
                None => "invalid_type",
            },
            Category::Syntax | Category::Eof | Category::Io => "json_invalid",
        };

        Self::validation(loc, msg, kind)
    }
}

// serde reports absent fields as "missing field `name`" on the parent path
fn missing_field(msg: &str) -> Option<String> {
    msg.strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
        .map(str::to_string)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::Validation(fields) => ErrorDetail::Fields(fields),
            // Storage details stay in the log
            ApiError::Database(e) => {
                error!("Persistence failure: {:?}", e);
                ErrorDetail::Message("Internal server error".to_string())
            }
            other => ErrorDetail::Message(other.to_string()),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(e) => {
                let mut loc = vec!["path".to_string()];
                if let ErrorKind::ParseErrorAtKey { key, .. } = e.kind() {
                    loc.push(key.clone());
                }
                ApiError::validation(loc, e.body_text(), "path_parsing")
            }
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}
