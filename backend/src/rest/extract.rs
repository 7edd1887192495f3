//! Request extractors whose rejections are [`ApiError`]s.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::{header, HeaderMap},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body. A request without a content type is still read as JSON.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !accepts_json(req.headers()) {
            return Err(ApiError::validation(
                vec!["body".to_string()],
                "Expected a JSON request body",
                "content_type",
            ));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        parse_json(&bytes).map(ApiJson)
    }
}

/// Path parameters
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(ApiError::from_json)?;

    // Trailing data after the document
    deserializer
        .end()
        .map_err(|err| ApiError::json_body(Vec::new(), err))?;

    Ok(value)
}

// Missing, `*/json` and `*/*+json` are all read as JSON
fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some((_, subtype)) => subtype == "json" || subtype.ends_with("+json"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use shared::{ExpenseCreate, FieldError};

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    fn fields(err: ApiError) -> Vec<FieldError> {
        match err {
            ApiError::Validation(fields) => fields,
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_json_content_types() {
        assert!(accepts_json(&HeaderMap::new()));
        assert!(accepts_json(&headers_with("application/json")));
        assert!(accepts_json(&headers_with("application/json; charset=utf-8")));
        assert!(accepts_json(&headers_with("application/merge-patch+json")));
        assert!(!accepts_json(&headers_with("text/plain")));
        assert!(!accepts_json(&headers_with("application/x-www-form-urlencoded")));
    }

    #[test]
    fn test_parse_json_valid_body() {
        let create: ExpenseCreate = parse_json(
            br#"{"title": "Coffee", "amount": 4.5, "category": "Food", "date": "2024-01-01"}"#,
        )
        .unwrap();

        assert_eq!(create.title, "Coffee");
    }

    #[test]
    fn test_parse_json_trailing_data() {
        let err = parse_json::<ExpenseCreate>(
            br#"{"title": "Coffee", "amount": 4.5, "category": "Food", "date": "2024-01-01"} x"#,
        )
        .unwrap_err();

        let fields = fields(err);
        assert_eq!(fields[0].loc, vec!["body"]);
        assert_eq!(fields[0].kind, "json_invalid");
    }

    #[test]
    fn test_parse_json_empty_body() {
        let fields = fields(parse_json::<ExpenseCreate>(b"").unwrap_err());

        assert_eq!(fields[0].kind, "json_invalid");
    }
}
