// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// Application-specific error types
/// DOCUMENTATION: Every failure of the proximity pipeline surfaces as one of these.
/// Nothing is retried; each variant maps to an HTTP status and a JSON body.
#[derive(Error, Debug)]
pub enum ProximityError {
    /// Request passed JSON parsing but violates a field constraint
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Request body is not valid JSON or has missing/mistyped fields
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Connection acquisition or query execution failed
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Query timed out after {0}s")]
    Timeout(u64),

    /// A stored row could not be turned into a result item
    #[error("Stored geometry for leisure {id} could not be decoded: {reason}")]
    Decoding { id: i32, reason: String },
}

impl ProximityError {
    fn error_code(&self) -> &'static str {
        match self {
            ProximityError::Validation(_) => "VALIDATION_ERROR",
            ProximityError::InvalidBody(_) => "INVALID_BODY",
            ProximityError::Storage(_) => "STORAGE_ERROR",
            ProximityError::Timeout(_) => "QUERY_TIMEOUT",
            ProximityError::Decoding { .. } => "DECODING_ERROR",
        }
    }
}

impl From<sqlx::Error> for ProximityError {
    fn from(err: sqlx::Error) -> Self {
        ProximityError::Storage(err.to_string())
    }
}

/// Convert ProximityError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for ProximityError {
    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        // Field-level detail for constraint violations
        if let ProximityError::Validation(errors) = self {
            if let Ok(details) = serde_json::to_value(errors) {
                body["error"]["details"] = details;
            }
        }

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ProximityError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ProximityError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ProximityError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProximityError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ProximityError::Decoding { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use validator::ValidationError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ProximityError::InvalidBody("x".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ProximityError::Storage("down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ProximityError::Timeout(10).status_code(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            ProximityError::Decoding { id: 1, reason: "bad".into() }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_validation_body_has_field_details() {
        let mut errors = ValidationErrors::new();
        errors.add("radius", ValidationError::new("range"));

        let response = ProximityError::Validation(errors).error_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["details"]["radius"].is_array());
    }
}
