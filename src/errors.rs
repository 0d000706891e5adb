// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Closed set of failures the salon endpoints can report
/// Each variant maps to exactly one HTTP status code and error code
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SalonsError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Salon not found with id: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl SalonsError {
    /// Stable machine-readable code included in every error body
    pub fn code(&self) -> &'static str {
        match self {
            SalonsError::ValidationError(_) => "VALIDATION_ERROR",
            SalonsError::InvalidInput(_) => "INVALID_INPUT",
            SalonsError::NotFound(_) => "NOT_FOUND",
            SalonsError::Forbidden(_) => "FORBIDDEN",
            SalonsError::DatabaseError(_) => "DATABASE_ERROR",
            SalonsError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

/// Convert SalonsError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for SalonsError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            SalonsError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SalonsError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            SalonsError::NotFound(_) => StatusCode::NOT_FOUND,
            SalonsError::Forbidden(_) => StatusCode::FORBIDDEN,
            SalonsError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SalonsError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        let cases = [
            (SalonsError::ValidationError("x".into()), StatusCode::BAD_REQUEST),
            (SalonsError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (SalonsError::NotFound("1".into()), StatusCode::NOT_FOUND),
            (SalonsError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (SalonsError::DatabaseError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (SalonsError::InternalError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(error.status_code(), status, "{:?}", error);
            assert_eq!(error.error_response().status(), status);
        }
    }

    #[actix_rt::test]
    async fn test_error_body_shape() {
        let response = SalonsError::NotFound("42".into()).error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Salon not found with id: 42");
        assert!(body["error"]["timestamp"].is_string());
    }
}
