//! HTTP response handling for errors

use super::types::AdmissionError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for AdmissionError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            AdmissionError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            AdmissionError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Database operation failed".to_string(),
            ),
            AdmissionError::RateLimited { .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMIT_EXCEEDED",
                self.to_string(),
            ),
            AdmissionError::BudgetExceeded { .. } => (
                StatusCode::PAYMENT_REQUIRED,
                "BUDGET_EXCEEDED",
                self.to_string(),
            ),
            AdmissionError::Upstream(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "UPSTREAM_ERROR",
                self.to_string(),
            ),
            AdmissionError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let retry_after = match self {
            AdmissionError::RateLimited { retry_after_secs } => Some(*retry_after_secs),
            _ => None,
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                retry_after,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        let mut builder = HttpResponse::build(status_code);
        if let Some(secs) = retry_after {
            builder.insert_header(("Retry-After", secs.to_string()));
        }
        builder.json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    /// Seconds the caller should wait; only set for rate-limit denials
    #[serde(rename = "retryAfter", skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
    pub timestamp: i64,
}
