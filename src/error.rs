//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and plain-text bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur while handling
/// a payment request. Each variant maps to a specific HTTP status code and
/// human-readable message. Every error is terminal for the request: there
/// are no retries, and the condition is reported synchronously to the
/// caller in the same exchange.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body could not be parsed into a `PaymentRequest`
    /// (malformed JSON, wrong field types, missing fields, truncated body).
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The requested (service, method) pair was never registered.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Service or method not found")]
    ServiceNotFound,

    /// The operating system's random source failed while minting a token.
    ///
    /// Expected never to occur in practice. Returns HTTP 500 Internal
    /// Server Error rather than crashing the process.
    #[error("Token generation failed")]
    TokenGeneration(#[from] rand::rand_core::OsError),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return a plain-text body carrying a human-readable message.
///
/// # Status Code Mapping
///
/// - `InvalidRequest` → 400 Bad Request
/// - `ServiceNotFound` → 404 Not Found
/// - `TokenGeneration` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::ServiceNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::TokenGeneration(source) => {
                // Client errors above are normal traffic; this one is a
                // genuine server fault and the only variant worth logging.
                tracing::error!("Token generation failed: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
