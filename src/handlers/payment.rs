//! Payment token issuance handler.
//!
//! Implements the single business endpoint:
//! - POST /api/v1/payment - Issue a token for a registered (service, method) pair

use crate::{
    error::AppError,
    models::payment::{PaymentRequest, PaymentResponse},
    registry::ServiceRegistry,
    services::token_service,
};
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use std::sync::Arc;

/// Issue a payment token.
///
/// # Request Body
///
/// ```json
/// {
///   "service_id": "service1",
///   "method": "method1",
///   "from": "2024-01-01T00:00:00Z",
///   "to": "2024-01-31T00:00:00Z"
/// }
/// ```
///
/// # Response (200)
///
/// ```json
/// {
///   "token": "kkXL8v2W0s-J4kq7hQ9y3mP1nZbT6cRfA5dE8uYwGx0=",
///   "from": "2024-01-01T00:00:00Z",
///   "to": "2024-01-31T00:00:00Z",
///   "method": "method1"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the body cannot be decoded into a `PaymentRequest`
///   (the registry is never consulted in that case)
/// - 404 if the (service, method) pair was never registered
/// - 500 if the OS random source fails while minting the token
pub async fn create_payment(
    State(registry): State<Arc<ServiceRegistry>>,
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> Result<Json<PaymentResponse>, AppError> {
    // Step 1: Decode the request body.
    // The extractor result is taken explicitly so every decode failure
    // (syntax error, wrong type, missing field) maps to a single 400
    // instead of axum's default 400/415/422 split.
    let Json(request) = payload.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

    // Step 2: Validate the pair against the registry
    if !registry.is_available(&request.service_id, &request.method) {
        return Err(AppError::ServiceNotFound);
    }

    // Step 3: Mint a fresh token
    let token = token_service::generate_token()?;

    // Step 4: Echo the validated interval and method alongside the token
    Ok(Json(PaymentResponse {
        token,
        from: request.from,
        to: request.to,
        method: request.method,
    }))
}
