//! Payment request and response types.
//!
//! This module defines:
//! - `PaymentRequest`: the inbound JSON payload naming a (service, method)
//!   pair and a payment interval
//! - `PaymentResponse`: the outbound payload carrying the freshly minted
//!   token alongside the echoed interval and method
//!
//! Both types are transient: constructed per request/response, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request for a payment token.
///
/// # JSON Example
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
/// # Validation
///
/// All four fields must be present and well-typed; a missing or
/// mistyped field is a decode failure. The interval itself is passed
/// through as-is: `from <= to` is deliberately NOT enforced, matching
/// the service's permissive contract.
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    /// Identifier of the service being paid for
    pub service_id: String,

    /// Method of the service being paid for
    pub method: String,

    /// Start of the payment period (ISO-8601)
    pub from: DateTime<Utc>,

    /// End of the payment period (ISO-8601)
    pub to: DateTime<Utc>,
}

/// Response returned after a successful token issuance.
///
/// # JSON Example
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
/// The token is opaque and unguessable; it carries no embedded
/// information and the service keeps no record of having issued it.
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    /// Newly minted payment token (32 random bytes, URL-safe base64)
    pub token: String,

    /// Start of the payment period, echoed from the request
    pub from: DateTime<Utc>,

    /// End of the payment period, echoed from the request
    pub to: DateTime<Utc>,

    /// Service method, echoed from the request
    pub method: String,
}
