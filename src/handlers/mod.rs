//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, shared state)
//! 2. Performs business logic (registry lookup, token generation)
//! 3. Returns HTTP response (JSON, status code)

/// Service health endpoint
pub mod health;
/// Payment token issuance endpoint
pub mod payment;
