//! Data models for API request and response payloads.

/// Payment request/response types
pub mod payment;
