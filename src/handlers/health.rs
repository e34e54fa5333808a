//! Health check endpoint for service monitoring.

use crate::registry::ServiceRegistry;
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Health check response.
///
/// Returns service status and registry population.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Number of (service, method) pairs currently registered
    pub registered_pairs: usize,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "registered_pairs": 3,
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
pub async fn health_check(State(registry): State<Arc<ServiceRegistry>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        registered_pairs: registry.pair_count(),
        timestamp: Utc::now(),
    })
}
