//! Payment Token Service - Library Root
//!
//! This is a minimal REST API for issuing opaque payment tokens. A caller
//! names a (service, method) pair plus a payment interval; if the pair is
//! registered, the service responds with a freshly generated unguessable
//! token bound to that interval. Tokens are never stored — the service
//! keeps no record of issuance.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Registry**: in-memory (service, method) set behind a reader/writer lock
//! - **Tokens**: 32 OS-random bytes, URL-safe base64
//! - **Format**: JSON requests/responses, plain-text errors
//!
//! The router is constructed by [`app`] so integration tests can drive it
//! in-process; the binary in `main.rs` handles configuration and serving.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod services;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::registry::ServiceRegistry;

/// Build the application router around a populated registry.
///
/// # Routes
///
/// - `GET /health` - service status and registry population
/// - `POST /api/v1/payment` - issue a payment token
///
/// The registry is shared with all handlers via State extraction; request
/// traffic only ever takes its read lock.
pub fn app(registry: Arc<ServiceRegistry>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/v1/payment", post(handlers::payment::create_payment))
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share the registry with all handlers via State extraction
        .with_state(registry)
}
