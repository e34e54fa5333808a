//! In-memory registry of services and the methods they expose.
//!
//! The registry is the authoritative record of which (service, method)
//! pairs are allowed to receive payment tokens. It is constructed once at
//! startup, populated by the bootstrap code, and shared with every request
//! handler behind an `Arc` via Axum's State extraction.
//!
//! # Concurrency
//!
//! A single reader/writer lock guards the service map. Availability checks
//! take the read lock and may run fully concurrently; registration takes
//! the write lock and excludes all other access. The lock is only ever
//! held for the duration of a map lookup or insert, never across an await
//! point.

use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};

/// Concurrency-safe set of registered (service, method) pairs.
///
/// Membership only grows: there is no deregistration and no persistence
/// across restarts. Registering the same pair twice is a no-op.
///
/// # Example
///
/// ```
/// use payment_token_service::registry::ServiceRegistry;
///
/// let registry = ServiceRegistry::new();
/// registry.register("billing", "charge");
///
/// assert!(registry.is_available("billing", "charge"));
/// assert!(!registry.is_available("billing", "refund"));
/// ```
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    /// Service ID mapped to the set of methods registered for it.
    ///
    /// An absent service key is equivalent to an empty method set.
    services: RwLock<HashMap<String, HashSet<String>>>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a (service, method) pair.
    ///
    /// Idempotent: registering a pair that already exists leaves the
    /// registry unchanged. Cannot fail.
    ///
    /// Registration normally happens only at startup, but taking the
    /// write lock here keeps the operation safe if it is ever invoked
    /// concurrently with request traffic.
    pub fn register(&self, service_id: &str, method: &str) {
        let mut services = self.services.write();

        services
            .entry(service_id.to_owned())
            .or_default()
            .insert(method.to_owned());
    }

    /// Check whether a (service, method) pair has been registered.
    ///
    /// Side-effect free; takes the read lock, so any number of
    /// availability checks can run concurrently.
    pub fn is_available(&self, service_id: &str, method: &str) -> bool {
        let services = self.services.read();

        services
            .get(service_id)
            .is_some_and(|methods| methods.contains(method))
    }

    /// Number of registered (service, method) pairs.
    ///
    /// Reported by the health endpoint.
    pub fn pair_count(&self) -> usize {
        let services = self.services.read();

        services.values().map(HashSet::len).sum()
    }
}
