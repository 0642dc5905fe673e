//! Request counters
//!
//! Monotonic counters plus the current film count, shared by all handlers.
//! Relaxed atomics: values are exact per counter, not a consistent snapshot
//! across counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Registry of service counters
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    requests_served: AtomicU64,
    requests_rejected: AtomicU64,
    requests_failed: AtomicU64,
    not_found: AtomicU64,
    invalid_parameters: AtomicU64,
    films_deleted: AtomicU64,
    films: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a request answered with a 2xx status
    pub fn increment_served(&self) {
        self.requests_served.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a request answered with a 4xx status
    pub fn increment_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a request answered with a 5xx status
    pub fn increment_failed(&self) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_invalid_parameters(&self) {
        self.invalid_parameters.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deleted(&self) {
        self.films_deleted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the current number of films in the store
    pub fn set_films(&self, count: u64) {
        self.films.store(count, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_served: self.requests_served.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            requests_failed: self.requests_failed.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            invalid_parameters: self.invalid_parameters.load(Ordering::Relaxed),
            films_deleted: self.films_deleted.load(Ordering::Relaxed),
            films: self.films.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of all counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_served: u64,
    pub requests_rejected: u64,
    pub requests_failed: u64,
    pub not_found: u64,
    pub invalid_parameters: u64,
    pub films_deleted: u64,
    pub films: u64,
}
