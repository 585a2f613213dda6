//! Operation counters for the contact service.
//!
//! The tracker is owned by `ContactServiceImpl`. Counters are atomics, so
//! they are bumped through `&self` and read for `/stats` without taking the
//! store lock.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Counters for batch operations and searches.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    contacts_created_total: Arc<AtomicU64>,
    contacts_updated_total: Arc<AtomicU64>,
    update_misses_total: Arc<AtomicU64>,
    contacts_deleted_total: Arc<AtomicU64>,
    delete_misses_total: Arc<AtomicU64>,
    search_queries_total: Arc<AtomicU64>,
    rejected_queries_total: Arc<AtomicU64>,
}

/// Point-in-time copy of every counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSummary {
    pub contacts_created_total: u64,
    pub contacts_updated_total: u64,
    pub update_misses_total: u64,
    pub contacts_deleted_total: u64,
    pub delete_misses_total: u64,
    pub search_queries_total: u64,
    pub rejected_queries_total: u64,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            contacts_created_total: Arc::new(AtomicU64::new(0)),
            contacts_updated_total: Arc::new(AtomicU64::new(0)),
            update_misses_total: Arc::new(AtomicU64::new(0)),
            contacts_deleted_total: Arc::new(AtomicU64::new(0)),
            delete_misses_total: Arc::new(AtomicU64::new(0)),
            search_queries_total: Arc::new(AtomicU64::new(0)),
            rejected_queries_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a create batch.
    pub fn track_create_batch(&self, created: usize, duration_ms: u128) {
        self.contacts_created_total
            .fetch_add(created as u64, Ordering::Relaxed);

        tracing::info!(
            created = created,
            duration_ms = duration_ms,
            "Create batch completed"
        );
    }

    /// Track an update batch. `requested - updated` items were not found.
    pub fn track_update_batch(&self, requested: usize, updated: usize, duration_ms: u128) {
        let missed = requested.saturating_sub(updated);
        self.contacts_updated_total
            .fetch_add(updated as u64, Ordering::Relaxed);
        self.update_misses_total
            .fetch_add(missed as u64, Ordering::Relaxed);

        tracing::info!(
            requested = requested,
            updated = updated,
            not_found = missed,
            duration_ms = duration_ms,
            "Update batch completed"
        );
    }

    /// Track a delete batch. `requested - deleted` ids were not found.
    pub fn track_delete_batch(&self, requested: usize, deleted: usize, duration_ms: u128) {
        let missed = requested.saturating_sub(deleted);
        self.contacts_deleted_total
            .fetch_add(deleted as u64, Ordering::Relaxed);
        self.delete_misses_total
            .fetch_add(missed as u64, Ordering::Relaxed);

        tracing::info!(
            requested = requested,
            deleted = deleted,
            not_found = missed,
            duration_ms = duration_ms,
            "Delete batch completed"
        );
    }

    /// Track a search query.
    pub fn track_search_query(&self, duration_ms: u128, result_count: usize) {
        self.search_queries_total.fetch_add(1, Ordering::Relaxed);

        tracing::info!(
            duration_ms = duration_ms,
            result_count = result_count,
            "Search query completed"
        );
    }

    /// Track a query rejected before reaching the store.
    pub fn track_rejected_query(&self, reason: &str) {
        self.rejected_queries_total.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(reason = %reason, "Search query rejected");
    }

    /// Get the total number of search queries.
    pub fn search_queries_total(&self) -> u64 {
        self.search_queries_total.load(Ordering::Relaxed)
    }

    /// Snapshot all counters.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            contacts_created_total: self.contacts_created_total.load(Ordering::Relaxed),
            contacts_updated_total: self.contacts_updated_total.load(Ordering::Relaxed),
            update_misses_total: self.update_misses_total.load(Ordering::Relaxed),
            contacts_deleted_total: self.contacts_deleted_total.load(Ordering::Relaxed),
            delete_misses_total: self.delete_misses_total.load(Ordering::Relaxed),
            search_queries_total: self.search_queries_total.load(Ordering::Relaxed),
            rejected_queries_total: self.rejected_queries_total.load(Ordering::Relaxed),
        }
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::debug!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}
