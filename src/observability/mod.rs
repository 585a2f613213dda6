//! Observability module for monitoring and metrics.
//!
//! This module provides operation counters and timing alongside the structured
//! `tracing` events emitted by the service.

pub mod metrics;

pub use metrics::{MetricsSummary, MetricsTracker, Timer};
