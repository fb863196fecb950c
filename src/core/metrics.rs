//! Logger metrics for observability
//!
//! Per-logger counters of records delivered, records dropped by the level
//! threshold, and records that at least one appender failed to write.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use multi_handler_logging::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_emitted();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.emitted_count(), 1);
/// assert_eq!(metrics.filtered_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records handed to the attached appenders
    emitted: AtomicU64,

    /// Records below the logger threshold
    filtered: AtomicU64,

    /// Records for which at least one appender returned an error
    failed: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted_count(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Record a delivered entry, returning the previous count
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.emitted.fetch_add(1, Ordering::Relaxed)
    }

    /// Record an entry dropped by the threshold
    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    /// Record an entry some appender failed to write
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.emitted.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            emitted: AtomicU64::new(self.emitted_count()),
            filtered: AtomicU64::new(self.filtered_count()),
            failed: AtomicU64::new(self.failed_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.emitted_count(), 0);
        assert_eq!(metrics.filtered_count(), 0);
        assert_eq!(metrics.failed_count(), 0);
    }

    #[test]
    fn test_metrics_record() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_emitted(), 0); // Returns previous value
        metrics.record_emitted();
        metrics.record_failed();
        assert_eq!(metrics.emitted_count(), 2);
        assert_eq!(metrics.failed_count(), 1);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_emitted();
        metrics.record_filtered();

        metrics.reset();

        assert_eq!(metrics.emitted_count(), 0);
        assert_eq!(metrics.filtered_count(), 0);
    }

    #[test]
    fn test_metrics_clone_is_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_emitted();

        let snapshot = metrics.clone();
        metrics.record_emitted();

        assert_eq!(metrics.emitted_count(), 2);
        assert_eq!(snapshot.emitted_count(), 1);
    }
}
