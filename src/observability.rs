//! Run counters

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by every fetch task of a run
#[derive(Debug, Default)]
pub struct Metrics {
    requests_sent: AtomicU64,
    placeholders_skipped: AtomicU64,
    images_written: AtomicU64,
    jobs_failed: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_sent(&self) {
        self.requests_sent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn placeholder_skipped(&self) {
        self.placeholders_skipped.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(counter = "placeholders_skipped", "Metric incremented");
    }

    pub fn image_written(&self) {
        self.images_written.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(counter = "images_written", "Metric incremented");
    }

    pub fn job_failed(&self) {
        self.jobs_failed.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(counter = "jobs_failed", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_sent: self.requests_sent.load(Ordering::Relaxed),
            placeholders_skipped: self.placeholders_skipped.load(Ordering::Relaxed),
            images_written: self.images_written.load(Ordering::Relaxed),
            jobs_failed: self.jobs_failed.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub requests_sent: u64,
    pub placeholders_skipped: u64,
    pub images_written: u64,
    pub jobs_failed: u64,
}
