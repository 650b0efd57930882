use axum::http::StatusCode;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

pub struct Metrics {
    // Responses by status class
    total_requests: AtomicUsize,
    successful_requests: AtomicUsize,
    redirected_requests: AtomicUsize,
    client_errors: AtomicUsize,
    server_errors: AtomicUsize,

    // Concepts API calls (timing in microseconds)
    upstream_calls: AtomicUsize,
    total_upstream_time_us: AtomicU64,
}

impl Metrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            total_requests: AtomicUsize::new(0),
            successful_requests: AtomicUsize::new(0),
            redirected_requests: AtomicUsize::new(0),
            client_errors: AtomicUsize::new(0),
            server_errors: AtomicUsize::new(0),
            upstream_calls: AtomicUsize::new(0),
            total_upstream_time_us: AtomicU64::new(0),
        })
    }

    pub fn record_response(&self, status: StatusCode) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        let counter = if status.is_success() {
            &self.successful_requests
        } else if status.is_redirection() {
            &self.redirected_requests
        } else if status.is_client_error() {
            &self.client_errors
        } else if status.is_server_error() {
            &self.server_errors
        } else {
            return;
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upstream(&self, duration: Duration) {
        self.upstream_calls.fetch_add(1, Ordering::Relaxed);
        self.total_upstream_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            successful_requests: self.successful_requests.load(Ordering::Relaxed),
            redirected_requests: self.redirected_requests.load(Ordering::Relaxed),
            client_errors: self.client_errors.load(Ordering::Relaxed),
            server_errors: self.server_errors.load(Ordering::Relaxed),
            upstream_calls: self.upstream_calls.load(Ordering::Relaxed),
            avg_upstream_time_ms: self.avg_time_ms(&self.total_upstream_time_us, &self.upstream_calls),
        }
    }

    fn avg_time_ms(&self, total_us: &AtomicU64, count: &AtomicUsize) -> f64 {
        let total = total_us.load(Ordering::Relaxed) as f64;
        let cnt = count.load(Ordering::Relaxed) as f64;
        if cnt > 0.0 {
            total / cnt / 1000.0 // Convert to ms
        } else {
            0.0
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub total_requests: usize,
    pub successful_requests: usize,
    pub redirected_requests: usize,
    pub client_errors: usize,
    pub server_errors: usize,
    pub upstream_calls: usize,
    pub avg_upstream_time_ms: f64,
}

pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
