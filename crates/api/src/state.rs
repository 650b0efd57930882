use axum::http::HeaderValue;
use organisations::ConceptsClient;
use std::sync::Arc;

use crate::metrics::Metrics;

/// Process-wide, read-only handler state, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub concepts: Arc<dyn ConceptsClient>,
    pub cache_control: HeaderValue,
    pub service: ServiceInfo,
    pub metrics: Arc<Metrics>,
}

/// Descriptors reported by the health endpoints.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub system_code: String,
    pub name: String,
    pub panic_guide: String,
}

impl AppState {
    pub fn new(
        concepts: Arc<dyn ConceptsClient>,
        cache_control: HeaderValue,
        service: ServiceInfo,
    ) -> Self {
        Self {
            concepts,
            cache_control,
            service,
            metrics: Metrics::new(),
        }
    }
}
