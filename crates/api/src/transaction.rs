//! Transaction ID propagation.
//!
//! Every request runs inside a span carrying its transaction ID so handler
//! and client logs can be correlated with upstream ones.

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::state::AppState;

pub const TRANSACTION_ID_HEADER: &str = "x-request-id";

/// Transaction ID of the current request, available as an extension.
#[derive(Debug, Clone)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn from_request(req: &Request) -> Self {
        let id = req
            .headers()
            .get(TRANSACTION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(String::from)
            .unwrap_or_else(|| format!("tid_{}", Uuid::new_v4().simple()));
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub async fn transaction_id_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let transaction_id = TransactionId::from_request(&req);
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let span = tracing::info_span!(
        "request",
        transaction_id = %transaction_id.as_str(),
        method = %method,
        path = %path,
    );

    req.extensions_mut().insert(transaction_id.clone());
    let mut response = next.run(req).instrument(span.clone()).await;

    let status = response.status();
    state.metrics.record_response(status);

    span.in_scope(|| {
        tracing::info!(
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );
    });

    if let Ok(value) = HeaderValue::from_str(transaction_id.as_str()) {
        response.headers_mut().insert(TRANSACTION_ID_HEADER, value);
    }

    response
}
