pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod logging;
pub mod metrics;
pub mod state;
pub mod transaction;

pub use config::AppConfig;
pub use error::ApiError;
pub use state::{AppState, ServiceInfo};

use axum::{
    extract::State,
    middleware,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the full router: organisation lookups plus operational endpoints.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/__health", get(health::health))
        .route("/__gtg", get(health::good_to_go))
        .route("/ping", get(health::ping))
        .route("/__ping", get(health::ping))
        .route("/build-info", get(health::build_info))
        .route("/__build-info", get(health::build_info))
        .route("/__metrics", get(metrics_snapshot))
        .route(
            "/organisations/:uuid",
            // get() answers HEAD too unless HEAD has its own handler
            get(handlers::get_organisation)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            transaction::transaction_id_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn metrics_snapshot(State(state): State<Arc<AppState>>) -> Json<metrics::MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
