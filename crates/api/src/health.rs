//! Operational endpoints: health, good-to-go, ping and build info.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

const CONCEPTS_CHECK_ID: &str = "concepts-api-check";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResult {
    pub schema_version: u8,
    pub system_code: String,
    pub name: String,
    pub description: String,
    pub ok: bool,
    pub checks: Vec<CheckResult>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub id: String,
    pub name: String,
    pub ok: bool,
    pub severity: u8,
    pub business_impact: String,
    pub technical_summary: String,
    pub panic_guide: String,
    pub check_output: String,
    pub last_updated: String,
}

#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// `GET /__health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResult> {
    let check = concepts_check(&state).await;

    Json(HealthResult {
        schema_version: 1,
        system_code: state.service.system_code.clone(),
        name: state.service.name.clone(),
        description: "A public RESTful API for accessing organisations".to_string(),
        ok: check.ok,
        checks: vec![check],
    })
}

/// `GET /__gtg`
pub async fn good_to_go(State(state): State<Arc<AppState>>) -> Response {
    match state.concepts.check_connectivity().await {
        Ok(()) => (StatusCode::OK, "OK").into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Good-to-go check failed");
            (StatusCode::SERVICE_UNAVAILABLE, e.to_string()).into_response()
        }
    }
}

/// `GET /ping`, `GET /__ping`
pub async fn ping() -> &'static str {
    "pong"
}

/// `GET /build-info`, `GET /__build-info`
pub async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn concepts_check(state: &AppState) -> CheckResult {
    let (ok, check_output) = match state.concepts.check_connectivity().await {
        Ok(()) => (true, "Connectivity to the concepts API is ok".to_string()),
        Err(e) => (false, e.to_string()),
    };

    CheckResult {
        id: CONCEPTS_CHECK_ID.to_string(),
        name: "Check connectivity to the concepts API".to_string(),
        ok,
        severity: 2,
        business_impact: "Unable to respond to Public Organisations api requests".to_string(),
        technical_summary: "Cannot connect to the concepts API to resolve organisations"
            .to_string(),
        panic_guide: state.service.panic_guide.clone(),
        check_output,
        last_updated: timestamp(Utc::now()),
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
