use axum::{
    extract::{rejection::PathRejection, OriginalUri, Path, State},
    http::{header, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
    Extension,
};
use organisations::{canonical_uuid, is_valid_uuid, map_concept, Organisation};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::{ApiError, JSON_CONTENT_TYPE};
use crate::metrics::TimedOperation;
use crate::state::AppState;
use crate::transaction::TransactionId;

/// `GET /organisations/{uuid}`
pub async fn get_organisation(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Extension(transaction_id): Extension<TransactionId>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let transaction_id = transaction_id.as_str();

    let uuid = match path {
        Ok(Path(uuid)) => uuid,
        Err(rejection) => {
            let raw = last_segment(&uri).to_string();
            warn!(uuid = %raw, transaction_id, error = %rejection, "Undecodable organisation path");
            return Err(ApiError::InvalidUuid(raw));
        }
    };

    if !is_valid_uuid(&uuid) {
        let err = ApiError::InvalidUuid(uuid.clone());
        warn!(uuid = %uuid, transaction_id, "{}", err);
        return Err(err);
    }

    let organisation = fetch_organisation(&state, &uuid, transaction_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    // requested through an alias: send the client to the canonical UUID
    if !organisation.id.contains(uuid.as_str()) {
        let Some(canonical) = canonical_uuid(&organisation.id) else {
            error!(
                uuid = %uuid,
                transaction_id,
                id = %organisation.id,
                "Organisation identifier carries no canonical UUID"
            );
            return Err(ApiError::Upstream(organisations::Error::Upstream(format!(
                "identifier {} carries no UUID",
                organisation.id
            ))));
        };

        let location = canonical_location(&uri, canonical);
        info!(
            uuid = %uuid,
            canonical_uuid = %canonical,
            transaction_id,
            "Redirecting to canonical organisation"
        );

        return Ok(redirect(&location));
    }

    let body = serde_json::to_vec(&organisation).map_err(|e| {
        error!(uuid = %uuid, transaction_id, error = %e, "Failed to serialise organisation");
        ApiError::Serialization(e)
    })?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE)),
            (header::CACHE_CONTROL, state.cache_control.clone()),
        ],
        body,
    )
        .into_response())
}

/// Any other method on `/organisations/{uuid}`.
pub async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

async fn fetch_organisation(
    state: &AppState,
    uuid: &str,
    transaction_id: &str,
) -> Result<Option<Organisation>, ApiError> {
    let timer = TimedOperation::start();
    let result = state.concepts.get_concept(uuid, transaction_id).await;
    state.metrics.record_upstream(timer.elapsed());

    let response = result.map_err(|e| {
        error!(uuid, transaction_id, error = %e, "Request to concepts API failed");
        ApiError::Upstream(e)
    })?;

    map_concept(response.status, &response.body).map_err(|e| {
        error!(
            uuid,
            transaction_id,
            error = %e,
            body = %String::from_utf8_lossy(&response.body),
            "Failed to decode concepts API response"
        );
        ApiError::Upstream(e)
    })
}

/// Raw (still percent-encoded) final path segment.
fn last_segment(uri: &Uri) -> &str {
    uri.path().rsplit('/').next().unwrap_or_default()
}

/// The request target with its final path segment swapped for `canonical`.
/// Works on the raw path so an encoded UUID segment is replaced as well.
fn canonical_location(uri: &Uri, canonical: &str) -> String {
    let parent = uri
        .path()
        .rsplit_once('/')
        .map(|(parent, _)| parent)
        .unwrap_or_default();

    match uri.query() {
        Some(query) => format!("{parent}/{canonical}?{query}"),
        None => format!("{parent}/{canonical}"),
    }
}

fn redirect(location: &str) -> Response {
    let mut response = StatusCode::MOVED_PERMANENTLY.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
    match HeaderValue::from_str(location) {
        Ok(value) => {
            headers.insert(header::LOCATION, value);
        }
        Err(e) => {
            error!(location, error = %e, "Redirect location is not a valid header value");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    }
    response
}
