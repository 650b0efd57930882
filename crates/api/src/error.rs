use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Terminal failures of an organisation request. Every variant renders as a
/// `{"message": ...}` body; internal error text never reaches the client.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("uuid '{0}' is either missing or invalid")]
    InvalidUuid(String),

    #[error("organisation not found")]
    NotFound,

    #[error("failed to return organisation")]
    Upstream(#[source] organisations::Error),

    #[error("organisation could not be serialised")]
    Serialization(#[source] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidUuid(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) | ApiError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "message": self.to_string() }));

        let mut response = (self.status(), body).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        );
        response
    }
}
