use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use crate::error::ApiError;

pub mod health;
pub mod league;
pub mod upload;

/// Static CORS preflight answer. Needs no configuration or database.
pub fn preflight(methods: &'static str, headers: &'static str) -> Response {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, methods),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, headers),
            (header::ACCESS_CONTROL_MAX_AGE, "86400"),
        ],
        (),
    )
        .into_response()
}

// An empty body is read as `{}` so a missing key is reported by name.
pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    Ok(serde_json::from_str(body)?)
}
