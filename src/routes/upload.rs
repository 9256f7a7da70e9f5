use axum::{
    extract::rejection::StringRejection,
    http::Method,
    response::{IntoResponse, Json, Response},
};
use crate::error::ApiError;
use crate::image;
use crate::models::{UploadRequest, UploadResponse};
use super::{parse_body, preflight};

const ALLOWED_METHODS: &str = "POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

// POST /upload - Echo a base64 image back as a data URL
pub async fn upload_image(
    method: Method,
    body: Result<String, StringRejection>,
) -> Result<Response, ApiError> {
    if method == Method::OPTIONS {
        return Ok(preflight(ALLOWED_METHODS, ALLOWED_HEADERS));
    }
    if method != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let request: UploadRequest = parse_body(&body?)?;
    let payload = request.image.unwrap_or_default();
    if payload.is_empty() {
        return Err(ApiError::BadRequest("No image data provided".to_string()));
    }

    let bytes = image::decode_payload(&payload)?;
    let url = image::to_data_url(&bytes);
    tracing::info!(bytes = bytes.len(), "Image converted to data URL");

    Ok(Json(UploadResponse { url }).into_response())
}
