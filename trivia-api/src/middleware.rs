use axum::{
    http::header::{CONTENT_LENGTH, CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

/// Rewrite framework-generated error responses (unmatched method, extractor
/// rejections outside our own types) into the JSON error envelope.
///
/// Headers of the original response (such as `Allow` on a 405) are kept,
/// apart from the ones describing the replaced body.
pub async fn json_error_envelope(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));

    if is_json {
        return response;
    }

    let (parts, _) = response.into_parts();
    let mut rewritten = ApiError::from_status(status).into_response();

    let headers = rewritten.headers_mut();
    for (name, value) in parts.headers.iter() {
        if name != CONTENT_TYPE && name != CONTENT_LENGTH {
            headers.insert(name.clone(), value.clone());
        }
    }

    rewritten
}
