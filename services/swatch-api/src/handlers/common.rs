//! Response builders shared by the handlers.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use swatch_common::SwatchError;

use crate::config::Disposition;
use crate::pipeline::RenderedImage;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// Map a pipeline error to its status code and JSON body.
pub fn error_response(err: &SwatchError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let body = ErrorBody {
        error: err.error_code(),
        message: err.to_string(),
    };

    (status, Json(body)).into_response()
}

/// PNG response with content type, disposition and length set.
pub fn png_response(image: RenderedImage, disposition: Disposition) -> Response {
    let headers = [
        (header::CONTENT_TYPE, "image/png".to_string()),
        (
            header::CONTENT_DISPOSITION,
            disposition.header_value(&image.filename()),
        ),
        (header::CONTENT_LENGTH, image.bytes.len().to_string()),
    ];

    (StatusCode::OK, headers, image.bytes).into_response()
}

/// Fallback for paths that match no route.
pub async fn not_found_handler() -> Response {
    let body = ErrorBody {
        error: "NotFound",
        message: "No route matches this path".to_string(),
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
