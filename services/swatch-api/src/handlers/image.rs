//! Image route handlers.
//!
//! Each handler only maps its path segments onto an [`ImageRequest`]; the
//! shared [`respond`] runs the pipeline and builds the response.

use axum::{
    extract::{path::ErrorKind, rejection::PathRejection, Extension, Path},
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use swatch_common::SwatchError;
use tracing::{debug, instrument, warn};

use crate::handlers::common::{error_response, png_response};
use crate::metrics;
use crate::pipeline::{ColorSource, ImageRequest};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HexPath {
    pub w: String,
    pub h: String,
    pub hex: String,
}

#[derive(Debug, Deserialize)]
pub struct HexGradientPath {
    pub w: String,
    pub h: String,
    pub hex: String,
    pub hex2: String,
}

#[derive(Debug, Deserialize)]
pub struct RgbPath {
    pub w: String,
    pub h: String,
    pub r: String,
    pub g: String,
    pub b: String,
}

#[derive(Debug, Deserialize)]
pub struct RgbGradientPath {
    pub w: String,
    pub h: String,
    pub r: String,
    pub g: String,
    pub b: String,
    pub r2: String,
    pub g2: String,
    pub b2: String,
}

#[derive(Debug, Deserialize)]
pub struct RgbaPath {
    pub w: String,
    pub h: String,
    pub r: String,
    pub g: String,
    pub b: String,
    pub a: String,
}

#[derive(Debug, Deserialize)]
pub struct RgbaGradientPath {
    pub w: String,
    pub h: String,
    pub r: String,
    pub g: String,
    pub b: String,
    pub a: String,
    pub r2: String,
    pub g2: String,
    pub b2: String,
    pub a2: String,
}

#[derive(Debug, Deserialize)]
pub struct RalPath {
    pub w: String,
    pub h: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct RalGradientPath {
    pub w: String,
    pub h: String,
    pub code: String,
    pub code2: String,
}

type PathResult<T> = Result<Path<T>, PathRejection>;

/// Unwrap the path segments, turning an undecodable path into the same JSON
/// error the pipeline produces. Size segments map to `InvalidDimension`, all
/// others to the route's color error.
fn segments<T>(
    path: PathResult<T>,
    source: &'static str,
    color_error: fn(String) -> SwatchError,
) -> Result<T, Response> {
    let rejection = match path {
        Ok(Path(segments)) => return Ok(segments),
        Err(rejection) => rejection,
    };

    let message = rejection.body_text();
    let err = match &rejection {
        PathRejection::FailedToDeserializePathParams(inner) => match inner.kind() {
            ErrorKind::InvalidUtf8InPathParam { key } if key == "w" || key == "h" => {
                SwatchError::InvalidDimension(message)
            }
            _ => color_error(message),
        },
        _ => color_error(message),
    };

    metrics::record_error(&err);
    warn!(source, error = %err, "Rejected image path");
    Err(error_response(&err))
}

/// Run the pipeline for one request and turn the outcome into a response.
#[instrument(skip_all, fields(source = request.fill.source_kind(), fill = request.fill.kind()))]
fn respond(state: &AppState, request: ImageRequest) -> Response {
    let started = Instant::now();

    match request.encode() {
        Ok(image) => {
            let elapsed = started.elapsed();
            metrics::record_image(&request.fill, image.bytes.len(), elapsed);
            debug!(
                width = image.dimensions.width,
                height = image.dimensions.height,
                pixels = image.dimensions.pixel_count(),
                bytes = image.bytes.len(),
                elapsed_us = elapsed.as_micros() as u64,
                "Rendered image"
            );
            png_response(image, state.config.disposition)
        }
        Err(err) => {
            metrics::record_error(&err);
            warn!(error = %err, "Rejected image request");
            error_response(&err)
        }
    }
}

/// GET /:w/:h/hex/:hex
pub async fn hex_handler(
    Extension(state): Extension<Arc<AppState>>,
    path: PathResult<HexPath>,
) -> Result<Response, Response> {
    let p = segments(path, "hex", SwatchError::InvalidHex)?;
    Ok(respond(&state, ImageRequest::solid(p.w, p.h, ColorSource::Hex(p.hex))))
}

/// GET /:w/:h/hex/:hex/:hex2
pub async fn hex_gradient_handler(
    Extension(state): Extension<Arc<AppState>>,
    path: PathResult<HexGradientPath>,
) -> Result<Response, Response> {
    let p = segments(path, "hex", SwatchError::InvalidHex)?;
    Ok(respond(
        &state,
        ImageRequest::gradient(p.w, p.h, ColorSource::Hex(p.hex), ColorSource::Hex(p.hex2)),
    ))
}

/// GET /:w/:h/rgb/:r/:g/:b
pub async fn rgb_handler(
    Extension(state): Extension<Arc<AppState>>,
    path: PathResult<RgbPath>,
) -> Result<Response, Response> {
    let p = segments(path, "rgb", SwatchError::InvalidChannel)?;
    let color = ColorSource::Rgb {
        r: p.r,
        g: p.g,
        b: p.b,
    };
    Ok(respond(&state, ImageRequest::solid(p.w, p.h, color)))
}

/// GET /:w/:h/rgb/:r/:g/:b/:r2/:g2/:b2
pub async fn rgb_gradient_handler(
    Extension(state): Extension<Arc<AppState>>,
    path: PathResult<RgbGradientPath>,
) -> Result<Response, Response> {
    let p = segments(path, "rgb", SwatchError::InvalidChannel)?;
    let start = ColorSource::Rgb {
        r: p.r,
        g: p.g,
        b: p.b,
    };
    let end = ColorSource::Rgb {
        r: p.r2,
        g: p.g2,
        b: p.b2,
    };
    Ok(respond(&state, ImageRequest::gradient(p.w, p.h, start, end)))
}

/// GET /:w/:h/rgba/:r/:g/:b/:a
pub async fn rgba_handler(
    Extension(state): Extension<Arc<AppState>>,
    path: PathResult<RgbaPath>,
) -> Result<Response, Response> {
    let p = segments(path, "rgba", SwatchError::InvalidChannel)?;
    let color = ColorSource::Rgba {
        r: p.r,
        g: p.g,
        b: p.b,
        a: p.a,
    };
    Ok(respond(&state, ImageRequest::solid(p.w, p.h, color)))
}

/// GET /:w/:h/rgba/:r/:g/:b/:a/:r2/:g2/:b2/:a2
pub async fn rgba_gradient_handler(
    Extension(state): Extension<Arc<AppState>>,
    path: PathResult<RgbaGradientPath>,
) -> Result<Response, Response> {
    let p = segments(path, "rgba", SwatchError::InvalidChannel)?;
    let start = ColorSource::Rgba {
        r: p.r,
        g: p.g,
        b: p.b,
        a: p.a,
    };
    let end = ColorSource::Rgba {
        r: p.r2,
        g: p.g2,
        b: p.b2,
        a: p.a2,
    };
    Ok(respond(&state, ImageRequest::gradient(p.w, p.h, start, end)))
}

/// GET /:w/:h/ral/:code
pub async fn ral_handler(
    Extension(state): Extension<Arc<AppState>>,
    path: PathResult<RalPath>,
) -> Result<Response, Response> {
    let p = segments(path, "ral", SwatchError::ColorNotFound)?;
    Ok(respond(&state, ImageRequest::solid(p.w, p.h, ColorSource::Ral(p.code))))
}

/// GET /:w/:h/ral/:code/:code2
pub async fn ral_gradient_handler(
    Extension(state): Extension<Arc<AppState>>,
    path: PathResult<RalGradientPath>,
) -> Result<Response, Response> {
    let p = segments(path, "ral", SwatchError::ColorNotFound)?;
    Ok(respond(
        &state,
        ImageRequest::gradient(p.w, p.h, ColorSource::Ral(p.code), ColorSource::Ral(p.code2)),
    ))
}
