//! Application metrics.
//!
//! Thin wrappers around the `metrics` macros so metric names live in one
//! place. Without an installed recorder every call is a no-op.

use metrics::{counter, histogram};
use std::time::Duration;

use swatch_common::SwatchError;

use crate::pipeline::Fill;

/// Record a successfully rendered image.
pub fn record_image(fill: &Fill, bytes: usize, elapsed: Duration) {
    counter!(
        "swatch_images_total",
        "source" => fill.source_kind(),
        "fill" => fill.kind()
    )
    .increment(1);
    histogram!("swatch_render_duration_ms").record(elapsed.as_secs_f64() * 1000.0);
    histogram!("swatch_image_bytes").record(bytes as f64);
}

/// Record a rejected or failed request.
pub fn record_error(err: &SwatchError) {
    counter!("swatch_errors_total", "code" => err.error_code()).increment(1);
}
