//! Rendering errors.

use swatch_common::SwatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid image size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Pixel data length {actual} does not match {width}x{height}")]
    BufferMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },

    #[error("IDAT compression failed: {0}")]
    Compression(#[from] std::io::Error),
}

impl From<RenderError> for SwatchError {
    fn from(err: RenderError) -> Self {
        SwatchError::RenderError(err.to_string())
    }
}
