//! Error types for swatch services.

use thiserror::Error;

/// Result type alias using SwatchError.
pub type SwatchResult<T> = Result<T, SwatchError>;

/// Primary error type for image requests.
///
/// Every variant is scoped to a single request; none of them is fatal to
/// the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwatchError {
    // === Input Errors ===
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    #[error("Invalid color channel: {0}")]
    InvalidChannel(String),

    #[error("Color not found: {0}")]
    ColorNotFound(String),

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    RenderError(String),
}

impl SwatchError {
    /// Stable machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            SwatchError::InvalidDimension(_) => "InvalidDimension",
            SwatchError::InvalidHex(_) => "InvalidHex",
            SwatchError::InvalidChannel(_) => "InvalidChannel",
            SwatchError::ColorNotFound(_) => "ColorNotFound",
            SwatchError::RenderError(_) => "RenderError",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            SwatchError::InvalidDimension(_)
            | SwatchError::InvalidHex(_)
            | SwatchError::InvalidChannel(_) => 400,

            SwatchError::ColorNotFound(_) => 404,

            SwatchError::RenderError(_) => 500,
        }
    }
}
