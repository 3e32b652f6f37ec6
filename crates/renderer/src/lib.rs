//! Image building and PNG encoding for swatch images.
//!
//! - Solid fills
//! - Two-stop horizontal gradients
//! - PNG encoding (indexed or RGBA)

pub mod buffer;
pub mod error;
pub mod gradient;
pub mod png;

pub use buffer::{build_solid, PixelBuffer};
pub use error::RenderError;
pub use gradient::{build_gradient, interpolate, GradientSpec};
pub use png::encode_png;
