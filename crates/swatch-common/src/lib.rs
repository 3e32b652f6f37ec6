//! Common types and parsing shared by the swatch crates.
//!
//! Everything here is a pure function of its input: dimension and color
//! parsing, the RAL table, and the shared error type.

pub mod clamp;
pub mod color;
pub mod dimension;
pub mod error;
pub mod parse;
pub mod ral;

pub use clamp::clamp;
pub use color::Color;
pub use dimension::{get_dimensions, parse_dimension, Dimensions, MAX_DIMENSION, MIN_DIMENSION};
pub use error::{SwatchError, SwatchResult};
pub use parse::{parse_channel, parse_hex, parse_rgb, parse_rgba};
pub use ral::{find_ral, lookup_ral, RalColor};
