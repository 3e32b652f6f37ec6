//! Width/height parsing.
//!
//! Out-of-range sizes are capped rather than rejected; only unparseable or
//! non-positive values fail.

use serde::{Deserialize, Serialize};

use crate::clamp::clamp;
use crate::error::{SwatchError, SwatchResult};

/// Smallest accepted edge length in pixels.
pub const MIN_DIMENSION: u32 = 1;

/// Largest edge length; bigger requests are capped to this.
pub const MAX_DIMENSION: u32 = 512;

/// Validated image size, both edges within `[MIN_DIMENSION, MAX_DIMENSION]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Parse a single base-10 edge length and cap it to `MAX_DIMENSION`.
pub fn parse_dimension(raw: &str) -> SwatchResult<u32> {
    let value: i64 = raw
        .parse()
        .map_err(|_| SwatchError::InvalidDimension(format!("'{}' is not an integer", raw)))?;

    if value <= 0 {
        return Err(SwatchError::InvalidDimension(format!(
            "'{}' must be greater than zero",
            raw
        )));
    }

    let capped = clamp(value, MIN_DIMENSION as i64, MAX_DIMENSION as i64);
    Ok(capped as u32)
}

/// Parse width then height, stopping at the first failure.
pub fn get_dimensions(raw_width: &str, raw_height: &str) -> SwatchResult<Dimensions> {
    let width = parse_dimension(raw_width)?;
    let height = parse_dimension(raw_height)?;
    Ok(Dimensions { width, height })
}
