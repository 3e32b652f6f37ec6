//! Two-stop horizontal gradient rendering.

use swatch_common::{clamp, Color};

use crate::buffer::PixelBuffer;
use crate::error::RenderError;

/// Endpoints of a left-to-right linear gradient.
///
/// Position 0 sits at `x = 0` and position 1 at `x = width`, so the last
/// column stops one step short of `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientSpec {
    pub start: Color,
    pub end: Color,
}

impl GradientSpec {
    pub fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    /// Color at position `t` along the gradient.
    pub fn at(&self, t: f64) -> Color {
        interpolate(self.start, self.end, t)
    }
}

#[inline]
fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let value = a as f64 + (b as f64 - a as f64) * t;
    clamp(value.round(), 0.0, 255.0) as u8
}

/// Linear color interpolation on the stored channel values.
///
/// No gamma conversion is applied; `t` is clamped to `[0, 1]`.
pub fn interpolate(a: Color, b: Color, t: f64) -> Color {
    let t = clamp(t, 0.0, 1.0);

    Color::new(
        lerp_channel(a.r, b.r, t),
        lerp_channel(a.g, b.g, t),
        lerp_channel(a.b, b.b, t),
        lerp_channel(a.a, b.a, t),
    )
}

/// Build an image whose color varies along x and is constant along y.
pub fn build_gradient(
    width: u32,
    height: u32,
    spec: &GradientSpec,
) -> Result<PixelBuffer, RenderError> {
    let mut buffer = PixelBuffer::filled(width, height, spec.start)?;

    // Every row is identical, so compute one and copy it down
    let row: Vec<Color> = (0..width)
        .map(|x| spec.at(x as f64 / width as f64))
        .collect();

    for dst in buffer.rows_mut() {
        dst.copy_from_slice(&row);
    }

    Ok(buffer)
}
