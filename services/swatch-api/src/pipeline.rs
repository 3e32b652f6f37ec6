//! Request pipeline: validate → parse → build → encode.
//!
//! Every image route funnels into [`ImageRequest::encode`]; routes differ
//! only in the [`Fill`] and [`ColorSource`] they construct.

use renderer::{build_gradient, build_solid, encode_png, GradientSpec, PixelBuffer};
use swatch_common::{
    get_dimensions, lookup_ral, parse_hex, parse_rgb, parse_rgba, Color, Dimensions, SwatchResult,
};
use tracing::trace;

/// Raw, unvalidated color as taken from the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSource {
    Hex(String),
    Rgb {
        r: String,
        g: String,
        b: String,
    },
    Rgba {
        r: String,
        g: String,
        b: String,
        a: String,
    },
    Ral(String),
}

impl ColorSource {
    pub fn resolve(&self) -> SwatchResult<Color> {
        match self {
            ColorSource::Hex(hex) => parse_hex(hex),
            ColorSource::Rgb { r, g, b } => parse_rgb(r, g, b),
            ColorSource::Rgba { r, g, b, a } => parse_rgba(r, g, b, a),
            ColorSource::Ral(code) => {
                let entry = lookup_ral(code)?;
                trace!(code = entry.code, name = entry.name, "Resolved RAL color");
                Ok(entry.color())
            }
        }
    }

    /// Metric/log label.
    pub fn kind(&self) -> &'static str {
        match self {
            ColorSource::Hex(_) => "hex",
            ColorSource::Rgb { .. } => "rgb",
            ColorSource::Rgba { .. } => "rgba",
            ColorSource::Ral(_) => "ral",
        }
    }
}

/// What to paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fill {
    Solid(ColorSource),
    Gradient(ColorSource, ColorSource),
}

impl Fill {
    pub fn kind(&self) -> &'static str {
        match self {
            Fill::Solid(_) => "solid",
            Fill::Gradient(..) => "gradient",
        }
    }

    pub fn source_kind(&self) -> &'static str {
        match self {
            Fill::Solid(source) | Fill::Gradient(source, _) => source.kind(),
        }
    }
}

/// One image request with its raw size segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub width: String,
    pub height: String,
    pub fill: Fill,
}

/// Encoded PNG plus the size it was rendered at.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub bytes: Vec<u8>,
    pub dimensions: Dimensions,
}

impl RenderedImage {
    /// Download name, e.g. `128x64.png`.
    pub fn filename(&self) -> String {
        format!("{}x{}.png", self.dimensions.width, self.dimensions.height)
    }
}

impl ImageRequest {
    pub fn solid(width: impl Into<String>, height: impl Into<String>, color: ColorSource) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
            fill: Fill::Solid(color),
        }
    }

    pub fn gradient(
        width: impl Into<String>,
        height: impl Into<String>,
        start: ColorSource,
        end: ColorSource,
    ) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
            fill: Fill::Gradient(start, end),
        }
    }

    /// Validate and build the pixel buffer.
    ///
    /// Checks width, height, then colors in path order, stopping at the
    /// first error.
    pub fn render(&self) -> SwatchResult<(Dimensions, PixelBuffer)> {
        let dims = get_dimensions(&self.width, &self.height)?;

        let buffer = match &self.fill {
            Fill::Solid(source) => build_solid(dims.width, dims.height, source.resolve()?)?,
            Fill::Gradient(start, end) => {
                let spec = GradientSpec::new(start.resolve()?, end.resolve()?);
                build_gradient(dims.width, dims.height, &spec)?
            }
        };

        Ok((dims, buffer))
    }

    /// Full pipeline down to PNG bytes.
    pub fn encode(&self) -> SwatchResult<RenderedImage> {
        let (dimensions, buffer) = self.render()?;
        let bytes = encode_png(&buffer)?;
        Ok(RenderedImage { bytes, dimensions })
    }
}
