//! Owned pixel grid and solid fills.

use swatch_common::Color;

use crate::error::RenderError;

/// A `width × height` grid of colors, row-major, origin at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Allocate a buffer filled with `fill`.
    pub fn filled(width: u32, height: u32, fill: Color) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Mutable rows, top to bottom.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, Color> {
        self.pixels.chunks_exact_mut(self.width as usize)
    }

    /// Flatten into RGBA bytes (4 bytes per pixel).
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }
}

/// Build an image where every pixel is `color`.
pub fn build_solid(width: u32, height: u32, color: Color) -> Result<PixelBuffer, RenderError> {
    PixelBuffer::filled(width, height, color)
}
