//! PNG encoding for pixel buffers.
//!
//! Supports two encoding modes:
//! - **Indexed PNG (color type 3)**: Used when the image has ≤256 unique colors.
//!   Every solid fill lands here, as do gradients narrower than 257 columns.
//! - **RGBA PNG (color type 6)**: Fallback for images with >256 colors.
//!
//! Use `encode_png` for automatic mode selection.

use rayon::prelude::*;
use std::collections::HashMap;
use std::io::Write;

use swatch_common::Color;

use crate::buffer::PixelBuffer;
use crate::error::RenderError;

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Maximum colors for indexed PNG (PNG8)
const MAX_PALETTE_SIZE: usize = 256;

/// Minimum pixels to benefit from parallel palette extraction
const PARALLEL_THRESHOLD: usize = 4096; // 64x64 or larger

/// Palette plus one index per pixel.
type Indexed = (Vec<Color>, Vec<u8>);

/// Encode a buffer as PNG, choosing the smallest suitable color type.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, RenderError> {
    let pixels = buffer.pixels();

    let palette_result = if pixels.len() >= PARALLEL_THRESHOLD {
        extract_palette_parallel(pixels)
    } else {
        extract_palette_sequential(pixels)
    };

    match palette_result {
        Some((palette, indices)) => {
            tracing::trace!(colors = palette.len(), "encoding indexed PNG");
            create_png_indexed(buffer.width(), buffer.height(), &palette, &indices)
        }
        None => {
            tracing::trace!("too many colors for a palette, encoding RGBA PNG");
            create_png_rgba(&buffer.to_rgba_bytes(), buffer.width(), buffer.height())
        }
    }
}

/// Pack RGBA into a u32 for faster hashing and comparison
#[inline(always)]
fn pack_color(c: Color) -> u32 {
    u32::from_le_bytes(c.to_array())
}

/// Sequential palette extraction for small images.
fn extract_palette_sequential(pixels: &[Color]) -> Option<Indexed> {
    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<Color> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices: Vec<u8> = Vec::with_capacity(pixels.len());

    for &pixel in pixels {
        let packed = pack_color(pixel);

        let index = match color_to_index.get(&packed) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push(pixel);
                color_to_index.insert(packed, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Parallel palette extraction for larger images.
///
/// 1. Collect unique colors per chunk, bailing out of a chunk once it alone
///    exceeds the palette size
/// 2. Merge, sort and check the global count
/// 3. Map every pixel to its palette index in parallel
///
/// The palette is ordered by packed color value, so identical buffers always
/// encode to identical bytes.
fn extract_palette_parallel(pixels: &[Color]) -> Option<Indexed> {
    let chunk_size = (pixels.len() / rayon::current_num_threads()).max(256);

    let mut unique_colors: Vec<u32> = pixels
        .par_chunks(chunk_size)
        .flat_map_iter(|chunk| {
            let mut local: HashMap<u32, ()> = HashMap::with_capacity(MAX_PALETTE_SIZE);
            for &pixel in chunk {
                local.insert(pack_color(pixel), ());
                if local.len() > MAX_PALETTE_SIZE {
                    break;
                }
            }
            local.into_keys()
        })
        .collect();

    unique_colors.sort_unstable();
    unique_colors.dedup();
    if unique_colors.len() > MAX_PALETTE_SIZE {
        return None;
    }

    let color_to_index: HashMap<u32, u8> = unique_colors
        .iter()
        .enumerate()
        .map(|(idx, &packed)| (packed, idx as u8))
        .collect();
    let palette: Vec<Color> = unique_colors
        .iter()
        .map(|&packed| Color::from(packed.to_le_bytes()))
        .collect();

    let indices: Vec<u8> = pixels
        .par_iter()
        .map(|&pixel| color_to_index.get(&pack_color(pixel)).copied().unwrap_or(0))
        .collect();

    Some((palette, indices))
}

fn check_len(width: u32, height: u32, actual: usize, per_pixel: usize) -> Result<(), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidSize { width, height });
    }
    if actual != width as usize * height as usize * per_pixel {
        return Err(RenderError::BufferMismatch {
            width,
            height,
            actual,
        });
    }
    Ok(())
}

fn ihdr(width: u32, height: u32, color_type: u8) -> [u8; 13] {
    let mut data = [0u8; 13];
    data[0..4].copy_from_slice(&width.to_be_bytes());
    data[4..8].copy_from_slice(&height.to_be_bytes());
    data[8] = 8; // bit depth
    data[9] = color_type;
    // compression, filter and interlace methods all stay 0
    data
}

/// Create an indexed PNG (color type 3) from palette and indices.
pub fn create_png_indexed(
    width: u32,
    height: u32,
    palette: &[Color],
    indices: &[u8],
) -> Result<Vec<u8>, RenderError> {
    check_len(width, height, indices.len(), 1)?;

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 3));

    let plte_data: Vec<u8> = palette.iter().flat_map(|c| [c.r, c.g, c.b]).collect();
    write_chunk(&mut png, b"PLTE", &plte_data);

    // tRNS carries one alpha per palette entry, only needed if any is translucent
    if palette.iter().any(|c| c.a < 255) {
        let trns_data: Vec<u8> = palette.iter().map(|c| c.a).collect();
        write_chunk(&mut png, b"tRNS", &trns_data);
    }

    let idat_data = deflate_scanlines(indices, width as usize)?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Create a PNG image from RGBA bytes (color type 6).
pub fn create_png_rgba(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
    check_len(width, height, pixels.len(), 4)?;

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 6));

    let idat_data = deflate_scanlines(pixels, width as usize * 4)?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Write a PNG chunk: length, type, data, CRC over type + data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Prefix each scanline with filter byte 0 and zlib-compress.
fn deflate_scanlines(data: &[u8], row_bytes: usize) -> Result<Vec<u8>, RenderError> {
    let rows = data.len() / row_bytes;
    let mut uncompressed = Vec::with_capacity(rows * (1 + row_bytes));
    for row in data.chunks_exact(row_bytes) {
        uncompressed.push(0); // filter type: none
        uncompressed.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&uncompressed)?;
    Ok(encoder.finish()?)
}
