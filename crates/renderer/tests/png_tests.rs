//! Tests for PNG encoding of pixel buffers.
//!
//! Every encoded image is decoded again with the `image` crate to prove the
//! output is a valid PNG carrying the exact pixels.

use renderer::png::{create_png_rgba, PNG_SIGNATURE};
use renderer::{build_gradient, build_solid, encode_png, GradientSpec, PixelBuffer};
use swatch_common::Color;

// ============================================================================
// Helper functions
// ============================================================================

/// Decode PNG bytes and compare against the source buffer pixel by pixel.
fn assert_round_trip(buffer: &PixelBuffer, png: &[u8]) {
    let decoded = image::load_from_memory_with_format(png, image::ImageFormat::Png)
        .expect("PNG should decode")
        .to_rgba8();

    assert_eq!(decoded.width(), buffer.width());
    assert_eq!(decoded.height(), buffer.height());

    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let expected = buffer.get(x, y).unwrap().to_array();
            assert_eq!(decoded.get_pixel(x, y).0, expected, "pixel ({}, {})", x, y);
        }
    }
}

/// IHDR color type byte.
fn color_type(png: &[u8]) -> u8 {
    png[25]
}

// ============================================================================
// Solid images
// ============================================================================

#[test]
fn test_solid_encodes_indexed() {
    let buffer = build_solid(8, 8, Color::opaque(255, 0, 0)).unwrap();
    let png = encode_png(&buffer).unwrap();

    assert_eq!(&png[0..8], &PNG_SIGNATURE);
    assert_eq!(color_type(&png), 3);
    assert_round_trip(&buffer, &png);
}

#[test]
fn test_translucent_solid_round_trips() {
    let buffer = build_solid(3, 5, Color::new(10, 200, 30, 77)).unwrap();
    let png = encode_png(&buffer).unwrap();
    assert_round_trip(&buffer, &png);
}

#[test]
fn test_largest_solid_uses_parallel_path() {
    let buffer = build_solid(512, 512, Color::opaque(0, 128, 255)).unwrap();
    let png = encode_png(&buffer).unwrap();

    assert_eq!(color_type(&png), 3);
    // A single-color image compresses to almost nothing
    assert!(png.len() < 4096, "solid PNG is {} bytes", png.len());
    assert_round_trip(&buffer, &png);
}

// ============================================================================
// Gradient images
// ============================================================================

#[test]
fn test_narrow_gradient_encodes_indexed() {
    let spec = GradientSpec::new(Color::opaque(0, 0, 0), Color::opaque(255, 255, 255));
    let buffer = build_gradient(64, 4, &spec).unwrap();
    let png = encode_png(&buffer).unwrap();

    assert_eq!(color_type(&png), 3);
    assert_round_trip(&buffer, &png);
}

#[test]
fn test_wide_gradient_falls_back_to_rgba() {
    // Two independent channel ramps give more than 256 distinct columns
    let spec = GradientSpec::new(Color::new(0, 255, 0, 255), Color::new(255, 0, 200, 30));
    let buffer = build_gradient(512, 3, &spec).unwrap();
    let png = encode_png(&buffer).unwrap();

    assert_eq!(color_type(&png), 6);
    assert_round_trip(&buffer, &png);
}

#[test]
fn test_large_gradient_round_trips() {
    let spec = GradientSpec::new(Color::opaque(20, 40, 60), Color::opaque(220, 180, 140));
    let buffer = build_gradient(300, 200, &spec).unwrap();
    let png = encode_png(&buffer).unwrap();
    assert_round_trip(&buffer, &png);
}

// ============================================================================
// Raw encoder
// ============================================================================

#[test]
fn test_create_png_rgba_direct() {
    let pixels = [
        255, 0, 0, 255, // red
        0, 255, 0, 255, // green
        0, 0, 255, 255, // blue
        255, 255, 0, 0, // transparent yellow
    ];
    let png = create_png_rgba(&pixels, 2, 2).unwrap();

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.into_raw(), pixels.to_vec());
}

#[test]
fn test_encoding_is_deterministic() {
    let buffer = build_solid(16, 16, Color::opaque(1, 2, 3)).unwrap();
    assert_eq!(encode_png(&buffer).unwrap(), encode_png(&buffer).unwrap());
}

#[test]
fn test_large_gradient_encoding_is_deterministic() {
    // 128x64 is above the parallel threshold and still fits a palette
    let spec = GradientSpec::new(Color::opaque(0, 0, 0), Color::opaque(255, 255, 255));
    let buffer = build_gradient(128, 64, &spec).unwrap();

    let first = encode_png(&buffer).unwrap();
    assert_eq!(color_type(&first), 3);
    for _ in 0..20 {
        assert_eq!(encode_png(&buffer).unwrap(), first);
    }

    let rebuilt = build_gradient(128, 64, &spec).unwrap();
    assert_eq!(encode_png(&rebuilt).unwrap(), first);
    assert_round_trip(&buffer, &first);
}
