//! Tests for solid and gradient image building.

use renderer::{build_gradient, build_solid, interpolate, GradientSpec, RenderError};
use swatch_common::Color;

const BLACK: Color = Color::opaque(0, 0, 0);
const WHITE: Color = Color::opaque(255, 255, 255);

// ============================================================================
// build_solid tests
// ============================================================================

#[test]
fn test_build_solid_2x2() {
    let red = Color::new(255, 0, 0, 255);
    let buf = build_solid(2, 2, red).unwrap();

    assert_eq!(buf.width(), 2);
    assert_eq!(buf.height(), 2);
    assert_eq!(buf.pixels().len(), 4);
    assert!(buf.pixels().iter().all(|&p| p == red));
}

#[test]
fn test_build_solid_keeps_alpha() {
    let translucent = Color::new(10, 20, 30, 40);
    let buf = build_solid(5, 3, translucent).unwrap();
    assert_eq!(buf.get(4, 2), Some(translucent));
}

#[test]
fn test_build_solid_rejects_zero_size() {
    assert!(matches!(
        build_solid(0, 4, BLACK),
        Err(RenderError::InvalidSize { width: 0, height: 4 })
    ));
    assert!(matches!(
        build_solid(4, 0, BLACK),
        Err(RenderError::InvalidSize { .. })
    ));
}

// ============================================================================
// build_gradient tests
// ============================================================================

#[test]
fn test_gradient_black_to_white_4x1() {
    let buf = build_gradient(4, 1, &GradientSpec::new(BLACK, WHITE)).unwrap();
    let columns: Vec<Color> = (0..4).map(|x| buf.get(x, 0).unwrap()).collect();

    assert_eq!(columns[0], BLACK);
    assert_ne!(columns[3], WHITE);
    assert_eq!(columns[3], Color::opaque(191, 191, 191));

    for pair in columns.windows(2) {
        assert!(pair[1].r > pair[0].r, "{:?} should increase", pair);
        assert!(pair[1].g > pair[0].g);
        assert!(pair[1].b > pair[0].b);
    }
}

#[test]
fn test_gradient_exact_column_values() {
    let buf = build_gradient(4, 1, &GradientSpec::new(BLACK, WHITE)).unwrap();
    let reds: Vec<u8> = buf.pixels().iter().map(|c| c.r).collect();
    // t = 0, 0.25, 0.5, 0.75 of 255, rounded
    assert_eq!(reds, vec![0, 64, 128, 191]);
}

#[test]
fn test_gradient_constant_down_columns() {
    let spec = GradientSpec::new(Color::opaque(255, 0, 0), Color::opaque(0, 0, 255));
    let buf = build_gradient(16, 9, &spec).unwrap();

    for x in 0..16 {
        let top = buf.get(x, 0).unwrap();
        for y in 1..9 {
            assert_eq!(buf.get(x, y).unwrap(), top, "column {} row {}", x, y);
        }
    }
}

#[test]
fn test_gradient_interpolates_alpha() {
    let spec = GradientSpec::new(Color::new(0, 0, 0, 0), Color::new(0, 0, 0, 200));
    let buf = build_gradient(2, 1, &spec).unwrap();
    assert_eq!(buf.get(0, 0).unwrap().a, 0);
    assert_eq!(buf.get(1, 0).unwrap().a, 100);
}

#[test]
fn test_gradient_descending_channels() {
    let buf = build_gradient(8, 2, &GradientSpec::new(WHITE, BLACK)).unwrap();
    let reds: Vec<u8> = (0..8).map(|x| buf.get(x, 1).unwrap().r).collect();
    assert_eq!(reds[0], 255);
    assert!(reds.windows(2).all(|w| w[1] < w[0]));
    assert!(reds[7] > 0);
}

#[test]
fn test_gradient_single_column_is_start() {
    let start = Color::opaque(12, 34, 56);
    let buf = build_gradient(1, 3, &GradientSpec::new(start, WHITE)).unwrap();
    assert!(buf.pixels().iter().all(|&p| p == start));
}

#[test]
fn test_gradient_same_endpoints_is_solid() {
    let c = Color::new(40, 50, 60, 70);
    let gradient = build_gradient(32, 4, &GradientSpec::new(c, c)).unwrap();
    let solid = build_solid(32, 4, c).unwrap();
    assert_eq!(gradient, solid);
}

#[test]
fn test_gradient_is_deterministic() {
    let spec = GradientSpec::new(Color::opaque(3, 99, 201), Color::new(250, 7, 13, 90));
    let a = build_gradient(300, 5, &spec).unwrap();
    let b = build_gradient(300, 5, &spec).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_gradient_rejects_zero_size() {
    let spec = GradientSpec::new(BLACK, WHITE);
    assert!(build_gradient(0, 1, &spec).is_err());
    assert!(build_gradient(1, 0, &spec).is_err());
}

// ============================================================================
// interpolate tests
// ============================================================================

#[test]
fn test_interpolate_endpoints() {
    let a = Color::new(10, 20, 30, 40);
    let b = Color::new(110, 120, 130, 140);
    assert_eq!(interpolate(a, b, 0.0), a);
    assert_eq!(interpolate(a, b, 1.0), b);
    assert_eq!(interpolate(a, b, 0.5), Color::new(60, 70, 80, 90));
}
