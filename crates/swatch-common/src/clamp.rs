//! Saturating range clamp shared by channel and dimension parsing.

/// Constrain `value` into the inclusive range `[min, max]`.
///
/// Works for any partially ordered type, so the same helper covers the
/// `i64` intermediate of both channel and dimension parsing.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_range() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(0, 0, 10), 0);
        assert_eq!(clamp(10, 0, 10), 10);
    }

    #[test]
    fn test_clamp_saturates() {
        assert_eq!(clamp(-3i64, 0, 255), 0);
        assert_eq!(clamp(300i64, 0, 255), 255);
        assert_eq!(clamp(9999u32, 1, 512), 512);
    }

    #[test]
    fn test_clamp_floats() {
        assert_eq!(clamp(1.5f64, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.25f32, 0.0, 1.0), 0.0);
    }
}
