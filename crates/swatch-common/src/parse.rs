//! Color parsing from hex strings and decimal channel strings.
//!
//! Hex input is strict: wrong length or a non-hex digit is rejected.
//! Decimal channels are lenient: anything that parses as an integer is
//! saturated into `0..=255`.

use crate::clamp::clamp;
use crate::color::Color;
use crate::error::{SwatchError, SwatchResult};

/// Value of a single hex digit.
#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse a hex color.
///
/// The allowed formats are:
/// * `RGB`       (alpha forced to 255)
/// * `RGBA`
/// * `RRGGBB`    (alpha forced to 255)
/// * `RRGGBBAA`
///
/// Shorthand digits are replicated into a full byte, so `f` becomes `ff`.
pub fn parse_hex(hex: &str) -> SwatchResult<Color> {
    let bytes = hex.as_bytes();

    let digit = |c: u8| -> SwatchResult<u8> {
        nibble(c).ok_or_else(|| {
            SwatchError::InvalidHex(format!("'{}' contains non-hex digit '{}'", hex, c as char))
        })
    };
    let short = |c: u8| -> SwatchResult<u8> { Ok(digit(c)? * 17) };
    let pair = |hi: u8, lo: u8| -> SwatchResult<u8> { Ok(digit(hi)? << 4 | digit(lo)?) };

    match bytes.len() {
        3 => Ok(Color::opaque(
            short(bytes[0])?,
            short(bytes[1])?,
            short(bytes[2])?,
        )),
        4 => Ok(Color::new(
            short(bytes[0])?,
            short(bytes[1])?,
            short(bytes[2])?,
            short(bytes[3])?,
        )),
        6 => Ok(Color::opaque(
            pair(bytes[0], bytes[1])?,
            pair(bytes[2], bytes[3])?,
            pair(bytes[4], bytes[5])?,
        )),
        8 => Ok(Color::new(
            pair(bytes[0], bytes[1])?,
            pair(bytes[2], bytes[3])?,
            pair(bytes[4], bytes[5])?,
            pair(bytes[6], bytes[7])?,
        )),
        len => Err(SwatchError::InvalidHex(format!(
            "length must be 3, 4, 6, or 8, got {}",
            len
        ))),
    }
}

/// Parse one decimal color channel.
///
/// Empty input means 0. Values outside `0..=255` saturate.
pub fn parse_channel(raw: &str) -> SwatchResult<u8> {
    if raw.is_empty() {
        return Ok(0);
    }

    let value: i64 = raw
        .parse()
        .map_err(|_| SwatchError::InvalidChannel(format!("'{}' is not an integer", raw)))?;

    Ok(clamp(value, u8::MIN as i64, u8::MAX as i64) as u8)
}

/// Parse an opaque color from three decimal channels (R, then G, then B).
pub fn parse_rgb(r: &str, g: &str, b: &str) -> SwatchResult<Color> {
    Ok(Color::opaque(
        parse_channel(r)?,
        parse_channel(g)?,
        parse_channel(b)?,
    ))
}

/// Parse a color from four decimal channels (R, G, B, then A).
pub fn parse_rgba(r: &str, g: &str, b: &str, a: &str) -> SwatchResult<Color> {
    Ok(Color::new(
        parse_channel(r)?,
        parse_channel(g)?,
        parse_channel(b)?,
        parse_channel(a)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibble() {
        assert_eq!(nibble(b'0'), Some(0));
        assert_eq!(nibble(b'a'), Some(10));
        assert_eq!(nibble(b'F'), Some(15));
        assert_eq!(nibble(b'g'), None);
    }

    #[test]
    fn test_parse_hex_uppercase() {
        assert_eq!(parse_hex("FFA500").unwrap(), Color::opaque(255, 165, 0));
    }

    #[test]
    fn test_parse_hex_rejects_multibyte() {
        // 'é' is two bytes, so the byte length is 6 but the digits are invalid
        assert!(matches!(parse_hex("ffé00"), Err(SwatchError::InvalidHex(_))));
    }

    #[test]
    fn test_parse_channel_overflow_is_error() {
        assert!(matches!(
            parse_channel("99999999999999999999"),
            Err(SwatchError::InvalidChannel(_))
        ));
    }
}
