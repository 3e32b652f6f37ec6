//! RAL Classic color lookup.
//!
//! sRGB approximations of the RAL Classic register. RAL colors are defined
//! as physical samples, so every entry here is opaque.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::color::Color;
use crate::error::{SwatchError, SwatchResult};

/// A single RAL Classic entry.
#[derive(Debug, Clone, Copy)]
pub struct RalColor {
    pub code: u16,
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

impl RalColor {
    pub const fn color(&self) -> Color {
        Color::opaque(self.rgb.0, self.rgb.1, self.rgb.2)
    }
}

const fn ral(code: u16, name: &'static str, r: u8, g: u8, b: u8) -> RalColor {
    RalColor { code, name, rgb: (r, g, b) }
}

/// RAL Classic register.
pub static RAL_CLASSIC: &[RalColor] = &[
    // Yellow and beige
    ral(1000, "Green beige", 0xCD, 0xBA, 0x88),
    ral(1001, "Beige", 0xD0, 0xB0, 0x84),
    ral(1002, "Sand yellow", 0xD2, 0xAA, 0x6D),
    ral(1003, "Signal yellow", 0xF9, 0xA8, 0x00),
    ral(1004, "Golden yellow", 0xE4, 0x9E, 0x00),
    ral(1005, "Honey yellow", 0xCB, 0x8E, 0x00),
    ral(1006, "Maize yellow", 0xE2, 0x90, 0x00),
    ral(1007, "Daffodil yellow", 0xE8, 0x8C, 0x00),
    ral(1011, "Brown beige", 0xAF, 0x80, 0x4F),
    ral(1012, "Lemon yellow", 0xDD, 0xAF, 0x27),
    ral(1013, "Oyster white", 0xE3, 0xD9, 0xC6),
    ral(1014, "Ivory", 0xDD, 0xC4, 0x9A),
    ral(1015, "Light ivory", 0xE6, 0xD2, 0xB5),
    ral(1016, "Sulfur yellow", 0xF1, 0xDD, 0x38),
    ral(1017, "Saffron yellow", 0xF6, 0xA9, 0x50),
    ral(1018, "Zinc yellow", 0xFA, 0xCA, 0x30),
    ral(1019, "Grey beige", 0xA4, 0x8F, 0x7A),
    ral(1020, "Olive yellow", 0xA0, 0x8F, 0x65),
    ral(1021, "Rape yellow", 0xF6, 0xB6, 0x00),
    ral(1023, "Traffic yellow", 0xF7, 0xB5, 0x00),
    ral(1024, "Ochre yellow", 0xBA, 0x8F, 0x4C),
    ral(1027, "Curry", 0xA7, 0x7F, 0x0E),
    ral(1028, "Melon yellow", 0xFF, 0x9B, 0x00),
    ral(1032, "Broom yellow", 0xE2, 0xA3, 0x00),
    ral(1033, "Dahlia yellow", 0xF9, 0x9A, 0x1C),
    ral(1034, "Pastel yellow", 0xEB, 0x9C, 0x52),
    // Orange
    ral(2000, "Yellow orange", 0xDA, 0x6E, 0x00),
    ral(2001, "Red orange", 0xBA, 0x48, 0x1B),
    ral(2002, "Vermilion", 0xBF, 0x39, 0x22),
    ral(2003, "Pastel orange", 0xF6, 0x78, 0x28),
    ral(2004, "Pure orange", 0xE2, 0x53, 0x03),
    ral(2008, "Bright red orange", 0xED, 0x6B, 0x21),
    ral(2009, "Traffic orange", 0xDE, 0x53, 0x07),
    ral(2010, "Signal orange", 0xD0, 0x5D, 0x28),
    ral(2011, "Deep orange", 0xE2, 0x6E, 0x0E),
    ral(2012, "Salmon orange", 0xD5, 0x65, 0x4D),
    // Red
    ral(3000, "Flame red", 0xA7, 0x29, 0x20),
    ral(3001, "Signal red", 0x9B, 0x24, 0x23),
    ral(3002, "Carmine red", 0x9B, 0x23, 0x21),
    ral(3003, "Ruby red", 0x86, 0x1A, 0x22),
    ral(3004, "Purple red", 0x6B, 0x1C, 0x23),
    ral(3005, "Wine red", 0x59, 0x19, 0x1F),
    ral(3007, "Black red", 0x3E, 0x20, 0x22),
    ral(3009, "Oxide red", 0x6D, 0x34, 0x2D),
    ral(3011, "Brown red", 0x79, 0x23, 0x23),
    ral(3012, "Beige red", 0xC6, 0x84, 0x6D),
    ral(3013, "Tomato red", 0x97, 0x2E, 0x25),
    ral(3014, "Antique pink", 0xCB, 0x73, 0x75),
    ral(3015, "Light pink", 0xD8, 0xA0, 0xA6),
    ral(3016, "Coral red", 0xA6, 0x3D, 0x2F),
    ral(3017, "Rose", 0xCB, 0x55, 0x5D),
    ral(3018, "Strawberry red", 0xC7, 0x3F, 0x4A),
    ral(3020, "Traffic red", 0xBB, 0x1E, 0x10),
    ral(3022, "Salmon pink", 0xCF, 0x69, 0x55),
    ral(3027, "Raspberry red", 0xAB, 0x27, 0x3C),
    ral(3031, "Orient red", 0xA7, 0x32, 0x3E),
    // Violet
    ral(4001, "Red lilac", 0x81, 0x61, 0x83),
    ral(4002, "Red violet", 0x8D, 0x3C, 0x4B),
    ral(4003, "Heather violet", 0xC4, 0x61, 0x8C),
    ral(4004, "Claret violet", 0x65, 0x1E, 0x38),
    ral(4005, "Blue lilac", 0x76, 0x68, 0x9A),
    ral(4006, "Traffic purple", 0x90, 0x33, 0x73),
    ral(4007, "Purple violet", 0x47, 0x24, 0x3C),
    ral(4008, "Signal violet", 0x84, 0x4C, 0x82),
    ral(4009, "Pastel violet", 0x9D, 0x86, 0x92),
    // Blue
    ral(5000, "Violet blue", 0x2F, 0x45, 0x38),
    ral(5001, "Green blue", 0x0E, 0x4C, 0x64),
    ral(5002, "Ultramarine blue", 0x00, 0x38, 0x7B),
    ral(5003, "Sapphire blue", 0x1F, 0x38, 0x55),
    ral(5004, "Black blue", 0x19, 0x1E, 0x28),
    ral(5005, "Signal blue", 0x00, 0x53, 0x87),
    ral(5007, "Brillant blue", 0x37, 0x6B, 0x8C),
    ral(5008, "Grey blue", 0x2B, 0x3A, 0x44),
    ral(5009, "Azure blue", 0x21, 0x5F, 0x78),
    ral(5010, "Gentian blue", 0x00, 0x4F, 0x7C),
    ral(5011, "Steel blue", 0x1A, 0x2B, 0x3C),
    ral(5012, "Light blue", 0x00, 0x89, 0xB6),
    ral(5013, "Cobalt blue", 0x19, 0x31, 0x53),
    ral(5014, "Pigeon blue", 0x63, 0x7D, 0x96),
    ral(5015, "Sky blue", 0x00, 0x7C, 0xB0),
    ral(5017, "Traffic blue", 0x00, 0x5B, 0x8C),
    ral(5018, "Turquoise blue", 0x04, 0x8B, 0x8C),
    ral(5019, "Capri blue", 0x00, 0x5E, 0x83),
    ral(5020, "Ocean blue", 0x00, 0x41, 0x4B),
    ral(5021, "Water blue", 0x00, 0x75, 0x77),
    ral(5022, "Night blue", 0x22, 0x2D, 0x5A),
    ral(5023, "Distant blue", 0x42, 0x69, 0x8C),
    ral(5024, "Pastel blue", 0x60, 0x93, 0xAC),
    // Green
    ral(6000, "Patina green", 0x3C, 0x74, 0x60),
    ral(6001, "Emerald green", 0x36, 0x67, 0x35),
    ral(6002, "Leaf green", 0x32, 0x59, 0x28),
    ral(6003, "Olive green", 0x50, 0x53, 0x3C),
    ral(6004, "Blue green", 0x02, 0x44, 0x42),
    ral(6005, "Moss green", 0x0F, 0x43, 0x36),
    ral(6009, "Fir green", 0x27, 0x35, 0x2A),
    ral(6010, "Grass green", 0x4D, 0x6F, 0x39),
    ral(6011, "Reseda green", 0x6B, 0x7C, 0x59),
    ral(6017, "May green", 0x4A, 0x77, 0x29),
    ral(6018, "Yellow green", 0x48, 0xA4, 0x3F),
    ral(6019, "Pastel green", 0xB9, 0xCE, 0xAC),
    ral(6021, "Pale green", 0x8A, 0x99, 0x77),
    ral(6024, "Traffic green", 0x00, 0x83, 0x51),
    ral(6027, "Light green", 0x7E, 0xBA, 0xB5),
    ral(6029, "Mint green", 0x00, 0x6F, 0x3D),
    ral(6032, "Signal green", 0x23, 0x7F, 0x52),
    ral(6033, "Mint turquoise", 0x46, 0x87, 0x7F),
    ral(6034, "Pastel turquoise", 0x7A, 0xAC, 0xAC),
    // Grey
    ral(7000, "Squirrel grey", 0x7E, 0x8B, 0x92),
    ral(7001, "Silver grey", 0x8F, 0x99, 0x9F),
    ral(7004, "Signal grey", 0x9C, 0x9C, 0x9C),
    ral(7005, "Mouse grey", 0x6C, 0x6E, 0x6B),
    ral(7011, "Iron grey", 0x52, 0x59, 0x5D),
    ral(7012, "Basalt grey", 0x57, 0x5D, 0x5E),
    ral(7015, "Slate grey", 0x51, 0x56, 0x5C),
    ral(7016, "Anthracite grey", 0x38, 0x3E, 0x42),
    ral(7021, "Black grey", 0x2F, 0x32, 0x34),
    ral(7024, "Graphite grey", 0x47, 0x4A, 0x50),
    ral(7030, "Stone grey", 0x92, 0x8E, 0x85),
    ral(7031, "Blue grey", 0x5B, 0x68, 0x6D),
    ral(7032, "Pebble grey", 0xB5, 0xB0, 0xA1),
    ral(7035, "Light grey", 0xCB, 0xD0, 0xCC),
    ral(7036, "Platinum grey", 0x9A, 0x97, 0x97),
    ral(7037, "Dusty grey", 0x7A, 0x7B, 0x7A),
    ral(7038, "Agate grey", 0xB4, 0xB8, 0xB0),
    ral(7039, "Quartz grey", 0x6B, 0x69, 0x5F),
    ral(7040, "Window grey", 0x9D, 0xA3, 0xA6),
    ral(7042, "Traffic grey A", 0x8F, 0x96, 0x95),
    ral(7043, "Traffic grey B", 0x4E, 0x54, 0x51),
    ral(7044, "Silk grey", 0xBD, 0xBD, 0xB2),
    ral(7047, "Telegrey 4", 0xD0, 0xD0, 0xD0),
    // Brown
    ral(8000, "Green brown", 0x82, 0x6C, 0x34),
    ral(8001, "Ochre brown", 0x95, 0x5F, 0x20),
    ral(8002, "Signal brown", 0x6C, 0x3B, 0x2A),
    ral(8003, "Clay brown", 0x73, 0x42, 0x22),
    ral(8004, "Copper brown", 0x8E, 0x40, 0x2A),
    ral(8007, "Fawn brown", 0x59, 0x35, 0x1F),
    ral(8008, "Olive brown", 0x6F, 0x4F, 0x28),
    ral(8011, "Nut brown", 0x5B, 0x3A, 0x29),
    ral(8012, "Red brown", 0x59, 0x23, 0x21),
    ral(8014, "Sepia brown", 0x38, 0x2C, 0x1E),
    ral(8015, "Chestnut brown", 0x63, 0x3A, 0x34),
    ral(8016, "Mahogany brown", 0x4C, 0x2F, 0x27),
    ral(8017, "Chocolate brown", 0x45, 0x32, 0x2E),
    ral(8019, "Grey brown", 0x40, 0x3A, 0x3A),
    ral(8022, "Black brown", 0x21, 0x21, 0x21),
    ral(8023, "Orange brown", 0xA6, 0x5E, 0x2E),
    ral(8024, "Beige brown", 0x79, 0x55, 0x3D),
    ral(8025, "Pale brown", 0x75, 0x5C, 0x48),
    ral(8028, "Terra brown", 0x4E, 0x3B, 0x31),
    // White and black
    ral(9001, "Cream", 0xE9, 0xE0, 0xD2),
    ral(9002, "Grey white", 0xD7, 0xD5, 0xCB),
    ral(9003, "Signal white", 0xEC, 0xEC, 0xE7),
    ral(9004, "Signal black", 0x2B, 0x2B, 0x2C),
    ral(9005, "Jet black", 0x0A, 0x0A, 0x0D),
    ral(9006, "White aluminium", 0xA5, 0xA5, 0xA5),
    ral(9007, "Grey aluminium", 0x8F, 0x8F, 0x8F),
    ral(9010, "Pure white", 0xF7, 0xF9, 0xEF),
    ral(9011, "Graphite black", 0x1C, 0x1C, 0x1C),
    ral(9016, "Traffic white", 0xF7, 0xFB, 0xF5),
    ral(9017, "Traffic black", 0x1E, 0x1E, 0x1E),
    ral(9018, "Papyrus white", 0xCF, 0xD3, 0xCD),
];

static RAL_INDEX: Lazy<HashMap<u16, &'static RalColor>> =
    Lazy::new(|| RAL_CLASSIC.iter().map(|entry| (entry.code, entry)).collect());

/// Normalize `1023`, `RAL1023`, `ral-1023`, `RAL 1023` or `RAL_1023` to the
/// numeric code.
fn normalize_code(raw: &str) -> Option<u16> {
    let trimmed = raw.trim();
    let digits = match trimmed.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("ral") => {
            let rest = &trimmed[3..];
            rest.strip_prefix(|c: char| matches!(c, '-' | '_' | ' '))
                .unwrap_or(rest)
        }
        _ => trimmed,
    };

    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Full table entry for a RAL code, if known.
pub fn find_ral(raw: &str) -> Option<&'static RalColor> {
    normalize_code(raw).and_then(|code| RAL_INDEX.get(&code).copied())
}

/// Resolve a RAL code to its table entry, failing with `ColorNotFound`.
pub fn lookup_ral(raw: &str) -> SwatchResult<&'static RalColor> {
    find_ral(raw).ok_or_else(|| SwatchError::ColorNotFound(format!("unknown RAL code '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<u16> = RAL_CLASSIC.iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), RAL_CLASSIC.len());
    }

    #[test]
    fn test_normalize_code_spellings() {
        assert_eq!(normalize_code("1023"), Some(1023));
        assert_eq!(normalize_code("RAL1023"), Some(1023));
        assert_eq!(normalize_code("ral-1023"), Some(1023));
        assert_eq!(normalize_code("Ral 1023"), Some(1023));
        assert_eq!(normalize_code("RAL_1023"), Some(1023));
    }

    #[test]
    fn test_normalize_code_rejects_garbage() {
        assert_eq!(normalize_code(""), None);
        assert_eq!(normalize_code("RAL"), None);
        assert_eq!(normalize_code("102"), None);
        assert_eq!(normalize_code("10234"), None);
        assert_eq!(normalize_code("+102"), None);
        assert_eq!(normalize_code("RAL--1023"), None);
    }

    #[test]
    fn test_lookup_known() {
        let jet_black = lookup_ral("9005").unwrap();
        assert_eq!(jet_black.name, "Jet black");
        assert_eq!(jet_black.color(), Color::opaque(0x0A, 0x0A, 0x0D));
        assert_eq!(find_ral("RAL 3020").unwrap().name, "Traffic red");
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(matches!(lookup_ral("1999"), Err(SwatchError::ColorNotFound(_))));
        assert!(matches!(lookup_ral("blue"), Err(SwatchError::ColorNotFound(_))));
    }
}
