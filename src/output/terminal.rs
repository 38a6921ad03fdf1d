//! Terminal output utilities.
//!
//! Provides number and color helpers for terminal output.

use colored::{ColoredString, Colorize};

/// Format a count with `,` thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Parse a `#rrggbb` color.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Color `text` with a `#rrggbb` palette entry; unknown colors stay plain.
pub fn paint(text: &str, hex: &str) -> ColoredString {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(256), "256");
        assert_eq!(group_thousands(65536), "65,536");
        assert_eq!(group_thousands(16777216), "16,777,216");
        assert_eq!(group_thousands(4294967296), "4,294,967,296");
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#3498db"), Some((0x34, 0x98, 0xdb)));
        assert_eq!(hex_to_rgb("#ECF0F1"), Some((0xec, 0xf0, 0xf1)));
        assert_eq!(hex_to_rgb("3498db"), None);
        assert_eq!(hex_to_rgb("#34"), None);
        assert_eq!(hex_to_rgb("#zz98db"), None);
    }
}
