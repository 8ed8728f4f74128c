//! Color string parsing.
//!
//! Style configs store colors as strings so callers can write `"red"` or
//! `"#2e7d32"` without touching terminal types. Parsing happens once, at paint
//! time, in the [`Driver`](crate::render::Driver). Widget rendering never
//! parses colors and therefore never fails.

use crossterm::style::Color;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error produced when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string is not a known color name.
    #[error("unknown color name: {0:?}")]
    UnknownName(String),

    /// A `#`-prefixed string is not a valid 3- or 6-digit hex color.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a color string into a crossterm [`Color`].
///
/// Supports:
/// - Hex colors: `#rrggbb` or `#rgb`
/// - Named colors: `black`, `red`, `green`, `yellow`, `blue`, `magenta`,
///   `cyan`, `white`, the `dark_*` variants, and `grey`/`gray`
pub fn parse_color(s: &str) -> Result<Color, ColorParseError> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex).ok_or_else(|| ColorParseError::InvalidHex(s.to_owned()));
    }

    match s.to_ascii_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "white" => Ok(Color::White),
        "dark_red" | "darkred" => Ok(Color::DarkRed),
        "dark_green" | "darkgreen" => Ok(Color::DarkGreen),
        "dark_yellow" | "darkyellow" => Ok(Color::DarkYellow),
        "dark_blue" | "darkblue" => Ok(Color::DarkBlue),
        "dark_magenta" | "darkmagenta" => Ok(Color::DarkMagenta),
        "dark_cyan" | "darkcyan" => Ok(Color::DarkCyan),
        "dark_grey" | "dark_gray" | "darkgrey" | "darkgray" => Ok(Color::DarkGrey),
        "grey" | "gray" => Ok(Color::Grey),
        _ => Err(ColorParseError::UnknownName(s.to_owned())),
    }
}

/// Parse a hex color string (without the leading `#`).
///
/// Supports 6-digit (`rrggbb`) and 3-digit (`rgb`) formats.
fn parse_hex_color(hex: &str) -> Option<Color> {
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb { r, g, b })
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            // Expand: 0xA -> 0xAA
            Some(Color::Rgb {
                r: r * 16 + r,
                g: g * 16 + g,
                b: b * 16 + b,
            })
        }
        _ => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors() {
        assert_eq!(parse_color("red"), Ok(Color::Red));
        assert_eq!(parse_color("white"), Ok(Color::White));
        assert_eq!(parse_color("dark_grey"), Ok(Color::DarkGrey));
        assert_eq!(parse_color("darkgray"), Ok(Color::DarkGrey));
    }

    #[test]
    fn named_colors_case_insensitive() {
        assert_eq!(parse_color("RED"), Ok(Color::Red));
        assert_eq!(parse_color("Cyan"), Ok(Color::Cyan));
    }

    #[test]
    fn named_colors_trimmed() {
        assert_eq!(parse_color("  blue  "), Ok(Color::Blue));
    }

    #[test]
    fn hex_six_digit() {
        assert_eq!(
            parse_color("#ff0080"),
            Ok(Color::Rgb { r: 255, g: 0, b: 128 })
        );
    }

    #[test]
    fn hex_three_digit_expands() {
        assert_eq!(
            parse_color("#f0a"),
            Ok(Color::Rgb { r: 255, g: 0, b: 170 })
        );
    }

    #[test]
    fn unknown_name_errors() {
        let err = parse_color("chartreuse-ish");
        assert_eq!(
            err,
            Err(ColorParseError::UnknownName("chartreuse-ish".to_owned()))
        );
    }

    #[test]
    fn invalid_hex_errors() {
        assert_eq!(
            parse_color("#12345"),
            Err(ColorParseError::InvalidHex("#12345".to_owned()))
        );
        assert_eq!(
            parse_color("#zzzzzz"),
            Err(ColorParseError::InvalidHex("#zzzzzz".to_owned()))
        );
    }

    #[test]
    fn error_display() {
        let err = ColorParseError::UnknownName("nope".to_owned());
        assert!(err.to_string().contains("nope"));
    }
}
