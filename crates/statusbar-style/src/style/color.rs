//! Color values for text, backgrounds, borders, shadows and progress bars.
//!
//! Colors are stored as 8-bit RGBA so they compare exactly and survive a
//! serialization round trip unchanged. Renderers that want unit-interval
//! components use [`Color::components`].
//!
//! Supported textual forms:
//!
//! - Named colors: `black`, `white`, `red`, `green`, `blue`, `yellow`,
//!   `orange`, `purple`, `gray`/`grey`, `dark_gray`, `light_gray`, `clear`
//! - RGB hex: `"#ff6b35"` or `"#fff"` (3 or 6 digits, opaque)
//! - RGBA hex: `"#ff6b3580"` (8 digits)
//! - Component lists in style sheets: `[255, 107, 53]` or `[255, 107, 53, 128]`
//!
//! # Example
//!
//! ```rust
//! use statusbar_style::Color;
//!
//! let red: Color = "red".parse().unwrap();
//! assert_eq!(red, Color::rgb(255, 0, 0));
//!
//! let translucent: Color = "#00000080".parse().unwrap();
//! assert_eq!(translucent.alpha, 128);
//! assert_eq!(translucent.to_string(), "#00000080");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StyleError;

/// An sRGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const CLEAR: Color = Color::rgba(0, 0, 0, 0);

    /// Creates an opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// Creates a color with an explicit alpha.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque gray with the given white level.
    pub const fn gray(white: u8) -> Self {
        Self::rgb(white, white, white)
    }

    /// Returns the same color with a different alpha.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    /// Returns true if the color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.alpha == u8::MAX
    }

    /// Returns `(red, green, blue, alpha)` in the unit interval.
    pub fn components(&self) -> (f64, f64, f64, f64) {
        let unit = |c: u8| f64::from(c) / 255.0;
        (
            unit(self.red),
            unit(self.green),
            unit(self.blue),
            unit(self.alpha),
        )
    }

    /// Formats the color as `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }

    fn parse_hex(input: &str, hex: &str) -> Result<Self, StyleError> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(StyleError::invalid_color(input, "invalid hex digits"));
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| StyleError::invalid_color(input, "invalid hex digits"))
        };
        let nibble = |i: usize| channel(i..i + 1).map(|n| n * 17);

        match hex.len() {
            3 => Ok(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(StyleError::invalid_color(
                input,
                "hex colors must have 3, 6 or 8 digits",
            )),
        }
    }

    fn parse_named(input: &str) -> Result<Self, StyleError> {
        let color = match input.to_lowercase().as_str() {
            "black" => Color::BLACK,
            "white" => Color::WHITE,
            "clear" | "transparent" => Color::CLEAR,
            "red" => Color::rgb(255, 0, 0),
            "green" => Color::rgb(0, 255, 0),
            "blue" => Color::rgb(0, 0, 255),
            "yellow" => Color::rgb(255, 255, 0),
            "orange" => Color::rgb(255, 128, 0),
            "purple" => Color::rgb(128, 0, 128),
            "gray" | "grey" => Color::gray(128),
            "dark_gray" | "dark_grey" => Color::gray(85),
            "light_gray" | "light_grey" => Color::gray(170),
            _ => {
                return Err(StyleError::invalid_color(input, "unknown color name"));
            }
        };
        Ok(color)
    }

    /// Builds a color from a component list (`[r, g, b]` or `[r, g, b, a]`).
    pub fn from_components(components: &[u8]) -> Result<Self, StyleError> {
        match *components {
            [r, g, b] => Ok(Color::rgb(r, g, b)),
            [r, g, b, a] => Ok(Color::rgba(r, g, b, a)),
            _ => Err(StyleError::invalid_color(
                format!("{:?}", components),
                format!(
                    "component lists must have 3 or 4 values, got {}",
                    components.len()
                ),
            )),
        }
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.strip_prefix('#') {
            Some(hex) => Self::parse_hex(trimmed, hex),
            None => Self::parse_named(trimmed),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Accepted serialized forms of a color.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ColorRepr {
    Text(String),
    Components(Vec<u8>),
}

impl ColorRepr {
    /// Returns true for the `none` keyword style sheets use to clear a color.
    pub(crate) fn is_none_keyword(&self) -> bool {
        matches!(self, ColorRepr::Text(text) if text.trim().eq_ignore_ascii_case("none"))
    }

    pub(crate) fn into_color(self) -> Result<Color, StyleError> {
        match self {
            ColorRepr::Text(text) => text.parse(),
            ColorRepr::Components(components) => Color::from_components(&components),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ColorRepr::deserialize(deserializer)?
            .into_color()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_parse_named_colors() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        assert_eq!("white".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("black".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!("clear".parse::<Color>().unwrap(), Color::CLEAR);
    }

    #[test]
    fn test_parse_named_colors_case_insensitive() {
        assert_eq!("RED".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        assert_eq!("Dark_Gray".parse::<Color>().unwrap(), Color::gray(85));
    }

    #[test]
    fn test_parse_gray_aliases() {
        assert_eq!("gray".parse::<Color>().unwrap(), Color::gray(128));
        assert_eq!("grey".parse::<Color>().unwrap(), Color::gray(128));
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "chartreuse".parse::<Color>().unwrap_err();
        assert!(matches!(err, StyleError::InvalidColor { .. }));
    }

    #[test]
    fn test_parse_hex_3_digit() {
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#f80".parse::<Color>().unwrap(), Color::rgb(255, 136, 0));
    }

    #[test]
    fn test_parse_hex_6_digit() {
        assert_eq!(
            "#ff6b35".parse::<Color>().unwrap(),
            Color::rgb(255, 107, 53)
        );
        assert_eq!(
            "#FF6B35".parse::<Color>().unwrap(),
            Color::rgb(255, 107, 53)
        );
    }

    #[test]
    fn test_parse_hex_8_digit() {
        assert_eq!(
            "#ff6b3580".parse::<Color>().unwrap(),
            Color::rgba(255, 107, 53, 128)
        );
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!("#ff".parse::<Color>().is_err());
        assert!("#fffff".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
        assert!("#ééé".parse::<Color>().is_err());
    }

    #[test]
    fn test_parse_hex_rejects_signs() {
        assert!("#+f+f+f".parse::<Color>().is_err());
        assert!("#+fff+ff".parse::<Color>().is_err());
        assert!("#-1".parse::<Color>().is_err());
    }

    #[test]
    fn test_from_components() {
        assert_eq!(
            Color::from_components(&[1, 2, 3]).unwrap(),
            Color::rgb(1, 2, 3)
        );
        assert_eq!(
            Color::from_components(&[1, 2, 3, 4]).unwrap(),
            Color::rgba(1, 2, 3, 4)
        );
        assert!(Color::from_components(&[1, 2]).is_err());
    }

    // =========================================================================
    // Formatting and conversion
    // =========================================================================

    #[test]
    fn test_to_hex_opaque_omits_alpha() {
        assert_eq!(Color::rgb(150, 30, 0).to_hex(), "#961e00");
    }

    #[test]
    fn test_to_hex_translucent_includes_alpha() {
        assert_eq!(Color::WHITE.with_alpha(0).to_hex(), "#ffffff00");
    }

    #[test]
    fn test_components_unit_interval() {
        let (r, g, b, a) = Color::rgba(255, 0, 51, 255).components();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < 1e-9);
        assert_eq!(a, 1.0);
    }

    // =========================================================================
    // Serde
    // =========================================================================

    #[test]
    fn test_deserialize_string_and_sequence() {
        let from_text: Color = serde_yaml::from_str("'#961e00'").unwrap();
        let from_list: Color = serde_yaml::from_str("[150, 30, 0]").unwrap();
        assert_eq!(from_text, from_list);
    }

    #[test]
    fn test_deserialize_rejects_bad_component_count() {
        assert!(serde_yaml::from_str::<Color>("[150, 30]").is_err());
    }

    #[test]
    fn test_serialize_as_hex_string() {
        let json = serde_json::to_string(&Color::rgba(0, 0, 0, 128)).unwrap();
        assert_eq!(json, "\"#00000080\"");
    }
}
