//! Validated `#rrggbb` color values.
//!
//! # Invariants
//! - A `HexColor` always holds `#` followed by exactly six hex digits.
//! - The original spelling (letter case) is preserved for display.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color regex"));

/// 24-bit RGB color in `#rrggbb` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

/// Errors from parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexColorError {
    /// Value is not `#` followed by six hex digits.
    Malformed(String),
}

impl Display for HexColorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => {
                write!(f, "color must be `#` followed by six hex digits, got `{value}`")
            }
        }
    }
}

impl Error for HexColorError {}

impl HexColor {
    /// Parses a `#rrggbb` string, trimming surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, HexColorError> {
        let trimmed = value.trim();
        if !HEX_COLOR_RE.is_match(trimmed) {
            return Err(HexColorError::Malformed(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Formats 8-bit channels as lowercase `#rrggbb`.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    /// Returns the `(r, g, b)` channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        // Validated on construction, so every slice is two hex digits.
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or_default()
        };
        (channel(1..3), channel(3..5), channel(5..7))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison, so `#FF7F7F` matches `#ff7f7f`.
    pub fn same_color(&self, other: &HexColor) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = HexColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::{HexColor, HexColorError};

    #[test]
    fn parse_accepts_mixed_case_and_trims() {
        let color = HexColor::parse(" #FFbf7f ").expect("valid color");
        assert_eq!(color.as_str(), "#FFbf7f");
        assert_eq!(color.rgb(), (0xff, 0xbf, 0x7f));
    }

    #[test]
    fn parse_rejects_short_and_unprefixed_values() {
        for value in ["#fff", "ff7f7f", "#ff7f7g", "#ff7f7f0", ""] {
            let err = HexColor::parse(value).expect_err("malformed color must fail");
            assert_eq!(err, HexColorError::Malformed(value.to_string()));
        }
    }

    #[test]
    fn from_rgb_formats_lowercase_padded() {
        assert_eq!(HexColor::from_rgb(0, 10, 255).as_str(), "#000aff");
    }

    #[test]
    fn same_color_ignores_case() {
        let upper = HexColor::parse("#FF7F7F").expect("valid color");
        let lower = HexColor::parse("#ff7f7f").expect("valid color");
        assert_ne!(upper, lower);
        assert!(upper.same_color(&lower));
    }
}
