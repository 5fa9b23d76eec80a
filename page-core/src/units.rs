//! Parsing for the string-typed style fields stored on elements.
//!
//! Elements keep sizes and colors as the strings the editor typed
//! (`"48px"`, `"50%"`, `"auto"`, `"#1e3a8a"`). Consumers that need numbers
//! parse them here and decide themselves how to degrade on failure.

use std::fmt;
use std::str::FromStr;

use crate::{PageError, PageResult};

/// Pixels per `em`/`rem` when resolving relative font units.
pub const ROOT_FONT_PX: f32 = 16.0;

/// A parsed CSS length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssLength {
    /// Absolute pixels (`"48px"`, `"48"`, `"3rem"` resolved against [`ROOT_FONT_PX`]).
    Px(f32),
    /// Percentage of the containing box (`"50%"`).
    Percent(f32),
    /// `"auto"` or an empty string.
    Auto,
}

impl CssLength {
    /// Parse a CSS length string.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidLength`] for anything that is not a
    /// finite, non-negative number with an optional `px`, `%`, `em`, `rem`
    /// or `pt` unit, or the keyword `auto`.
    pub fn parse(input: &str) -> PageResult<Self> {
        let trimmed = input.trim().to_ascii_lowercase();
        if trimmed.is_empty() || trimmed == "auto" {
            return Ok(Self::Auto);
        }

        let (number, scale, percent) = if let Some(n) = trimmed.strip_suffix('%') {
            (n, 1.0, true)
        } else if let Some(n) = trimmed.strip_suffix("rem") {
            (n, ROOT_FONT_PX, false)
        } else if let Some(n) = trimmed.strip_suffix("em") {
            (n, ROOT_FONT_PX, false)
        } else if let Some(n) = trimmed.strip_suffix("px") {
            (n, 1.0, false)
        } else if let Some(n) = trimmed.strip_suffix("pt") {
            (n, 4.0 / 3.0, false)
        } else {
            (trimmed.as_str(), 1.0, false)
        };

        let value: f32 = number
            .trim()
            .parse()
            .map_err(|_| PageError::InvalidLength(input.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(PageError::InvalidLength(input.to_string()));
        }

        Ok(if percent {
            Self::Percent(value)
        } else {
            Self::Px(value * scale)
        })
    }

    /// Resolve against a containing size, using `auto` for [`CssLength::Auto`].
    #[must_use]
    pub fn resolve(self, container: f32, auto: f32) -> f32 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => container * pct / 100.0,
            Self::Auto => auto,
        }
    }

    /// Pixel value if the length is absolute.
    #[must_use]
    pub fn as_px(self) -> Option<f32> {
        match self {
            Self::Px(px) => Some(px),
            Self::Percent(_) | Self::Auto => None,
        }
    }
}

impl FromStr for CssLength {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse a length that must be absolute (font sizes, border radii).
///
/// # Errors
///
/// Returns [`PageError::InvalidLength`] if the string does not parse or is
/// relative (`%`, `auto`).
pub fn parse_px(input: &str) -> PageResult<f32> {
    CssLength::parse(input)?
        .as_px()
        .ok_or_else(|| PageError::InvalidLength(input.to_string()))
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl RgbColor {
    /// White.
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a color from channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `#rrggbb` (hash optional) or one of a few color keywords.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidColor`] for anything else.
    pub fn parse(input: &str) -> PageResult<Self> {
        let trimmed = input.trim().to_ascii_lowercase();
        match trimmed.as_str() {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            "red" => return Ok(Self::new(0xFF, 0, 0)),
            "green" => return Ok(Self::new(0, 0x80, 0)),
            "blue" => return Ok(Self::new(0, 0, 0xFF)),
            "gray" | "grey" => return Ok(Self::new(0x80, 0x80, 0x80)),
            _ => {}
        }

        let hex = trimmed.strip_prefix('#').unwrap_or(&trimmed);
        let invalid = || PageError::InvalidColor(input.to_string());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..=i].repeat(2));
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Upper-case `RRGGBB` without a hash, as OOXML `srgbClr` expects.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for RgbColor {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lengths() {
        assert_eq!(CssLength::parse("48px").expect("px"), CssLength::Px(48.0));
        assert_eq!(CssLength::parse(" 18 ").expect("bare"), CssLength::Px(18.0));
        assert_eq!(CssLength::parse("50%").expect("pct"), CssLength::Percent(50.0));
        assert_eq!(CssLength::parse("auto").expect("auto"), CssLength::Auto);
        assert_eq!(CssLength::parse("").expect("empty"), CssLength::Auto);
        assert_eq!(CssLength::parse("2rem").expect("rem"), CssLength::Px(32.0));
        assert_eq!(CssLength::parse("1.5em").expect("em"), CssLength::Px(24.0));
    }

    #[test]
    fn test_parse_length_rejects_garbage() {
        assert!(CssLength::parse("big").is_err());
        assert!(CssLength::parse("-4px").is_err());
        assert!(CssLength::parse("12vw").is_err());
        assert!(CssLength::parse("NaNpx").is_err());
    }

    #[test]
    fn test_parse_px_rejects_relative() {
        assert!((parse_px("24px").expect("px") - 24.0).abs() < f32::EPSILON);
        assert!(parse_px("50%").is_err());
        assert!(parse_px("auto").is_err());
    }

    #[test]
    fn test_resolve() {
        assert!((CssLength::Percent(50.0).resolve(800.0, 0.0) - 400.0).abs() < f32::EPSILON);
        assert!((CssLength::Auto.resolve(800.0, 120.0) - 120.0).abs() < f32::EPSILON);
        assert!((CssLength::Px(30.0).resolve(800.0, 0.0) - 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!(
            RgbColor::parse("#1e3a8a").expect("hex6"),
            RgbColor::new(0x1e, 0x3a, 0x8a)
        );
        assert_eq!(RgbColor::parse("#fff").expect("hex3"), RgbColor::WHITE);
        assert_eq!(RgbColor::parse("Black").expect("keyword"), RgbColor::BLACK);
        assert_eq!(RgbColor::new(0x1e, 0x3a, 0x8a).to_hex(), "1E3A8A");
        assert_eq!(RgbColor::new(0x1e, 0x3a, 0x8a).to_string(), "#1e3a8a");
    }

    #[test]
    fn test_parse_color_rejects_garbage() {
        assert!(RgbColor::parse("#12345").is_err());
        assert!(RgbColor::parse("#gggggg").is_err());
        assert!(RgbColor::parse("rgb(1,2,3)").is_err());
    }
}
