//! # Styling values
//!
//! ## Overview
//!
//! Colors, fonts and images used to describe how rows look. These are plain values: hosts
//! decide how to turn them into pixels or terminal cells.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// Errors returned when parsing a [Color] from a string.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParseColorError {
    /// The string did not start with `#`.
    #[error("Color must start with '#': {0:?}")]
    MissingHash(String),

    /// The string had the wrong number of hex digits.
    #[error("Color must have 6 or 8 hex digits: {0:?}")]
    BadLength(String),

    /// The string contained something other than hex digits.
    #[error("Invalid hex digits in color: {0:?}")]
    BadDigit(String),
}

/// An RGBA color with 8 bits per channel.
///
/// Colors serialize as `#rrggbb` when opaque, and `#rrggbbaa` otherwise.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,

    /// Green channel.
    pub g: u8,

    /// Blue channel.
    pub b: u8,

    /// Alpha channel, where 0 is fully transparent.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Two-thirds white, the conventional "light gray".
    pub const LIGHT_GRAY: Color = Color::rgb(170, 170, 170);

    /// Fully transparent.
    pub const CLEAR: Color = Color::rgba(0, 0, 0, 0);

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Create a color with an alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Whether this color has no visible contribution.
    pub fn is_clear(&self) -> bool {
        self.a == 0
    }

    /// Blend `amount` of `other` into this color, keeping this color's alpha.
    ///
    /// An `amount` of 0 returns this color, and 1 returns `other`.
    pub fn mix(&self, other: Color, amount: f64) -> Color {
        let amount = amount.clamp(0.0, 1.0);
        let chan = |a: u8, b: u8| -> u8 {
            let v = a as f64 + (b as f64 - a as f64) * amount;

            v.round().clamp(0.0, 255.0) as u8
        };

        Color::rgba(chan(self.r, other.r), chan(self.g, other.g), chan(self.b, other.b), self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;

        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }

        Ok(())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or_else(|| ParseColorError::MissingHash(s.into()))?;

        if hex.len() != 6 && hex.len() != 8 {
            return Err(ParseColorError::BadLength(s.into()));
        }

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::BadDigit(s.into()));
        }

        let chan = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let bad = |_| ParseColorError::BadDigit(s.into());

        let r = chan(0).map_err(bad)?;
        let g = chan(2).map_err(bad)?;
        let b = chan(4).map_err(bad)?;
        let a = if hex.len() == 8 { chan(6).map_err(bad)? } else { 255 };

        Ok(Color::rgba(r, g, b, a))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_str(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.to_string()
    }
}

/// Which typeface a [Font] uses.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// The host's default interface font.
    #[default]
    System,

    /// A font looked up by name.
    Named(String),
}

/// A typeface at a given point size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// The typeface.
    pub family: FontFamily,

    /// Size in points.
    pub size: f64,

    /// Whether to use a bold weight.
    #[serde(default)]
    pub bold: bool,
}

impl Font {
    /// The host's interface font at the given size.
    pub fn system(size: f64) -> Self {
        Font { family: FontFamily::System, size, bold: false }
    }

    /// Use a bold weight.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// What an [Image] contains.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    /// A single solid color.
    Solid(Color),

    /// A symbol or glyph, such as an emoji or an icon-font character.
    Symbol(String),
}

/// A bitmap or symbol that can be shown inside a row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// The image contents.
    pub kind: ImageKind,

    /// Natural size, in points.
    pub size: Size,

    /// Pixels per point.
    pub scale: f64,
}

impl Image {
    /// A solid-color bitmap of the given size at scale 1.
    ///
    /// Solid images stretch to fill whatever area they are drawn into.
    pub fn solid(color: Color, size: Size) -> Self {
        Image { kind: ImageKind::Solid(color), size, scale: 1.0 }
    }

    /// A symbol image, sized by the host when drawn.
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Image { kind: ImageKind::Symbol(symbol.into()), size: Size::ZERO, scale: 1.0 }
    }

    /// The fill color, if this is a solid image.
    pub fn fill_color(&self) -> Option<Color> {
        match self.kind {
            ImageKind::Solid(color) => Some(color),
            ImageKind::Symbol(_) => None,
        }
    }

    /// The symbol text, if this is a symbol image.
    pub fn symbol_text(&self) -> Option<&str> {
        match &self.kind {
            ImageKind::Solid(_) => None,
            ImageKind::Symbol(s) => Some(s.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!("#ffffff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#aaaaaa".parse::<Color>().unwrap(), Color::LIGHT_GRAY);
        assert_eq!("#00000000".parse::<Color>().unwrap(), Color::CLEAR);
        assert_eq!("#0A0b0C".parse::<Color>().unwrap(), Color::rgb(10, 11, 12));

        assert_eq!(
            "ffffff".parse::<Color>(),
            Err(ParseColorError::MissingHash("ffffff".into()))
        );
        assert_eq!("#fff".parse::<Color>(), Err(ParseColorError::BadLength("#fff".into())));
        assert_eq!("#gggggg".parse::<Color>(), Err(ParseColorError::BadDigit("#gggggg".into())));
    }

    #[test]
    fn test_display_color() {
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
    }

    #[test]
    fn test_mix() {
        let gray = Color::rgb(200, 100, 50);

        assert_eq!(gray.mix(Color::BLACK, 0.0), gray);
        assert_eq!(gray.mix(Color::BLACK, 0.5), Color::rgb(100, 50, 25));
        assert_eq!(gray.mix(Color::BLACK, 1.0), Color::BLACK);
        assert_eq!(gray.mix(Color::BLACK, 7.0), Color::BLACK);
    }

    #[test]
    fn test_solid_image() {
        let img = Image::solid(Color::LIGHT_GRAY, Size::new(320.0, 480.0));

        assert_eq!(img.fill_color(), Some(Color::LIGHT_GRAY));
        assert_eq!(img.symbol_text(), None);
        assert_eq!(img.scale, 1.0);
        assert_eq!(img.size, Size::new(320.0, 480.0));
    }
}
