//! # Sheet items
//!
//! ## Overview
//!
//! An [ActionItem] describes the appearance of one row: its label, an optional leading icon,
//! colors and font. Items are immutable values; the builder methods consume and return the
//! item, so reusing an item across several sheets never shares state between them.
use serde::{Deserialize, Serialize};

use crate::style::{Color, Font, Image};

/// Default font size for item labels, in points.
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Default background color for rows.
pub const DEFAULT_BACKGROUND_COLOR: Color = Color::WHITE;

/// Default label color.
pub const DEFAULT_FONT_COLOR: Color = Color::BLACK;

fn default_background() -> Color {
    DEFAULT_BACKGROUND_COLOR
}

fn default_font() -> Font {
    Font::system(DEFAULT_FONT_SIZE)
}

fn default_font_color() -> Color {
    DEFAULT_FONT_COLOR
}

/// One selectable entry in an action sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    text: String,

    #[serde(default)]
    image: Option<Image>,

    #[serde(default = "default_background")]
    background_color: Color,

    #[serde(default = "default_font")]
    font: Font,

    #[serde(default = "default_font_color")]
    font_color: Color,

    #[serde(default)]
    tag: Option<usize>,
}

impl ActionItem {
    /// Create an item with the given label and default styling.
    ///
    /// An empty label is accepted here; callers are expected to supply something readable.
    pub fn new(text: impl Into<String>) -> Self {
        ActionItem {
            text: text.into(),
            image: None,
            background_color: DEFAULT_BACKGROUND_COLOR,
            font: default_font(),
            font_color: DEFAULT_FONT_COLOR,
            tag: None,
        }
    }

    /// Show an icon before the label.
    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    /// Set the row's background color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the label font.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Set the label color.
    pub fn with_font_color(mut self, color: Color) -> Self {
        self.font_color = color;
        self
    }

    /// Set the tag reported to the selection handler.
    ///
    /// When unset, the item's position in the input sequence is used.
    pub fn with_tag(mut self, tag: usize) -> Self {
        self.tag = Some(tag);
        self
    }

    /// The label text.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// The leading icon, if any.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// The row's background color.
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// The label font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// The label color.
    pub fn font_color(&self) -> Color {
        self.font_color
    }

    /// The explicitly assigned tag, if any.
    pub fn tag(&self) -> Option<usize> {
        self.tag
    }
}

impl From<&str> for ActionItem {
    fn from(text: &str) -> Self {
        ActionItem::new(text)
    }
}

impl From<String> for ActionItem {
    fn from(text: String) -> Self {
        ActionItem::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::FontFamily;

    #[test]
    fn test_defaults() {
        let item = ActionItem::new("Share");

        assert_eq!(item.text(), "Share");
        assert_eq!(item.image(), None);
        assert_eq!(item.background_color(), Color::WHITE);
        assert_eq!(item.font_color(), Color::BLACK);
        assert_eq!(item.font().size, 14.0);
        assert_eq!(item.font().family, FontFamily::System);
        assert_eq!(item.tag(), None);
    }

    #[test]
    fn test_builder_does_not_alias() {
        let base = ActionItem::new("Delete");
        let red = base.clone().with_font_color(Color::rgb(255, 0, 0)).with_tag(7);

        assert_eq!(base.font_color(), Color::BLACK);
        assert_eq!(base.tag(), None);
        assert_eq!(red.font_color(), Color::rgb(255, 0, 0));
        assert_eq!(red.tag(), Some(7));
        assert_eq!(red.text(), "Delete");
    }

    #[test]
    fn test_deserialize_partial() {
        let item: ActionItem =
            serde_json::from_str(r##"{"text": "Copy", "font_color": "#ff0000"}"##).unwrap();

        assert_eq!(item.text(), "Copy");
        assert_eq!(item.font_color(), Color::rgb(255, 0, 0));
        assert_eq!(item.background_color(), Color::WHITE);
        assert_eq!(item.font().size, DEFAULT_FONT_SIZE);
    }
}
