//! # Rows
//!
//! ## Overview
//!
//! A [Row] is one interactive strip in the sheet. Rows built from [ActionItem]s wrap a
//! [RowButton]; rows supplied by the caller wrap an arbitrary custom view. Either way, the row
//! carries a tag that is reported back when it is tapped.
use crate::geometry::{Anchor, EdgeInsets, Size};
use crate::item::ActionItem;
use crate::style::{Color, Font, Image};

/// Corner radius applied to every row and its button.
pub const CORNER_RADIUS: f64 = 10.0;

/// Insets around the icon of a row that shows one.
pub const IMAGE_INSETS: EdgeInsets = EdgeInsets::new(0.0, 10.0, 0.0, 15.0);

/// Insets around the label of a row that shows an icon.
pub const TITLE_INSETS: EdgeInsets = EdgeInsets::new(0.0, 15.0, 0.0, 10.0);

/// Custom view type for sheets that are only ever built from labels or items.
#[derive(Debug)]
pub enum NoCustomView {}

/// The tappable control inside an item row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowButton {
    tag: usize,
    title: String,
    title_color: Color,
    font: Font,
    image: Option<Image>,
    image_insets: EdgeInsets,
    title_insets: EdgeInsets,
    highlight: Image,
    clips_to_bounds: bool,
    anchor: Anchor,
}

impl RowButton {
    fn new(item: &ActionItem, tag: usize, highlighted: Color, bounds: Size) -> Self {
        let (image_insets, title_insets) = if item.image().is_some() {
            (IMAGE_INSETS, TITLE_INSETS)
        } else {
            (EdgeInsets::ZERO, EdgeInsets::ZERO)
        };

        RowButton {
            tag,
            title: item.text().to_string(),
            title_color: item.font_color(),
            font: item.font().clone(),
            image: item.image().cloned(),
            image_insets,
            title_insets,
            highlight: Image::solid(highlighted, bounds),
            clips_to_bounds: true,
            anchor: Anchor::fill(),
        }
    }

    /// Regenerate the highlighted-state fill for a new color or bounds.
    pub fn refresh_highlight(&mut self, highlighted: Color, bounds: Size) {
        self.highlight = Image::solid(highlighted, bounds);
    }

    /// The tag reported when this button is tapped.
    pub fn tag(&self) -> usize {
        self.tag
    }

    /// The label text.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// The label color in the normal state.
    pub fn title_color(&self) -> Color {
        self.title_color
    }

    /// The label font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// The icon, shown in both the normal and highlighted states.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Insets around the icon.
    pub fn image_insets(&self) -> EdgeInsets {
        self.image_insets
    }

    /// Insets around the label.
    pub fn title_insets(&self) -> EdgeInsets {
        self.title_insets
    }

    /// Background fill used while the button is pressed.
    pub fn highlight(&self) -> &Image {
        &self.highlight
    }

    /// Whether drawing is clipped to the button's rounded bounds.
    pub fn clips_to_bounds(&self) -> bool {
        self.clips_to_bounds
    }

    /// How the button is pinned inside its row.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }
}

/// What a [Row] contains.
#[derive(Debug)]
pub enum RowContent<V> {
    /// A button built from an [ActionItem].
    Button(RowButton),

    /// A view supplied by the caller.
    Custom {
        /// The caller's view.
        view: V,

        /// Position of the view in the input sequence.
        tag: usize,
    },
}

/// One interactive strip in the sheet.
#[derive(Debug)]
pub struct Row<V> {
    content: RowContent<V>,
    background: Option<Color>,
    corner_radius: f64,
}

impl<V> Row<V> {
    /// Wrap a caller-supplied view found at `position` in the input sequence.
    pub fn custom(view: V, position: usize) -> Self {
        Row {
            content: RowContent::Custom { view, tag: position },
            background: None,
            corner_radius: CORNER_RADIUS,
        }
    }

    /// The row's contents.
    pub fn content(&self) -> &RowContent<V> {
        &self.content
    }

    /// The tag reported when this row is tapped.
    pub fn tag(&self) -> usize {
        match &self.content {
            RowContent::Button(button) => button.tag,
            RowContent::Custom { tag, .. } => *tag,
        }
    }

    /// The row's own background color.
    ///
    /// Custom rows have none and take the sheet's background color.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// The radius used to round the row's corners.
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// The button inside this row, if it was built from an item.
    pub fn button(&self) -> Option<&RowButton> {
        match &self.content {
            RowContent::Button(button) => Some(button),
            RowContent::Custom { .. } => None,
        }
    }

    pub(crate) fn button_mut(&mut self) -> Option<&mut RowButton> {
        match &mut self.content {
            RowContent::Button(button) => Some(button),
            RowContent::Custom { .. } => None,
        }
    }
}

/// Build one detached row per item, preserving input order.
///
/// Each button's tag is the item's own tag when it has one, and its position otherwise. The
/// highlighted fill is generated at `bounds` using the `highlighted` color. No layout is done,
/// and items are not validated.
pub fn build_rows<V>(items: &[ActionItem], highlighted: Color, bounds: Size) -> Vec<Row<V>> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            let tag = item.tag().unwrap_or(position);
            let button = RowButton::new(item, tag, highlighted, bounds);

            Row {
                content: RowContent::Button(button),
                background: Some(item.background_color()),
                corner_radius: CORNER_RADIUS,
            }
        })
        .collect()
}
