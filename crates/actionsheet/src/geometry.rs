//! # Geometry
//!
//! ## Overview
//!
//! Sizes, rectangles and edge insets measured in layout points, along with the [Anchor] type
//! used to pin a view to the edges of its container.
//!
//! The vertical axis grows downwards, so a negative bottom offset moves a view up and away from
//! the container's bottom edge.
use serde::{Deserialize, Serialize};

/// A width and a height, in points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,

    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// A size with no area.
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    /// Create a new [Size].
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }
}

/// An axis-aligned rectangle whose origin is its upper-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Horizontal position of the left edge.
    pub x: f64,

    /// Vertical position of the top edge.
    pub y: f64,

    /// Horizontal extent.
    pub width: f64,

    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Create a new [Rect].
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    /// Position of the left edge.
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Position of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Position of the top edge.
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Position of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// The size of this rectangle.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether the point `(x, y)` lies inside this rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges exclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}

/// Distances to inset from each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Inset from the top edge.
    pub top: f64,

    /// Inset from the left edge.
    pub left: f64,

    /// Inset from the bottom edge.
    pub bottom: f64,

    /// Inset from the right edge.
    pub right: f64,
}

impl EdgeInsets {
    /// No insets on any edge.
    pub const ZERO: EdgeInsets = EdgeInsets::new(0.0, 0.0, 0.0, 0.0);

    /// Create insets in top, left, bottom, right order.
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        EdgeInsets { top, left, bottom, right }
    }
}

/// A set of edge constraints that pin a view to its container.
///
/// Every offset is measured from the matching edge of the container, so `right` and `bottom`
/// are usually zero or negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchor {
    /// Offset of the left edge from the container's left edge.
    pub left: f64,

    /// Offset of the right edge from the container's right edge.
    pub right: f64,

    /// Offset of the top edge from the container's top edge, if pinned.
    pub top: Option<f64>,

    /// Offset of the bottom edge from the container's bottom edge.
    pub bottom: f64,

    /// Fixed height, if any.
    pub height: Option<f64>,
}

impl Anchor {
    /// Pin the left and right edges with a symmetric `horizontal` margin, along with the bottom
    /// edge and optionally the top edge and a fixed height.
    pub fn pinned(horizontal: f64, top: Option<f64>, bottom: f64, height: Option<f64>) -> Self {
        Anchor { left: horizontal, right: -horizontal, top, bottom, height }
    }

    /// Pin all four edges to the container with no insets.
    pub fn fill() -> Self {
        Anchor::pinned(0.0, Some(0.0), 0.0, None)
    }

    /// Resolve these constraints against a container into a concrete frame.
    ///
    /// A fixed height takes precedence over a pinned top edge. When neither is given the view
    /// collapses onto its bottom edge.
    pub fn frame_in(&self, container: &Rect) -> Rect {
        let left = container.left() + self.left;
        let right = container.right() + self.right;
        let bottom = container.bottom() + self.bottom;

        let top = match (self.height, self.top) {
            (Some(height), _) => bottom - height,
            (None, Some(top)) => container.top() + top,
            (None, None) => bottom,
        };

        Rect::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_matches_container() {
        let container = Rect::new(3.0, 4.0, 100.0, 50.0);

        assert_eq!(Anchor::fill().frame_in(&container), container);
    }

    #[test]
    fn test_pinned_with_height() {
        let container = Rect::new(0.0, 0.0, 320.0, 480.0);
        let anchor = Anchor::pinned(10.0, None, -5.0, Some(45.0));
        let frame = anchor.frame_in(&container);

        assert_eq!(frame, Rect::new(10.0, 430.0, 300.0, 45.0));
        assert_eq!(frame.bottom(), 475.0);
    }

    #[test]
    fn test_pinned_top_and_bottom() {
        let container = Rect::new(0.0, 10.0, 100.0, 100.0);
        let anchor = Anchor::pinned(0.0, Some(20.0), -30.0, None);

        assert_eq!(anchor.frame_in(&container), Rect::new(0.0, 30.0, 100.0, 50.0));
    }

    #[test]
    fn test_collapse_when_too_small() {
        let container = Rect::new(0.0, 0.0, 15.0, 10.0);
        let anchor = Anchor::pinned(10.0, None, 0.0, None);
        let frame = anchor.frame_in(&container);

        assert_eq!(frame.width, 0.0);
        assert_eq!(frame.height, 0.0);
    }

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        assert_eq!(rect.contains(0.0, 0.0), true);
        assert_eq!(rect.contains(9.9, 9.9), true);
        assert_eq!(rect.contains(10.0, 5.0), false);
        assert_eq!(rect.contains(5.0, 10.0), false);
    }
}
