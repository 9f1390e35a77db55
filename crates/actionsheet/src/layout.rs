//! # Stack layout
//!
//! ## Overview
//!
//! Rows are stacked upwards from the bottom edge of the container. Every row is pinned to the
//! container on its own; no row's position depends on another row, so the offset formula in
//! [bottom_offset] alone determines the stacking.
//!
//! The first row of the input ends up nearest the bottom edge, and each following row sits
//! [ROW_SPACING] item heights above the previous one, plus the fixed [ROW_GAP].
use crate::geometry::{Anchor, Rect};

/// Horizontal margin between each row and the container's left and right edges.
pub const ROW_MARGIN: f64 = 10.0;

/// Fixed gap between the bottom row and the container's bottom edge.
pub const ROW_GAP: f64 = 5.0;

/// Multiple of the item height between the bottoms of neighbouring rows.
pub const ROW_SPACING: f64 = 1.15;

/// Offset of a row's bottom edge from the container's bottom edge.
///
/// `k` counts rows from the bottom, starting at 0.
pub fn bottom_offset(item_height: f64, k: usize) -> f64 {
    -(item_height * k as f64 * ROW_SPACING + ROW_GAP)
}

/// Constraints for the `k`-th row from the bottom.
pub fn row_anchor(item_height: f64, k: usize) -> Anchor {
    Anchor::pinned(ROW_MARGIN, None, bottom_offset(item_height, k), Some(item_height))
}

/// Constraints for `count` rows, indexed by input position.
pub fn stack_anchors(count: usize, item_height: f64) -> Vec<Anchor> {
    (0..count).map(|k| row_anchor(item_height, k)).collect()
}

/// Resolve the frames of `count` rows inside `container`, indexed by input position.
pub fn stack_frames(count: usize, item_height: f64, container: &Rect) -> Vec<Rect> {
    stack_anchors(count, item_height)
        .iter()
        .map(|anchor| anchor.frame_in(container))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_bottom_offsets() {
        assert!(close(bottom_offset(45.0, 0), -5.0));
        assert!(close(bottom_offset(45.0, 1), -56.75));
        assert!(close(bottom_offset(45.0, 2), -108.5));

        // The gap applies even with a zero height.
        assert!(close(bottom_offset(0.0, 3), -5.0));
    }

    #[test]
    fn test_row_anchor() {
        let anchor = row_anchor(45.0, 1);

        assert_eq!(anchor.left, 10.0);
        assert_eq!(anchor.right, -10.0);
        assert_eq!(anchor.top, None);
        assert_eq!(anchor.height, Some(45.0));
        assert!(close(anchor.bottom, -56.75));
    }

    #[test]
    fn test_stack_frames() {
        let container = Rect::new(0.0, 0.0, 320.0, 480.0);
        let frames = stack_frames(3, 45.0, &container);

        assert_eq!(frames.len(), 3);
        assert!(close(frames[0].bottom(), 475.0));
        assert!(close(frames[1].bottom(), 423.25));
        assert!(close(frames[2].bottom(), 371.5));

        for frame in frames.iter() {
            assert_eq!(frame.x, 10.0);
            assert_eq!(frame.width, 300.0);
            assert!(close(frame.height, 45.0));
        }
    }

    #[test]
    fn test_first_row_lowest() {
        let mut rng = rand::thread_rng();
        let container = Rect::new(0.0, 0.0, 375.0, 667.0);

        for _ in 0..50 {
            let count = rng.gen_range(1..12);
            let height = rng.gen_range(1.0..80.0);
            let frames = stack_frames(count, height, &container);

            assert_eq!(frames.len(), count);

            // Rows move strictly upwards and never overlap.
            for pair in frames.windows(2) {
                assert!(pair[1].bottom() < pair[0].bottom());
                assert!(pair[1].bottom() <= pair[0].top());
            }
        }
    }

    #[test]
    fn test_no_rows() {
        let container = Rect::new(0.0, 0.0, 320.0, 480.0);

        assert_eq!(stack_anchors(0, 45.0).is_empty(), true);
        assert_eq!(stack_frames(0, 45.0, &container).is_empty(), true);
    }
}
