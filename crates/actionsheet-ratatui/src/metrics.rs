//! # Cell metrics
//!
//! Layout happens in points, while terminals only have whole cells. [CellMetrics] converts
//! between the two: it says how many points wide each column is and how many points tall each
//! row is.
use actionsheet::geometry::Rect as PointRect;
use ratatui::layout::Rect;

/// Default width of one terminal column, in points.
pub const DEFAULT_COLUMN_WIDTH: f64 = 5.0;

/// Default height of one terminal row, in points.
///
/// With the default item height of 45 points, this makes each sheet row three cells tall.
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;

/// Conversion factors between layout points and terminal cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMetrics {
    /// Points per terminal column.
    pub column_width: f64,

    /// Points per terminal row.
    pub row_height: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        CellMetrics { column_width: DEFAULT_COLUMN_WIDTH, row_height: DEFAULT_ROW_HEIGHT }
    }
}

impl CellMetrics {
    /// Create metrics with the given cell size in points.
    pub fn new(column_width: f64, row_height: f64) -> Self {
        CellMetrics { column_width, row_height }
    }

    /// Convert a cell area into points.
    pub fn to_points(&self, area: Rect) -> PointRect {
        PointRect::new(
            area.x as f64 * self.column_width,
            area.y as f64 * self.row_height,
            area.width as f64 * self.column_width,
            area.height as f64 * self.row_height,
        )
    }

    /// Convert a number of points into a whole number of columns.
    pub fn columns(&self, points: f64) -> u16 {
        round_cells(points / self.column_width)
    }

    /// Convert a rectangle in points into cells, rounding each edge to the nearest cell.
    ///
    /// The result is clipped to `bounds`.
    pub fn to_cells(&self, rect: &PointRect, bounds: Rect) -> Rect {
        let left = round_cells(rect.left() / self.column_width);
        let right = round_cells(rect.right() / self.column_width);
        let top = round_cells(rect.top() / self.row_height);
        let bottom = round_cells(rect.bottom() / self.row_height);

        let cells = Rect::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top));

        return cells.intersection(bounds);
    }
}

fn round_cells(v: f64) -> u16 {
    v.round().clamp(0.0, u16::MAX as f64) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_points() {
        let metrics = CellMetrics::default();
        let points = metrics.to_points(Rect::new(2, 1, 40, 24));

        assert_eq!(points, PointRect::new(10.0, 15.0, 200.0, 360.0));
    }

    #[test]
    fn test_to_cells_rounds_edges() {
        let metrics = CellMetrics::default();
        let bounds = Rect::new(0, 0, 40, 24);

        // The bottom row of a 24-line terminal: bottom edge at 355pt, top at 310pt.
        let rect = PointRect::new(10.0, 310.0, 180.0, 45.0);
        assert_eq!(metrics.to_cells(&rect, bounds), Rect::new(2, 21, 36, 3));

        // The next row up: bottom edge at 303.25pt.
        let rect = PointRect::new(10.0, 258.25, 180.0, 45.0);
        assert_eq!(metrics.to_cells(&rect, bounds), Rect::new(2, 17, 36, 3));
    }

    #[test]
    fn test_to_cells_clips() {
        let metrics = CellMetrics::default();
        let bounds = Rect::new(0, 0, 10, 5);
        let rect = PointRect::new(-20.0, -30.0, 100.0, 200.0);

        assert_eq!(metrics.to_cells(&rect, bounds), bounds);
    }

    #[test]
    fn test_columns() {
        let metrics = CellMetrics::new(8.0, 16.0);

        assert_eq!(metrics.columns(10.0), 1);
        assert_eq!(metrics.columns(15.0), 2);
        assert_eq!(metrics.columns(-4.0), 0);
    }
}
