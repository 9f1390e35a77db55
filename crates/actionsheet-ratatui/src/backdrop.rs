//! # Backdrop
//!
//! The backdrop dims whatever has already been drawn underneath it by blending every cell's
//! colors towards the backdrop color.
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use actionsheet::style::Color as SheetColor;

use crate::util::{rgb_of, term_color};

/// Widget that dims the cells already drawn in its area.
pub struct BackdropView {
    color: SheetColor,
    alpha: f64,
}

impl BackdropView {
    /// Create a backdrop that blends `alpha` of `color` into each cell.
    pub fn new(color: SheetColor, alpha: f64) -> Self {
        BackdropView { color, alpha }
    }
}

impl Widget for BackdropView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.alpha <= 0.0 {
            return;
        }

        let area = area.intersection(buf.area);

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    // Unknown defaults are assumed to be light text on a dark background.
                    let fg = rgb_of(cell.fg, SheetColor::WHITE).mix(self.color, self.alpha);
                    let bg = rgb_of(cell.bg, SheetColor::BLACK).mix(self.color, self.alpha);

                    cell.set_fg(term_color(fg));
                    cell.set_bg(term_color(bg));
                }
            }
        }
    }
}
