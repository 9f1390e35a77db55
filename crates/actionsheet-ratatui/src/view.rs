//! # Sheet view
//!
//! [ActionSheetView] draws an [ActionSheetState] on top of whatever has already been rendered
//! into the buffer. The backdrop dims the content underneath, and each row is drawn as a
//! rounded box filled with its background color, or with the highlight color while it is
//! pressed or focused.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use actionsheet::{
    row::{Row, RowButton, RowContent},
    style::Color as SheetColor,
};

use crate::{
    backdrop::BackdropView,
    metrics::CellMetrics,
    state::ActionSheetState,
    util::term_color,
    RowWidget,
};

/// Placeholder drawn for items whose icon is a solid color.
const SWATCH: &str = "■";

/// Widget for drawing an action sheet.
pub struct ActionSheetView {
    borders: bool,
}

impl Default for ActionSheetView {
    fn default() -> Self {
        ActionSheetView { borders: true }
    }
}

impl ActionSheetView {
    /// Create a new view with rounded row borders.
    pub fn new() -> Self {
        ActionSheetView::default()
    }

    /// Control whether rows get a rounded border when they are tall enough for one.
    pub fn borders(mut self, borders: bool) -> Self {
        self.borders = borders;
        self
    }

    fn render_container(&self, area: Rect, fill: SheetColor, buf: &mut Buffer) -> Rect {
        let bg = term_color(fill);

        Clear.render(area, buf);

        if !self.borders || area.height < 3 || area.width < 3 {
            buf.set_style(area, Style::new().bg(bg));
            return area;
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(bg));
        let inner = block.inner(area);

        block.render(area, buf);
        buf.set_style(inner, Style::new().bg(bg));

        return inner;
    }
}

fn render_button(button: &RowButton, metrics: &CellMetrics, area: Rect, buf: &mut Buffer) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let image_insets = button.image_insets();
    let title_insets = button.title_insets();

    let lpad = metrics.columns(image_insets.left);
    let rpad = metrics.columns(title_insets.right);
    let width = area.width.saturating_sub(lpad.saturating_add(rpad));

    let mut title_style = Style::new().fg(term_color(button.title_color()));

    if button.font().bold {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let title = Span::styled(button.title(), title_style);
    let mut spans = vec![];

    if let Some(image) = button.image() {
        let icon = match (image.symbol_text(), image.fill_color()) {
            (Some(sym), _) => Some(Span::raw(sym)),
            (None, Some(color)) => Some(Span::styled(SWATCH, Style::new().fg(term_color(color)))),
            (None, None) => None,
        };

        if let Some(icon) = icon {
            let gap = metrics.columns(title_insets.left);
            let needed = icon.content.width() + gap as usize + button.title().width();

            // Drop the icon before truncating the title.
            if needed <= width as usize {
                spans.push(icon);
                spans.push(Span::raw(" ".repeat(gap as usize)));
            }
        }
    }

    spans.push(title);

    let line = Rect::new(area.x.saturating_add(lpad), area.y + area.height / 2, width, 1);

    Line::from(spans).centered().render(line, buf);
}

fn row_fill<V>(row: &Row<V>, highlighted: bool, state: &ActionSheetState) -> SheetColor {
    let config = state.sheet().get_config();

    if highlighted {
        return row
            .button()
            .and_then(|b| b.highlight().fill_color())
            .unwrap_or(config.highlighted_color);
    }

    row.background().unwrap_or(config.background_color)
}

impl StatefulWidget for ActionSheetView {
    type State = ActionSheetState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let sheet = state.sheet();

        if let Some(backdrop) = sheet.backdrop() {
            let dim = state.backdrop_area().intersection(area);

            BackdropView::new(backdrop.color(), backdrop.alpha()).render(dim, buf);
        }

        if !sheet.phase().is_interactive() {
            return;
        }

        let metrics = state.cell_metrics();

        for (pos, (row, _)) in sheet.laid_out_rows().enumerate() {
            let Some(cells) = state.row_area(pos) else {
                continue;
            };

            let cells = cells.intersection(area);

            if cells.is_empty() {
                continue;
            }

            let highlighted = state.is_highlighted(pos);
            let fill = row_fill(row, highlighted, state);
            let inner = self.render_container(cells, fill, buf);

            match row.content() {
                RowContent::Button(button) => render_button(button, &metrics, inner, buf),
                RowContent::Custom { view, .. } => {
                    RowWidget::render(&**view, inner, buf, highlighted);
                },
            }
        }
    }
}
