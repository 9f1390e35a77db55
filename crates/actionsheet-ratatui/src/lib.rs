//! # actionsheet-ratatui
//!
//! ## Overview
//!
//! This crate draws [actionsheet] sheets in the terminal using [ratatui], and turns [crossterm]
//! mouse and key events into row presses and taps.
//!
//! ## Example
//!
//! The following example shows a sheet over an otherwise empty screen and prints the position
//! of the row that the user picked. For a more complete program, see `examples/picker.rs` in this crate.
//!
//! ```no_run
//! use std::io::stdout;
//! use std::time::{Duration, Instant};
//!
//! use crossterm::event::{poll, read, EnableMouseCapture};
//! use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
//!
//! use actionsheet_ratatui::{ActionSheetState, ActionSheetView};
//! use actionsheet_ratatui::actionsheet::Phase;
//!
//! fn main() -> Result<(), std::io::Error> {
//!     crossterm::terminal::enable_raw_mode()?;
//!     crossterm::execute!(stdout(), EnableMouseCapture)?;
//!
//!     let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
//!     let mut sheet = ActionSheetState::from_labels(["Camera", "Library", "Cancel"]);
//!     sheet.on_select(|idx| println!("selected {idx}"));
//!
//!     let size = terminal.size()?;
//!     let area = Rect::new(0, 0, size.width, size.height);
//!     sheet.show(area, area, Instant::now()).expect("fresh sheet");
//!
//!     while sheet.tick(Instant::now()) != Phase::Dismissed {
//!         terminal.draw(|f| {
//!             f.render_stateful_widget(ActionSheetView::new(), f.area(), &mut sheet)
//!         })?;
//!
//!         if poll(Duration::from_millis(16))? {
//!             sheet.handle_event(&read()?, Instant::now());
//!         }
//!     }
//!
//!     crossterm::terminal::disable_raw_mode()
//! }
//! ```

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::bool_to_int_with_if)]
#![allow(clippy::field_reassign_with_default)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::match_like_matches_macro)]
#![allow(clippy::needless_return)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::type_complexity)]
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::Widget,
};

pub mod backdrop;
pub mod metrics;
pub mod state;
pub mod view;

mod util;

pub use actionsheet;

pub use self::metrics::CellMetrics;
pub use self::state::{ActionSheetState, TermActionSheet};
pub use self::view::ActionSheetView;

/// A caller-supplied view that can be used as a row.
pub trait RowWidget {
    /// Draw the row's contents into `area`.
    ///
    /// The row's rounded container and background have already been drawn; `highlighted` is set
    /// while the row is pressed or focused.
    fn render(&self, area: Rect, buf: &mut Buffer, highlighted: bool);
}

impl RowWidget for Line<'static> {
    fn render(&self, area: Rect, buf: &mut Buffer, _: bool) {
        if area.height == 0 {
            return;
        }

        let line = Rect::new(area.x, area.y + area.height / 2, area.width, 1);

        self.clone().centered().render(line, buf);
    }
}
