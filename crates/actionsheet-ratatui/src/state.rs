//! # Sheet state
//!
//! ## Overview
//!
//! [ActionSheetState] wraps an [ActionSheet] with everything the terminal needs on top of it:
//! the cell areas rows were laid out into, which row is being pressed, and which row has
//! keyboard focus.
//!
//! A mouse press highlights the row under the pointer. Releasing over the same row taps it,
//! while releasing anywhere else cancels the press. From the keyboard, the arrow keys move focus
//! between rows, `Enter` or `Space` taps the focused row, and `Esc` dismisses the sheet without
//! a selection.
use std::time::Instant;

use crossterm::event::{
    Event,
    KeyCode,
    KeyEvent,
    KeyEventKind,
    MouseButton,
    MouseEvent,
    MouseEventKind,
};
use log::debug;
use ratatui::layout::{Position, Rect};

use actionsheet::{
    sheet::{ActionSheet, Phase, Presenter},
    ActionItem,
    SheetResult,
};

use crate::{metrics::CellMetrics, RowWidget};

/// An action sheet whose custom rows are terminal widgets.
pub type TermActionSheet = ActionSheet<Box<dyn RowWidget>>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Press {
    row: usize,
    inside: bool,
}

/// Persistent state for rendering [ActionSheetView](crate::view::ActionSheetView).
pub struct ActionSheetState {
    sheet: TermActionSheet,
    metrics: CellMetrics,
    areas: Vec<Rect>,
    backdrop_area: Rect,
    pressed: Option<Press>,
    focused: Option<usize>,
}

impl ActionSheetState {
    /// Wrap a configured sheet.
    pub fn new(sheet: TermActionSheet) -> Self {
        ActionSheetState {
            sheet,
            metrics: CellMetrics::default(),
            areas: Vec::new(),
            backdrop_area: Rect::default(),
            pressed: None,
            focused: None,
        }
    }

    /// Create state for a sheet with one default-styled row per label.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ActionSheetState::new(ActionSheet::from_labels(labels))
    }

    /// Create state for a sheet with one row per styled item.
    pub fn from_items(items: Vec<ActionItem>) -> Self {
        ActionSheetState::new(ActionSheet::from_items(items))
    }

    /// Create state for a sheet made of custom row widgets.
    pub fn from_views(views: Vec<Box<dyn RowWidget>>) -> Self {
        ActionSheetState::new(ActionSheet::from_views(views))
    }

    /// Set how layout points map onto terminal cells.
    pub fn metrics(mut self, metrics: CellMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Set the callback that receives the selected row's tag.
    pub fn on_select<F>(&mut self, handler: F)
    where
        F: FnOnce(usize) + 'static,
    {
        self.sheet.on_select(handler);
    }

    /// How layout points map onto terminal cells.
    pub fn cell_metrics(&self) -> CellMetrics {
        self.metrics
    }

    /// The wrapped sheet.
    pub fn sheet(&self) -> &TermActionSheet {
        &self.sheet
    }

    /// Where the sheet is in its lifecycle.
    pub fn phase(&self) -> Phase {
        self.sheet.phase()
    }

    /// Show the sheet from the `screen` area of a terminal whose full area is `window`.
    ///
    /// Rows are laid out against `window`. The backdrop covers either `screen` or `window`,
    /// depending on the sheet's [BackdropHost](actionsheet::BackdropHost).
    pub fn show(&mut self, screen: Rect, window: Rect, now: Instant) -> SheetResult<()> {
        let metrics = self.metrics;
        let presenter = Presenter::new(metrics.to_points(screen), metrics.to_points(window));

        self.sheet.show(&presenter, now)?;

        self.areas = self
            .sheet
            .laid_out_rows()
            .map(|(_, frame)| metrics.to_cells(&frame, window))
            .collect();

        self.backdrop_area = self
            .sheet
            .backdrop()
            .map(|b| metrics.to_cells(&b.frame(), window))
            .unwrap_or_default();

        debug!("Laid out {} rows in {:?}", self.areas.len(), window);

        Ok(())
    }

    /// Advance animations to `now`.
    pub fn tick(&mut self, now: Instant) -> Phase {
        let phase = self.sheet.tick(now);

        if !phase.is_interactive() {
            self.pressed = None;
            self.focused = None;
        }

        return phase;
    }

    /// Dismiss the sheet without selecting anything.
    pub fn dismiss(&mut self, now: Instant) {
        self.pressed = None;
        self.focused = None;
        self.sheet.dismiss(now);
    }

    /// The cells covered by the row at `position`, once shown.
    pub fn row_area(&self, position: usize) -> Option<Rect> {
        self.areas.get(position).copied()
    }

    /// The cells covered by the backdrop, once shown.
    pub fn backdrop_area(&self) -> Rect {
        self.backdrop_area
    }

    /// The row containing the cell at `(x, y)`.
    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        self.areas.iter().position(|a| a.contains(Position::new(x, y)))
    }

    /// The row with keyboard focus.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Whether the row at `position` should be drawn in its highlighted state.
    ///
    /// A row is highlighted while it is pressed with the pointer over it, or while it has
    /// keyboard focus and nothing is being pressed.
    pub fn is_highlighted(&self, position: usize) -> bool {
        match self.pressed {
            Some(press) => press.inside && press.row == position,
            None => self.focused == Some(position),
        }
    }

    /// Process a terminal event, returning the selected row's tag if it caused a tap.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> Option<usize> {
        if !self.sheet.phase().is_interactive() {
            return None;
        }

        match event {
            Event::Mouse(mouse) => self.handle_mouse(mouse, now),
            Event::Key(key) => self.handle_key(key, now),
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, now: Instant) -> Option<usize> {
        let hit = self.row_at(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = hit.map(|row| Press { row, inside: true });

                None
            },
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(press) = self.pressed.as_mut() {
                    press.inside = hit == Some(press.row);
                }

                None
            },
            MouseEventKind::Up(MouseButton::Left) => {
                let press = self.pressed.take()?;

                if hit == Some(press.row) {
                    self.tap(press.row, now)
                } else {
                    debug!("Cancelled press on row {}", press.row);
                    None
                }
            },
            _ => None,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> Option<usize> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match key.code {
            // The first row sits at the bottom, so moving up goes to later rows.
            KeyCode::Up => self.move_focus(true),
            KeyCode::Down => self.move_focus(false),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let row = self.focused?;

                return self.tap(row, now);
            },
            KeyCode::Esc => self.dismiss(now),
            _ => {},
        }

        None
    }

    fn move_focus(&mut self, up: bool) {
        let n = self.sheet.len();

        if n == 0 {
            return;
        }

        self.focused = Some(match self.focused {
            None => 0,
            Some(i) if up => (i + 1).min(n - 1),
            Some(i) => i.saturating_sub(1),
        });
    }

    fn tap(&mut self, row: usize, now: Instant) -> Option<usize> {
        self.pressed = None;
        self.focused = None;

        self.sheet.tap(row, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crossterm::event::KeyModifiers;
    use rand::Rng;

    use actionsheet::animation::FADE_DURATION;
    use actionsheet::BackdropHost;

    fn window() -> Rect {
        Rect::new(0, 0, 40, 24)
    }

    fn shown(labels: &[&str]) -> (ActionSheetState, Rc<RefCell<Vec<usize>>>, Instant) {
        let now = Instant::now();
        let calls = Rc::new(RefCell::new(vec![]));
        let slot = calls.clone();

        let mut state = ActionSheetState::from_labels(labels.iter().copied());
        state.on_select(move |tag| slot.borrow_mut().push(tag));
        state.show(window(), window(), now).unwrap();

        (state, calls, now)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_row_areas() {
        let (state, _, _) = shown(&["one", "two", "three"]);

        assert_eq!(state.row_area(0), Some(Rect::new(2, 21, 36, 3)));
        assert_eq!(state.row_area(1), Some(Rect::new(2, 17, 36, 3)));
        assert_eq!(state.row_area(2), Some(Rect::new(2, 14, 36, 3)));
        assert_eq!(state.row_area(3), None);
        assert_eq!(state.backdrop_area(), window());

        assert_eq!(state.row_at(10, 22), Some(0));
        assert_eq!(state.row_at(10, 18), Some(1));
        assert_eq!(state.row_at(10, 14), Some(2));
        assert_eq!(state.row_at(10, 20), None);
        assert_eq!(state.row_at(0, 22), None);
    }

    #[test]
    fn test_click_selects() {
        let (mut state, calls, now) = shown(&["one", "two"]);

        let down = mouse(MouseEventKind::Down(MouseButton::Left), 10, 18);
        assert_eq!(state.handle_event(&down, now), None);
        assert_eq!(state.is_highlighted(1), true);
        assert_eq!(state.is_highlighted(0), false);

        let up = mouse(MouseEventKind::Up(MouseButton::Left), 12, 19);
        assert_eq!(state.handle_event(&up, now), Some(1));
        assert_eq!(*calls.borrow(), vec![1]);
        assert_eq!(state.phase(), Phase::Dismissing);

        // Later clicks are ignored while the sheet goes away.
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 10, 22);
        let up = mouse(MouseEventKind::Up(MouseButton::Left), 10, 22);
        assert_eq!(state.handle_event(&down, now), None);
        assert_eq!(state.handle_event(&up, now), None);
        assert_eq!(*calls.borrow(), vec![1]);

        assert_eq!(state.tick(now + FADE_DURATION), Phase::Dismissed);
    }

    #[test]
    fn test_release_elsewhere_cancels() {
        let (mut state, calls, now) = shown(&["one", "two"]);

        state.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 22), now);

        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 10, 18);
        state.handle_event(&drag, now);
        assert_eq!(state.is_highlighted(0), false);
        assert_eq!(state.is_highlighted(1), false);

        let up = mouse(MouseEventKind::Up(MouseButton::Left), 10, 18);
        assert_eq!(state.handle_event(&up, now), None);
        assert_eq!(calls.borrow().is_empty(), true);
        assert_eq!(state.phase(), Phase::Presenting);
    }

    #[test]
    fn test_drag_back_inside() {
        let (mut state, calls, now) = shown(&["one"]);

        state.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 22), now);
        state.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 10, 2), now);
        assert_eq!(state.is_highlighted(0), false);

        state.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 5, 23), now);
        assert_eq!(state.is_highlighted(0), true);

        let up = mouse(MouseEventKind::Up(MouseButton::Left), 5, 23);
        assert_eq!(state.handle_event(&up, now), Some(0));
        assert_eq!(*calls.borrow(), vec![0]);
    }

    #[test]
    fn test_random_clicks() {
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let (mut state, calls, now) = shown(&["one", "two", "three"]);
            let x = rng.gen_range(0..40);
            let y = rng.gen_range(0..24);
            let expected = state.row_at(x, y);

            state.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), x, y), now);
            let tag = state.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), x, y), now);

            assert_eq!(tag, expected);

            match expected {
                Some(row) => assert_eq!(*calls.borrow(), vec![row]),
                None => assert_eq!(calls.borrow().is_empty(), true),
            }
        }
    }

    #[test]
    fn test_click_outside_rows() {
        let (mut state, calls, now) = shown(&["one"]);

        state.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 2), now);
        let up = mouse(MouseEventKind::Up(MouseButton::Left), 10, 2);

        assert_eq!(state.handle_event(&up, now), None);
        assert_eq!(calls.borrow().is_empty(), true);
    }

    #[test]
    fn test_keyboard_focus() {
        let (mut state, calls, now) = shown(&["one", "two", "three"]);

        // Nothing is focused until an arrow key is pressed.
        assert_eq!(state.handle_event(&key(KeyCode::Enter), now), None);

        state.handle_event(&key(KeyCode::Up), now);
        assert_eq!(state.focused(), Some(0));

        state.handle_event(&key(KeyCode::Up), now);
        state.handle_event(&key(KeyCode::Up), now);
        state.handle_event(&key(KeyCode::Up), now);
        assert_eq!(state.focused(), Some(2));
        assert_eq!(state.is_highlighted(2), true);

        state.handle_event(&key(KeyCode::Down), now);
        assert_eq!(state.focused(), Some(1));

        assert_eq!(state.handle_event(&key(KeyCode::Char(' ')), now), Some(1));
        assert_eq!(*calls.borrow(), vec![1]);
        assert_eq!(state.focused(), None);
    }

    #[test]
    fn test_escape_dismisses() {
        let (mut state, calls, now) = shown(&["one"]);

        assert_eq!(state.handle_event(&key(KeyCode::Esc), now), None);
        assert_eq!(state.phase(), Phase::Dismissing);
        assert_eq!(state.tick(now + FADE_DURATION), Phase::Dismissed);
        assert_eq!(calls.borrow().is_empty(), true);
    }

    #[test]
    fn test_screen_backdrop() {
        let now = Instant::now();
        let screen = Rect::new(0, 1, 40, 22);
        let sheet = ActionSheet::from_labels(["one"]).backdrop_host(BackdropHost::Screen);
        let mut state = ActionSheetState::new(sheet);

        state.show(screen, window(), now).unwrap();
        assert_eq!(state.backdrop_area(), screen);
        assert_eq!(state.row_area(0), Some(Rect::new(2, 21, 36, 3)));
    }

    #[test]
    fn test_custom_metrics() {
        let now = Instant::now();
        let mut state = ActionSheetState::from_labels(["one"]).metrics(CellMetrics::new(10.0, 45.0));

        state.show(window(), window(), now).unwrap();

        // Rows are a single cell tall when a cell is as tall as an item.
        let area = state.row_area(0).unwrap();
        assert_eq!(area.height, 1);
        assert_eq!(area.x, 1);
    }
}
