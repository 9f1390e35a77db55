//! # Action sheet
//!
//! ## Overview
//!
//! [ActionSheet] is a single-use presentation session. It is built from one of the three
//! [SheetInput] shapes, shown once with [ActionSheet::show], and ends after the first row tap
//! (or an explicit [ActionSheet::dismiss]) once the backdrop has faded out.
//!
//! ```text
//! Idle --show--> Presenting --fade in done--> Active
//!                    |                          |
//!                    +-----------tap------------+--> Dismissing --fade out done--> Dismissed
//! ```
//!
//! Rows accept taps as soon as the sheet is shown; the fade-in does not need to finish first.
//! The selection handler runs at most once: taps that arrive while the sheet is already
//! dismissing are ignored.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Instant;
//!
//! use actionsheet::geometry::Rect;
//! use actionsheet::sheet::{ActionSheet, Phase, Presenter};
//! use actionsheet::animation::FADE_DURATION;
//!
//! let picked = Rc::new(Cell::new(None));
//! let mut sheet: ActionSheet = ActionSheet::from_labels(["Camera", "Library"]);
//!
//! let slot = picked.clone();
//! sheet.on_select(move |idx| slot.set(Some(idx)));
//!
//! let now = Instant::now();
//! let window = Rect::new(0.0, 0.0, 320.0, 480.0);
//! sheet.show(&Presenter::fullscreen(window), now).unwrap();
//!
//! assert_eq!(sheet.tap(1, now), Some(1));
//! assert_eq!(picked.get(), Some(1));
//!
//! sheet.tick(now + FADE_DURATION);
//! assert_eq!(sheet.phase(), Phase::Dismissed);
//! ```
use std::fmt;
use std::time::Instant;

use log::{debug, trace};
use serde::{Deserialize, Deserializer};

use crate::animation::{Fade, FADE_DURATION};
use crate::config::{BackdropHost, SheetConfig};
use crate::errors::{SheetError, SheetResult};
use crate::geometry::{Rect, Size};
use crate::item::ActionItem;
use crate::layout;
use crate::row::{build_rows, NoCustomView, Row};
use crate::style::Color;

/// The ways an action sheet can be constructed.
#[derive(Debug)]
pub enum SheetInput<V> {
    /// Plain labels, each turned into a default-styled item.
    Labels(Vec<String>),

    /// Styled items.
    Items(Vec<ActionItem>),

    /// Pre-built row views.
    Views(Vec<V>),
}

impl<V> SheetInput<V> {
    fn into_rows(self, highlighted: Color, bounds: Size) -> Vec<Row<V>> {
        match self {
            SheetInput::Labels(labels) => {
                let items: Vec<ActionItem> = labels.into_iter().map(ActionItem::new).collect();

                build_rows(&items, highlighted, bounds)
            },
            SheetInput::Items(items) => build_rows(&items, highlighted, bounds),
            SheetInput::Views(views) => {
                views.into_iter().enumerate().map(|(i, v)| Row::custom(v, i)).collect()
            },
        }
    }
}

/// Where the sheet is in its lifecycle.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Phase {
    /// Constructed but not yet shown.
    Idle,

    /// Shown, with the backdrop fading in.
    Presenting,

    /// Shown, with the backdrop at full opacity.
    Active,

    /// A row was tapped and the backdrop is fading out.
    Dismissing,

    /// Torn down. The sheet cannot be shown again.
    Dismissed,
}

impl Phase {
    /// Whether rows currently accept taps.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Phase::Presenting | Phase::Active)
    }
}

/// The screen a sheet is shown from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presenter {
    /// Bounds of the presenting screen's content.
    pub screen: Rect,

    /// Bounds of the whole window, including any chrome around the screen.
    pub window: Rect,
}

impl Presenter {
    /// Describe a presenting screen inside a larger window.
    pub fn new(screen: Rect, window: Rect) -> Self {
        Presenter { screen, window }
    }

    /// Describe a presenting screen that fills its window.
    pub fn fullscreen(window: Rect) -> Self {
        Presenter { screen: window, window }
    }
}

/// The translucent layer that dims content behind the sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct Backdrop {
    frame: Rect,
    color: Color,
    alpha: f64,
    host: BackdropHost,
    fade: Fade,
}

impl Backdrop {
    fn new(frame: Rect, host: BackdropHost, fade: Fade) -> Self {
        Backdrop { frame, color: Color::BLACK, alpha: 0.0, host, fade }
    }

    fn fade_to(&mut self, to: f64, now: Instant) {
        let from = self.fade.value_at(now);

        self.alpha = from;
        self.fade = Fade::new(from, to, now, FADE_DURATION);
    }

    /// Advance the fade, returning whether it has finished.
    fn step(&mut self, now: Instant) -> bool {
        self.alpha = self.fade.value_at(now);

        self.fade.is_finished(now)
    }

    /// The area covered by the backdrop.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The dimming color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Current opacity.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Where the backdrop was inserted.
    pub fn host(&self) -> BackdropHost {
        self.host
    }
}

/// A top-level presentation surface that hosts the backdrop above all other content.
///
/// Each sheet owns its own layer for the duration of one presentation.
#[derive(Debug, PartialEq)]
pub struct OverlayLayer {
    frame: Rect,
}

impl OverlayLayer {
    fn new(frame: Rect) -> Self {
        debug!("Created overlay layer covering {frame:?}");

        OverlayLayer { frame }
    }

    /// The area covered by the layer.
    pub fn frame(&self) -> Rect {
        self.frame
    }
}

impl Drop for OverlayLayer {
    fn drop(&mut self) {
        debug!("Released overlay layer");
    }
}

/// Callback receiving the tag of the selected row.
pub type SelectHandler = Box<dyn FnOnce(usize)>;

/// A transient action sheet presentation.
pub struct ActionSheet<V = NoCustomView> {
    config: SheetConfig,
    rows: Vec<Row<V>>,
    frames: Vec<Rect>,
    handler: Option<SelectHandler>,
    phase: Phase,
    backdrop: Option<Backdrop>,
    overlay: Option<OverlayLayer>,
    presented: bool,
}

impl<V> ActionSheet<V> {
    /// Create a sheet with the default configuration.
    pub fn new(input: SheetInput<V>) -> Self {
        let config = SheetConfig::default();
        let rows = input.into_rows(config.highlighted_color, Size::ZERO);

        ActionSheet {
            config,
            rows,
            frames: Vec::new(),
            handler: None,
            phase: Phase::Idle,
            backdrop: None,
            overlay: None,
            presented: false,
        }
    }

    /// Create a sheet with one default-styled row per label.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = labels.into_iter().map(Into::into).collect();

        ActionSheet::new(SheetInput::Labels(labels))
    }

    /// Create a sheet with one row per styled item.
    pub fn from_items(items: Vec<ActionItem>) -> Self {
        ActionSheet::new(SheetInput::Items(items))
    }

    /// Create a sheet from pre-built row views.
    ///
    /// Each view reports its position in `views` when tapped.
    pub fn from_views(views: Vec<V>) -> Self {
        ActionSheet::new(SheetInput::Views(views))
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SheetConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the background for rows without their own color.
    pub fn background_color(mut self, color: Color) -> Self {
        self.config.background_color = color;
        self
    }

    /// Set the height of every row.
    pub fn item_height(mut self, height: f64) -> Self {
        self.config.item_height = height;
        self
    }

    /// Set the fill shown behind a pressed row.
    pub fn highlighted_color(mut self, color: Color) -> Self {
        self.config.highlighted_color = color;
        self
    }

    /// Set the opacity the backdrop fades in to.
    pub fn backdrop_alpha(mut self, alpha: f64) -> Self {
        self.config.backdrop_alpha = alpha;
        self
    }

    /// Choose where the backdrop is hosted.
    pub fn backdrop_host(mut self, host: BackdropHost) -> Self {
        self.config.backdrop_host = host;
        self
    }

    /// Set the callback that receives the selected row's tag.
    ///
    /// Replaces any previously set callback.
    pub fn on_select<F>(&mut self, handler: F)
    where
        F: FnOnce(usize) + 'static,
    {
        self.handler = Some(Box::new(handler));
    }

    /// The current configuration.
    pub fn get_config(&self) -> &SheetConfig {
        &self.config
    }

    /// The rows, in input order.
    pub fn rows(&self) -> &[Row<V>] {
        self.rows.as_slice()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the sheet has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows paired with their resolved frames, in input order.
    ///
    /// Frames are only known once the sheet has been shown; before that this is empty.
    pub fn laid_out_rows(&self) -> impl Iterator<Item = (&Row<V>, Rect)> {
        self.rows.iter().zip(self.frames.iter().copied())
    }

    /// The position of the row whose frame contains the point `(x, y)`.
    ///
    /// Rows have no frames until the sheet is shown, so this is always `None` before then.
    pub fn row_at(&self, x: f64, y: f64) -> Option<usize> {
        self.frames.iter().position(|frame| frame.contains(x, y))
    }

    /// Where the sheet is in its lifecycle.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The backdrop, while it is part of the visible hierarchy.
    pub fn backdrop(&self) -> Option<&Backdrop> {
        self.backdrop.as_ref()
    }

    /// The overlay layer, while one is allocated.
    pub fn overlay(&self) -> Option<&OverlayLayer> {
        self.overlay.as_ref()
    }

    /// Whether the sheet's rows are currently presented.
    pub fn is_presented(&self) -> bool {
        self.presented
    }

    /// Present the sheet from `presenter`.
    ///
    /// This inserts a transparent backdrop, starts fading it in, and lays out the rows using
    /// the current configuration. Rows accept taps immediately.
    pub fn show(&mut self, presenter: &Presenter, now: Instant) -> SheetResult<()> {
        match self.phase {
            Phase::Idle => {},
            Phase::Dismissed => return Err(SheetError::Spent),
            Phase::Presenting | Phase::Active | Phase::Dismissing => {
                return Err(SheetError::AlreadyShown);
            },
        }

        self.config.validate()?;

        let bounds = presenter.window.size();
        let highlighted = self.config.highlighted_color;

        for button in self.rows.iter_mut().filter_map(Row::button_mut) {
            button.refresh_highlight(highlighted, bounds);
        }

        let height = self.config.item_height;
        self.frames = layout::stack_frames(self.rows.len(), height, &presenter.window);

        let host = self.config.backdrop_host;
        let frame = match host {
            BackdropHost::Screen => presenter.screen,
            BackdropHost::Overlay => {
                let overlay = OverlayLayer::new(presenter.window);
                let frame = overlay.frame();

                self.overlay = Some(overlay);

                frame
            },
        };

        let fade = Fade::new(0.0, self.config.backdrop_alpha, now, FADE_DURATION);
        self.backdrop = Some(Backdrop::new(frame, host, fade));
        self.presented = true;
        self.phase = Phase::Presenting;

        debug!("Showing action sheet with {} rows, backdrop in {:?}", self.rows.len(), host);

        Ok(())
    }

    /// Advance animations to `now`, returning the resulting phase.
    pub fn tick(&mut self, now: Instant) -> Phase {
        match self.phase {
            Phase::Presenting => {
                if self.backdrop.as_mut().map_or(true, |b| b.step(now)) {
                    debug!("Action sheet fully presented");
                    self.phase = Phase::Active;
                }
            },
            Phase::Dismissing => {
                if self.backdrop.as_mut().map_or(true, |b| b.step(now)) {
                    self.finish_dismissal();
                }
            },
            Phase::Idle | Phase::Active | Phase::Dismissed => {},
        }

        if let Some(b) = &self.backdrop {
            trace!("Backdrop alpha at {:.3}", b.alpha());
        }

        self.phase
    }

    /// Tap the row at `position` (in input order).
    ///
    /// The selection handler, if set, receives the row's tag, and the sheet starts dismissing.
    /// Returns the tag, or `None` if the sheet is not accepting taps or there is no such row.
    pub fn tap(&mut self, position: usize, now: Instant) -> Option<usize> {
        if !self.phase.is_interactive() {
            debug!("Ignoring tap on row {position} while {:?}", self.phase);
            return None;
        }

        let tag = self.rows.get(position)?.tag();

        debug!("Selected row {position} with tag {tag}");

        if let Some(handler) = self.handler.take() {
            handler(tag);
        }

        self.begin_dismissal(now);

        return Some(tag);
    }

    /// Dismiss the sheet without selecting anything.
    ///
    /// Calling this more than once has no further effect.
    pub fn dismiss(&mut self, now: Instant) {
        match self.phase {
            Phase::Idle => self.finish_dismissal(),
            Phase::Presenting | Phase::Active => self.begin_dismissal(now),
            Phase::Dismissing | Phase::Dismissed => {},
        }
    }

    /// Tear the sheet down: remove the backdrop, release the overlay layer, and stop presenting.
    ///
    /// This normally runs when the dismissal fade finishes. It is safe to call repeatedly.
    pub fn finish_dismissal(&mut self) {
        if self.backdrop.take().is_some() {
            debug!("Removed action sheet backdrop");
        }

        self.overlay = None;
        self.presented = false;
        self.phase = Phase::Dismissed;
    }

    fn begin_dismissal(&mut self, now: Instant) {
        match self.backdrop.as_mut() {
            Some(backdrop) => {
                backdrop.fade_to(0.0, now);
                self.phase = Phase::Dismissing;
            },
            None => self.finish_dismissal(),
        }
    }
}

impl<V> fmt::Debug for ActionSheet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionSheet")
            .field("config", &self.config)
            .field("rows", &self.rows.len())
            .field("phase", &self.phase)
            .field("backdrop", &self.backdrop)
            .field("overlay", &self.overlay)
            .field("presented", &self.presented)
            .finish()
    }
}

/// Action sheets hold callbacks and live views, so they cannot be restored from serialized
/// state. Attempting to do so always panics.
impl<'de, V> Deserialize<'de> for ActionSheet<V> {
    fn deserialize<D>(_: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        panic!("ActionSheet cannot be restored from serialized state");
    }
}
