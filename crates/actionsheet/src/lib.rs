//! # actionsheet
//!
//! ## Overview
//!
//! This crate models an action sheet: a vertical stack of tappable rows shown above a dimmed
//! backdrop, which reports the tag of the tapped row to a caller-supplied handler and then
//! dismisses itself.
//!
//! It contains no drawing code. The [sheet] module drives the presentation lifecycle, while
//! [layout] and [row] describe where each row goes and what it looks like, so that a host
//! toolkit can turn the result into pixels or terminal cells.
//!
//! ## Examples
//!
//! For drawing a sheet in the terminal, check out [actionsheet-ratatui].
//!
//! [actionsheet-ratatui]: https://docs.rs/actionsheet-ratatui/latest/actionsheet_ratatui/

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

pub mod animation;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod item;
pub mod layout;
pub mod row;
pub mod sheet;
pub mod style;

pub use self::config::{BackdropHost, SheetConfig};
pub use self::errors::{SheetError, SheetResult};
pub use self::item::ActionItem;
pub use self::sheet::{ActionSheet, Phase, Presenter, SheetInput};
