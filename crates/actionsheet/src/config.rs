//! # Sheet configuration
//!
//! ## Overview
//!
//! [SheetConfig] holds the settings that can be changed before a sheet is shown. Every field
//! has a default, so a configuration file only needs to mention the values it overrides:
//!
//! ```
//! use actionsheet::config::{BackdropHost, SheetConfig};
//!
//! let config: SheetConfig = serde_json::from_str(r#"{"item_height": 60.0}"#).unwrap();
//!
//! assert_eq!(config.item_height, 60.0);
//! assert_eq!(config.backdrop_alpha, 0.5);
//! assert_eq!(config.backdrop_host, BackdropHost::Overlay);
//! ```
use serde::{Deserialize, Serialize};

use crate::errors::{SheetError, SheetResult};
use crate::style::Color;

/// Default height of each row, in points.
pub const DEFAULT_ITEM_HEIGHT: f64 = 45.0;

/// Default opacity of the backdrop once faded in.
pub const DEFAULT_BACKDROP_ALPHA: f64 = 0.5;

/// Where the dimming backdrop is inserted when the sheet is shown.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackdropHost {
    /// Inside the presenting screen, below any surrounding chrome.
    Screen,

    /// In a dedicated overlay layer above everything else in the window.
    #[default]
    Overlay,
}

/// Settings for an action sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Background for rows that do not supply their own color.
    pub background_color: Color,

    /// Height of every row, in points.
    pub item_height: f64,

    /// Fill shown behind a row while it is pressed.
    pub highlighted_color: Color,

    /// Opacity the backdrop fades in to.
    pub backdrop_alpha: f64,

    /// Where the backdrop is hosted.
    pub backdrop_host: BackdropHost,
}

impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfig {
            background_color: Color::WHITE,
            item_height: DEFAULT_ITEM_HEIGHT,
            highlighted_color: Color::LIGHT_GRAY,
            backdrop_alpha: DEFAULT_BACKDROP_ALPHA,
            backdrop_host: BackdropHost::default(),
        }
    }
}

impl SheetConfig {
    /// Check that every value is usable for layout and drawing.
    pub fn validate(&self) -> SheetResult<()> {
        if !self.item_height.is_finite() || self.item_height <= 0.0 {
            let msg = format!("item height must be positive, got {}", self.item_height);

            return Err(SheetError::InvalidConfig(msg));
        }

        if !(0.0..=1.0).contains(&self.backdrop_alpha) {
            let msg = format!("backdrop alpha must be within [0, 1], got {}", self.backdrop_alpha);

            return Err(SheetError::InvalidConfig(msg));
        }

        Ok(())
    }
}
