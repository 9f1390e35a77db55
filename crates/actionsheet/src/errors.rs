//! # Error Types
//!
//! ## Overview
//!
//! Errors returned while configuring and presenting an action sheet.
pub use crate::style::ParseColorError;

/// Errors returned by [ActionSheet](crate::sheet::ActionSheet) operations.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum SheetError {
    /// The sheet is already on screen.
    #[error("Action sheet is already being shown")]
    AlreadyShown,

    /// The sheet was dismissed and cannot be shown again.
    #[error("Action sheet has already been dismissed")]
    Spent,

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Common result type for action sheet operations.
pub type SheetResult<V> = Result<V, SheetError>;
