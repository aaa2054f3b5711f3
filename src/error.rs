//! Error types for the fallible helpers around the widget.
//!
//! The widget itself never fails: missing inputs fall back to defaults.
//! Only parsing (colours, config values) can go wrong.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SwipeError {
    /// A style value could not be read as a colour.
    #[error("invalid colour '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    /// A config line had a known key but an unusable value.
    #[error("invalid value '{value}' for config key '{key}'")]
    InvalidConfigValue { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, SwipeError>;
