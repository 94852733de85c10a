//! Errors raised while assembling settings from configuration.

use thiserror::Error;

/// A configuration value that cannot produce working delivery URLs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required string field was empty or whitespace.
    #[error("config field `{0}` must not be empty")]
    EmptyField(&'static str),
    /// A transform entry had an empty action name.
    #[error("transform entry #{index} has an empty action name")]
    EmptyAction { index: usize },
    /// The same action name appeared twice in the transform table.
    #[error("action `{0}` is defined more than once")]
    DuplicateAction(String),
    /// Host and cloud name did not combine into a parseable URL.
    #[error("delivery base `{base}` is not a valid URL: {reason}")]
    InvalidBase { base: String, reason: String },
}
