//! Error types for policy construction and input validation.

use thiserror::Error;

use crate::policy::{Category, SafetyMode};

/// Errors raised while building a policy table.
///
/// All variants are fatal: a moderator is never constructed from an invalid
/// policy, and there is no degraded mode.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A confidence threshold fell outside the [0, 1] range.
    #[error("threshold {value} for {mode}/{category} is outside [0, 1]")]
    ThresholdOutOfRange {
        /// Safety mode row the threshold belongs to.
        mode: SafetyMode,
        /// Category column the threshold belongs to.
        category: Category,
        /// The offending value.
        value: f32,
    },

    /// A safety mode string was not one of strict, balanced, or permissive.
    #[error("unrecognized safety mode: {0:?}")]
    UnknownSafetyMode(String),

    /// A configured regex pattern failed to compile.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The pattern source text.
        pattern: String,
        /// The underlying compile error.
        #[source]
        source: regex::Error,
    },

    /// The fallback template for an intervening category is empty.
    #[error("fallback template for {0} is empty")]
    EmptyTemplate(Category),

    /// Declarative policy data could not be parsed.
    #[error("invalid policy data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

/// Errors raised while validating caller-supplied input.
#[derive(Debug, Error)]
pub enum InputError {
    /// Raw input bytes are not valid UTF-8 text.
    #[error("input is not valid utf-8 text: {0}")]
    NotText(#[from] std::str::Utf8Error),
}

/// Result type for policy construction.
pub type Result<T> = std::result::Result<T, ConfigError>;
