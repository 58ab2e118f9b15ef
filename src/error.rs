//! Error types for algoviz.
//!
//! All recoverable conditions are values, not panics: an empty array, a
//! missing search target, or malformed numeric input are expected states of
//! an interactive visualizer, so every fallible operation returns
//! `Result<T, VizError>`.

use thiserror::Error;

/// Result type alias for algoviz operations.
pub type VizResult<T> = Result<T, VizError>;

/// Unified error type for all algoviz operations.
#[derive(Debug, Error)]
pub enum VizError {
    // ===== Input Errors =====
    /// Input text did not parse to a non-empty list of finite numbers.
    #[error("invalid input: expected a list of numbers, e.g. 8, 3, 1, 6, 4")]
    InvalidInput,

    /// A non-finite value reached the trace layer.
    #[error("non-finite value at {location}")]
    NonFinite {
        /// Where the non-finite value was detected.
        location: String,
    },

    /// An operation was requested against an empty array.
    #[error("empty array: set an array before stepping")]
    EmptyArray,

    // ===== Search Errors =====
    /// Binary search was stepped without a target value.
    #[error("no target: provide a target before searching")]
    NoTarget,

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // ===== Terminal Errors =====
    /// Terminal rendering error.
    #[error("terminal error: {0}")]
    Terminal(String),
}

impl VizError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a non-finite value error.
    #[must_use]
    pub fn non_finite(location: impl Into<String>) -> Self {
        Self::NonFinite {
            location: location.into(),
        }
    }

    /// Create a terminal error.
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal(message.into())
    }

    /// Check whether this error is a recoverable user-input condition
    /// (bad input text, empty array, missing target) rather than a fault.
    #[must_use]
    pub const fn is_user_input(&self) -> bool {
        matches!(self, Self::InvalidInput | Self::EmptyArray | Self::NoTarget)
    }
}
