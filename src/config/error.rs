//! Configuration error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong while reading a configuration source.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// The line has no `key: value` shape.
    #[display("I cannot understand \"{}\" (line {})", text, line_no)]
    MalformedLine {
        /// 1-based line number in the source.
        line_no: usize,
        /// The offending line, verbatim.
        text: String,
    },

    /// The value is not an integer.
    #[display("Invalid value \"{}\" for {} (line {}): {}", value, key, line_no, reason)]
    MalformedValue {
        /// 1-based line number in the source.
        line_no: usize,
        /// The key the value belonged to.
        key: String,
        /// The trimmed value text.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// The key is not one of `minimum`, `maximum` or `attempts`.
    #[display("Unrecognized key \"{}\" (line {})", key, line_no)]
    UnrecognizedKey {
        /// 1-based line number in the source.
        line_no: usize,
        /// The trimmed key.
        key: String,
    },

    /// The source could not be opened or read.
    #[display("Cannot read configuration from {}: {}", source_name, reason)]
    Unreadable {
        /// Path or name of the source.
        source_name: String,
        /// I/O error message.
        reason: String,
    },
}

/// Configuration error with location tracking.
///
/// Displays as the bare [`ConfigErrorKind`] message, since that is what gets
/// broadcast to the views. The capture site is kept for logging.
#[derive(Debug, Clone, Display, Error)]
#[display("{}", kind)]
pub struct ConfigError {
    /// What went wrong.
    pub kind: ConfigErrorKind,
    /// Line number where error was raised.
    pub line: u32,
    /// Source file where error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A parsed configuration that violates `min < max` or `attempts > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display(
    "Inconsistent configuration: min: {}, max: {}, attempts: {}",
    min,
    max,
    attempts
)]
pub struct InconsistentConfiguration {
    /// Parsed lower bound.
    pub min: i64,
    /// Parsed upper bound.
    pub max: i64,
    /// Parsed attempt budget.
    pub attempts: i64,
}
