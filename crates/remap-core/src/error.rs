//! Error types for the remap core library
//!
//! This module defines the error handling system for remap, using thiserror
//! for ergonomic error definitions and anyhow for opaque passthrough of
//! failures raised inside user-supplied filters and derivations.

use thiserror::Error;

/// Main error type for remap operations
///
/// Three failure kinds flow out of the mapping engine:
///
/// - [`Error::Validation`] — a filter rejected a value. The message
///   accumulates the dotted/bracketed source path as it unwinds through the
///   schema, e.g. `location.colors[2]: must be a number`.
/// - [`Error::Configuration`] — the schema cannot be executed as requested,
///   e.g. a suspending filter reached through the blocking API.
/// - [`Error::Other`] — anything else raised by a custom filter or
///   derivation. Passed through completely unmodified so programming bugs
///   stay distinguishable from data-quality problems.
#[derive(Error, Debug)]
pub enum Error {
    /// A filter rejected a value during mapping
    #[error("{message}")]
    Validation { message: String },

    /// The schema cannot run under the requested execution mode
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Arbitrary failure from a custom filter or derivation, unmodified
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a validation failure with a leaf message.
    ///
    /// The stored message starts with a `": "` segment so that enclosing
    /// path fragments concatenate without re-parsing: `"must be a number"`
    /// becomes `": must be a number"`, then `"[2]: must be a number"`, then
    /// `"colors[2]: must be a number"` as the failure unwinds.
    pub fn validation(message: impl std::fmt::Display) -> Self {
        Error::Validation {
            message: format!(": {}", message),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// True for validation failures, false for every other failure kind.
    ///
    /// Lets callers branch on "bad input" vs "programming error" without
    /// string matching.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}
