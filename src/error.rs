//! Error types for the reporting engine.

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the reporting engine.
///
/// Per-record failures are isolated at the call site (skip, log, count);
/// none of these variants ever aborts a whole report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Duration string does not match the fixed-width "HH:MM:SS" layout
    #[error("malformed duration {raw:?}: expected \"HH:MM:SS\"")]
    MalformedDuration { raw: String },

    /// Date string does not parse as "DD-MM-YYYY"
    #[error("malformed date {raw:?}: expected \"DD-MM-YYYY\"")]
    MalformedDate { raw: String },

    /// Configuration file unreadable or unparseable
    #[error("configuration error: {0}")]
    Config(String),
}
