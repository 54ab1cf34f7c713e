// src/callsign/error.rs  —  Table construction + parse errors
use thiserror::Error;

/// Raised while building a [`PrefixTable`](super::PrefixTable).
/// A table that fails to build is never used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("territory {territory}: malformed range '{range}': {reason}")]
    MalformedRange {
        territory: String,
        range:     String,
        reason:    &'static str,
    },
    #[error("territory {territory}: invalid prefix '{prefix}'")]
    InvalidPrefix { territory: String, prefix: String },
    #[error("invalid territory code '{0}' (expected ISO 3166-1 alpha-2)")]
    InvalidTerritory(String),
    #[error("territory {0} is defined more than once")]
    DuplicateTerritory(String),
    #[error("territory {territory}: prefix '{prefix}' listed more than once")]
    DuplicatePrefix { territory: String, prefix: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty call sign")]
    Empty,
    #[error("character {ch:?} at position {index} is not allowed in a call sign")]
    InvalidCharacter { ch: char, index: usize },
    #[error("'{0}' does not have the shape prefix + digit + suffix")]
    NoMatch(String),
}
