//! Error types
//!
//! The simulation itself cannot fail; errors only come from the edges:
//! leaderboard submissions and tuning files.

use thiserror::Error;

/// A leaderboard submission that cannot be stored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("entry has no name")]
    MissingName,
    #[error("entry has no score")]
    MissingScore,
    #[error("score {0:?} is not a whole non-negative number")]
    InvalidScore(String),
    #[error("malformed entry: {0}")]
    MalformedBody(String),
}

/// Errors raised while loading or checking a [`crate::Tuning`].
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
    #[error("invalid tuning: {0} must be a finite number")]
    NotFinite(&'static str),
}
