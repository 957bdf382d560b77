//! Error types for the search core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`crate::Searcher`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The caller asked for a move in a position with no legal moves.
    #[error("no legal root moves to choose from")]
    NoLegalMoves,
}

/// Errors raised while loading or validating a [`crate::SearchConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
