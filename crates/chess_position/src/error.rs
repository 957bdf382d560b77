use thiserror::Error;

/// Errors raised while setting up a [`crate::ChessPosition`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    #[error("illegal or malformed move: {0}")]
    IllegalMove(String),
    #[error("malformed position command: {0}")]
    MalformedCommand(String),
}
