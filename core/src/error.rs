//! Error types for the board component.

use thiserror::Error;

use crate::types::Position;

/// Board construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board size {0}: must be even and at least 4")]
    InvalidSize(usize),
}

/// Errors raised when placing a token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),

    #[error("position {0} is not a legal move for the player in turn")]
    Illegal(Position),
}

/// Board notation parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("board notation is empty")]
    Empty,

    #[error("board is not square: row {row} has {got} cells, expected {expected}")]
    NotSquare {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("invalid cell character '{character}' at row {row}, column {col}")]
    InvalidCell {
        character: char,
        row: usize,
        col: usize,
    },

    #[error("invalid player '{0}' (expected B, W, black or white)")]
    InvalidPlayer(String),

    #[error("invalid position '{0}' (expected e.g. 'd3')")]
    InvalidPosition(String),

    #[error(transparent)]
    InvalidSize(#[from] BoardError),
}
