//! Engine error type

use crate::board::Square;
use crate::game::Move;
use thiserror::Error;

/// Rejections reported by the engine. None of these leave a board
/// partially updated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    #[error("invalid piece tag: {0:?}")]
    InvalidPiece(char),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("not your piece: {square}")]
    NotYourPiece { square: Square },

    #[error("illegal move: {mv}")]
    IllegalMove { mv: Move },

    #[error("board has {0} squares, expected 125")]
    IncompleteBoard(usize),
}
