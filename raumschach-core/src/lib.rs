//! Raumschach Core - 5x5x5 chess rules engine
//!
//! This crate provides the core game logic:
//! - Cube geometry (level, column, row) and square names
//! - Piece kinds and movement tables
//! - Move generation and move application
//! - Random-move opponent
//! - Custom positions from JSON

pub mod board;
pub mod pieces;
pub mod movegen;
pub mod game;
pub mod ai;
pub mod setup;
pub mod error;

// Re-exports for convenient access
pub use board::{in_range, Board, Square, NUM_SQUARES};
pub use pieces::{Color, Piece, PieceKind};
pub use movegen::{attacked_squares, candidate_squares, generate_moves, legal_destinations};
pub use game::{apply_move, Captures, GameState, GameStatus, Move, MoveOutcome};
pub use ai::{choose_move, RandomAI};
pub use setup::Setup;
pub use error::EngineError;

/// Opening position, White to move, no captures
pub fn new_game() -> GameState {
    GameState::new()
}
