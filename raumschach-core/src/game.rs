//! Game state and move application

use crate::board::{Board, Square};
use crate::error::EngineError;
use crate::movegen::{generate_moves, legal_destinations};
use crate::pieces::{Color, Piece};
use std::fmt;

// ============================================================================
// CORE TYPES
// ============================================================================

/// A (from, to) pair. Legality is decided by move generation, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Whether the side to move can still move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The given side has no legal move. No winner is implied.
    NoLegalMove(Color),
}

/// Pieces taken by each side, in capture order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Captures {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl Captures {
    /// Pieces taken by `side`
    pub fn by(&self, side: Color) -> &[Piece] {
        match side {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn record(&mut self, side: Color, piece: Piece) {
        match side {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }
}

/// Result of a completed ply
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub side_to_move: Color,
}

// ============================================================================
// MOVE APPLICATION
// ============================================================================

/// Apply `mv` for `side`, returning the captured piece if any.
///
/// The move must be one `generate_moves(board, side, false)` produces;
/// otherwise the board is left untouched.
pub fn apply_move(
    board: &mut Board,
    side: Color,
    mv: Move,
) -> Result<Option<Piece>, EngineError> {
    if !generate_moves(board, side, false).contains(&mv) {
        return Err(EngineError::IllegalMove { mv });
    }

    let captured = board.get(mv.to);
    board.set(mv.to, board.get(mv.from));
    board.set(mv.from, None);

    Ok(captured)
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Board, side to move and capture record for one game
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    captures: Captures,
}

impl GameState {
    /// Opening position, White to move
    pub fn new() -> Self {
        Self::from_board(Board::opening(), Color::White)
    }

    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            captures: Captures::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    /// All legal moves for the side to move
    pub fn legal_moves(&self) -> Vec<Move> {
        generate_moves(&self.board, self.side_to_move, false)
    }

    pub fn legal_destinations(&self, square: Square) -> Result<Vec<Square>, EngineError> {
        legal_destinations(&self.board, self.side_to_move, square)
    }

    pub fn status(&self) -> GameStatus {
        if self.legal_moves().is_empty() {
            GameStatus::NoLegalMove(self.side_to_move)
        } else {
            GameStatus::Ongoing
        }
    }

    /// Play one ply for the side to move
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, EngineError> {
        let side = self.side_to_move;
        let piece = self
            .board
            .get(mv.from)
            .ok_or(EngineError::IllegalMove { mv })?;

        let captured = apply_move(&mut self.board, side, mv)?;
        if let Some(taken) = captured {
            self.captures.record(side, taken);
        }
        self.side_to_move = side.opponent();

        Ok(MoveOutcome {
            mv,
            piece,
            captured,
            side_to_move: self.side_to_move,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
