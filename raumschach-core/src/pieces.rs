//! Piece definitions and movement tables

use crate::board::Delta;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// +1 for White (toward level E / row 5), -1 for Black
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(EngineError::InvalidColor(s.to_string())),
        }
    }
}

/// Movement type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveType {
    Slide, // Repeat a direction until blocked
    Leap,  // Apply each delta once, ignores blocking
    Pawn,  // Color-relative passive and capture deltas
}

/// Piece kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Rook,
    Knight,
    King,
    Pawn,
    Bishop,
    Unicorn,
    Queen,
}

pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::King,
    PieceKind::Pawn,
    PieceKind::Bishop,
    PieceKind::Unicorn,
    PieceKind::Queen,
];

impl PieceKind {
    /// Upper-case letter used in the text encoding
    pub fn letter(self) -> char {
        match self {
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::King => 'K',
            PieceKind::Pawn => 'P',
            PieceKind::Bishop => 'B',
            PieceKind::Unicorn => 'U',
            PieceKind::Queen => 'Q',
        }
    }

    pub fn from_letter(letter: char) -> Option<PieceKind> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.letter() == letter.to_ascii_uppercase())
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::King => "King",
            PieceKind::Pawn => "Pawn",
            PieceKind::Bishop => "Bishop",
            PieceKind::Unicorn => "Unicorn",
            PieceKind::Queen => "Queen",
        }
    }

    pub fn move_type(self) -> MoveType {
        match self {
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Unicorn | PieceKind::Queen => {
                MoveType::Slide
            }
            PieceKind::Knight | PieceKind::King => MoveType::Leap,
            PieceKind::Pawn => MoveType::Pawn,
        }
    }

    /// Direction (slide) or displacement (leap) table.
    /// Pawns use `PAWN_PASSIVE_DELTAS` / `PAWN_CAPTURE_DELTAS` instead.
    pub fn deltas(self) -> &'static [Delta] {
        match self {
            PieceKind::Rook => &ROOK_DIRS,
            PieceKind::Bishop => &BISHOP_DIRS,
            PieceKind::Unicorn => &UNICORN_DIRS,
            PieceKind::Queen => &QUEEN_DIRS,
            PieceKind::Knight => &KNIGHT_DELTAS,
            PieceKind::King => &KING_DELTAS,
            PieceKind::Pawn => &[],
        }
    }
}

/// A piece on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Upper case for White, lower case for Black
    pub fn tag(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_tag(tag: char) -> Result<Piece, EngineError> {
        let kind = PieceKind::from_letter(tag).ok_or(EngineError::InvalidPiece(tag))?;
        let color = if tag.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(Piece::new(kind, color))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

// ============================================================================
// MOVEMENT TABLES (level, column, row)
// ============================================================================

pub const ROOK_DIRS: [Delta; 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

pub const BISHOP_DIRS: [Delta; 12] = [
    // level fixed
    (0, 1, 1),
    (0, 1, -1),
    (0, -1, 1),
    (0, -1, -1),
    // column fixed
    (1, 0, 1),
    (1, 0, -1),
    (-1, 0, 1),
    (-1, 0, -1),
    // row fixed
    (1, 1, 0),
    (1, -1, 0),
    (-1, 1, 0),
    (-1, -1, 0),
];

pub const UNICORN_DIRS: [Delta; 8] = [
    (1, 1, 1),
    (1, 1, -1),
    (1, -1, 1),
    (1, -1, -1),
    (-1, 1, 1),
    (-1, 1, -1),
    (-1, -1, 1),
    (-1, -1, -1),
];

pub const QUEEN_DIRS: [Delta; 26] = concat_dirs();

const fn concat_dirs() -> [Delta; 26] {
    let mut out = [(0, 0, 0); 26];
    let mut i = 0;
    while i < 6 {
        out[i] = ROOK_DIRS[i];
        i += 1;
    }
    let mut j = 0;
    while j < 12 {
        out[6 + j] = BISHOP_DIRS[j];
        j += 1;
    }
    let mut k = 0;
    while k < 8 {
        out[18 + k] = UNICORN_DIRS[k];
        k += 1;
    }
    out
}

pub const KNIGHT_DELTAS: [Delta; 24] = [
    // level/column plane
    (2, 1, 0),
    (2, -1, 0),
    (-2, 1, 0),
    (-2, -1, 0),
    (1, 2, 0),
    (1, -2, 0),
    (-1, 2, 0),
    (-1, -2, 0),
    // level/row plane
    (2, 0, 1),
    (2, 0, -1),
    (-2, 0, 1),
    (-2, 0, -1),
    (1, 0, 2),
    (1, 0, -2),
    (-1, 0, 2),
    (-1, 0, -2),
    // column/row plane
    (0, 2, 1),
    (0, 2, -1),
    (0, -2, 1),
    (0, -2, -1),
    (0, 1, 2),
    (0, 1, -2),
    (0, -1, 2),
    (0, -1, -2),
];

pub const KING_DELTAS: [Delta; 26] = king_deltas();

const fn king_deltas() -> [Delta; 26] {
    let mut out = [(0, 0, 0); 26];
    let mut n = 0;
    let mut dl = -1;
    while dl <= 1 {
        let mut dc = -1;
        while dc <= 1 {
            let mut dr = -1;
            while dr <= 1 {
                if dl != 0 || dc != 0 || dr != 0 {
                    out[n] = (dl, dc, dr);
                    n += 1;
                }
                dr += 1;
            }
            dc += 1;
        }
        dl += 1;
    }
    out
}

/// Non-capturing pawn steps, White orientation
pub const PAWN_PASSIVE_DELTAS: [Delta; 2] = [(1, 0, 0), (0, 0, 1)];

/// Capturing pawn steps, White orientation
pub const PAWN_CAPTURE_DELTAS: [Delta; 4] = [(1, -1, 0), (1, 1, 0), (0, -1, 1), (0, 1, 1)];

/// Orient a White-relative delta for a color
pub fn oriented((dl, dc, dr): Delta, color: Color) -> Delta {
    let f = color.forward();
    (dl * f, dc * f, dr * f)
}
