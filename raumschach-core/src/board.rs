//! Cube geometry and board storage
//!
//! Squares are packed as `level * 25 + column * 5 + row`. The textual form
//! is level letter, column letter, row digit: "Aa1" .. "Ee5".

use crate::error::EngineError;
use crate::pieces::{Color, Piece, PieceKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Cells along each axis
pub const SIZE: i8 = 5;

/// Total number of squares in the cube
pub const NUM_SQUARES: usize = 125;

const LEVELS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];
const COLUMNS: [char; 5] = ['a', 'b', 'c', 'd', 'e'];
const ROWS: [char; 5] = ['1', '2', '3', '4', '5'];

/// Character used for an empty square in the text encoding
pub const EMPTY_TAG: char = '.';

/// Displacement as (level, column, row)
pub type Delta = (i8, i8, i8);

/// True iff all three coordinates are on the board
pub fn in_range(level: i8, column: i8, row: i8) -> bool {
    (0..SIZE).contains(&level) && (0..SIZE).contains(&column) && (0..SIZE).contains(&row)
}

// ============================================================================
// SQUARE
// ============================================================================

/// One of the 125 cells of the cube
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Build a square from coordinates, `None` if any is off the board
    pub fn from_coords(level: i8, column: i8, row: i8) -> Option<Square> {
        if !in_range(level, column, row) {
            return None;
        }
        Some(Square((level * 25 + column * 5 + row) as u8))
    }

    /// Build a square from its packed index
    pub fn from_index(index: usize) -> Option<Square> {
        (index < NUM_SQUARES).then_some(Square(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn level(self) -> i8 {
        (self.0 / 25) as i8
    }

    pub fn column(self) -> i8 {
        (self.0 / 5 % 5) as i8
    }

    pub fn row(self) -> i8 {
        (self.0 % 5) as i8
    }

    /// (level, column, row)
    pub fn coords(self) -> (i8, i8, i8) {
        (self.level(), self.column(), self.row())
    }

    /// Step by a delta, `None` if the result leaves the cube
    pub fn offset(self, (dl, dc, dr): Delta) -> Option<Square> {
        Square::from_coords(self.level() + dl, self.column() + dc, self.row() + dr)
    }

    /// All squares in text order: level, then row, then column
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SIZE).flat_map(|level| {
            (0..SIZE).flat_map(move |row| {
                (0..SIZE).filter_map(move |column| Square::from_coords(level, column, row))
            })
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            LEVELS[self.level() as usize],
            COLUMNS[self.column() as usize],
            ROWS[self.row() as usize]
        )
    }
}

impl FromStr for Square {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidSquare(s.to_string());
        let mut chars = s.chars();
        let (Some(l), Some(c), Some(r), None) =
            (chars.next(), chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };

        let level = LEVELS.iter().position(|&x| x == l).ok_or_else(invalid)?;
        let column = COLUMNS.iter().position(|&x| x == c).ok_or_else(invalid)?;
        let row = ROWS.iter().position(|&x| x == r).ok_or_else(invalid)?;

        Square::from_coords(level as i8, column as i8, row as i8).ok_or_else(invalid)
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Dense board: one occupant slot per square
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; NUM_SQUARES],
}

impl Board {
    /// Board with every square empty
    pub fn empty() -> Self {
        Self {
            cells: [None; NUM_SQUARES],
        }
    }

    /// Standard Raumschach starting position
    pub fn opening() -> Self {
        use PieceKind::*;

        let mut board = Board::empty();
        let back = [Rook, Knight, King, Knight, Rook];
        let officers = [Bishop, Unicorn, Queen, Bishop, Unicorn];

        // (level, back row, pawn row) per side
        let sides = [
            (Color::White, [0, 1], 0, 1),
            (Color::Black, [4, 3], 4, 3),
        ];

        for (color, [first, second], back_row, pawn_row) in sides {
            for column in 0..SIZE {
                let c = column as usize;
                board.place(first, column, back_row, Piece::new(back[c], color));
                board.place(second, column, back_row, Piece::new(officers[c], color));
                board.place(first, column, pawn_row, Piece::new(Pawn, color));
                board.place(second, column, pawn_row, Piece::new(Pawn, color));
            }
        }

        board
    }

    fn place(&mut self, level: i8, column: i8, row: i8, piece: Piece) {
        if let Some(sq) = Square::from_coords(level, column, row) {
            self.cells[sq.index()] = Some(piece);
        }
    }

    /// Occupant of a square
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    pub fn set(&mut self, sq: Square, occupant: Option<Piece>) {
        self.cells[sq.index()] = occupant;
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Color of the occupant, `None` for an empty square
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(|p| p.color)
    }

    /// Occupied squares in text order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Number of pieces of a color
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().flatten().filter(|p| p.color == color).count()
    }

    /// Encode as square text -> tag character ('.' for empty)
    pub fn to_map(&self) -> BTreeMap<String, char> {
        Square::all()
            .map(|sq| (sq.to_string(), self.get(sq).map_or(EMPTY_TAG, Piece::tag)))
            .collect()
    }

    /// Decode from a complete square -> tag map
    pub fn from_map(map: &BTreeMap<String, char>) -> Result<Board, EngineError> {
        if map.len() != NUM_SQUARES {
            return Err(EngineError::IncompleteBoard(map.len()));
        }

        let mut board = Board::empty();
        for (key, &tag) in map {
            let sq: Square = key.parse()?;
            let occupant = if tag == EMPTY_TAG {
                None
            } else {
                Some(Piece::from_tag(tag)?)
            };
            board.set(sq, occupant);
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Levels side by side is too wide for a terminal, so print them stacked,
/// top level first and row 5 at the top of each grid.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in (0..SIZE).rev() {
            writeln!(f, "{}", LEVELS[level as usize])?;
            for row in (0..SIZE).rev() {
                write!(f, "  {} ", ROWS[row as usize])?;
                for column in 0..SIZE {
                    let tag = Square::from_coords(level, column, row)
                        .and_then(|sq| self.get(sq))
                        .map_or(EMPTY_TAG, Piece::tag);
                    write!(f, "{}", tag)?;
                }
                writeln!(f)?;
            }
            writeln!(f, "    abcde")?;
        }
        Ok(())
    }
}
