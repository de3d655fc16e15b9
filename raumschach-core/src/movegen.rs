//! Movement geometry and legal move enumeration

use crate::board::{Board, Delta, Square};
use crate::error::EngineError;
use crate::game::Move;
use crate::pieces::{oriented, Color, MoveType, Piece, PAWN_CAPTURE_DELTAS, PAWN_PASSIVE_DELTAS};

// ============================================================================
// GEOMETRY
// ============================================================================

/// Candidate destinations for whatever piece stands on `from`.
///
/// With `mate_check` set, pawns only report their capture squares.
pub fn candidate_squares(board: &Board, from: Square, mate_check: bool) -> Vec<Square> {
    let mut out = Vec::new();
    if let Some(piece) = board.get(from) {
        push_candidates(board, from, piece, mate_check, &mut out);
    }
    out
}

fn push_candidates(
    board: &Board,
    from: Square,
    piece: Piece,
    mate_check: bool,
    out: &mut Vec<Square>,
) {
    match piece.kind.move_type() {
        MoveType::Slide => {
            for &dir in piece.kind.deltas() {
                slide(board, from, dir, piece.color, out);
            }
        }
        MoveType::Leap => {
            for &delta in piece.kind.deltas() {
                leap(board, from, delta, piece.color, out);
            }
        }
        MoveType::Pawn => pawn(board, from, piece.color, mate_check, out),
    }
}

fn slide(board: &Board, from: Square, dir: Delta, color: Color, out: &mut Vec<Square>) {
    let mut current = from;

    while let Some(next) = current.offset(dir) {
        match board.color_at(next) {
            None => out.push(next),
            Some(occupant) => {
                if occupant != color {
                    out.push(next);
                }
                break; // Blocked
            }
        }
        current = next;
    }
}

fn leap(board: &Board, from: Square, delta: Delta, color: Color, out: &mut Vec<Square>) {
    if let Some(dest) = from.offset(delta) {
        if board.color_at(dest) != Some(color) {
            out.push(dest);
        }
    }
}

fn pawn(board: &Board, from: Square, color: Color, mate_check: bool, out: &mut Vec<Square>) {
    if !mate_check {
        for &delta in &PAWN_PASSIVE_DELTAS {
            if let Some(dest) = from.offset(oriented(delta, color)) {
                if board.is_empty(dest) {
                    out.push(dest);
                }
            }
        }
    }

    for &delta in &PAWN_CAPTURE_DELTAS {
        if let Some(dest) = from.offset(oriented(delta, color)) {
            if board.color_at(dest) == Some(color.opponent()) {
                out.push(dest);
            }
        }
    }
}

// ============================================================================
// ENUMERATION
// ============================================================================

/// All moves for `side`, in text order of source square then geometry
/// order. The same input always yields the same sequence.
pub fn generate_moves(board: &Board, side: Color, mate_check: bool) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut candidates = Vec::new();

    for (from, piece) in board.pieces() {
        if piece.color != side {
            continue;
        }

        candidates.clear();
        push_candidates(board, from, piece, mate_check, &mut candidates);

        for &to in &candidates {
            if can_move_to(board, to, side) {
                moves.push(Move::new(from, to));
            }
        }
    }

    moves
}

/// Destination is empty or held by the opponent
fn can_move_to(board: &Board, to: Square, side: Color) -> bool {
    board.color_at(to) != Some(side)
}

/// Destinations of the piece on `square`, which must belong to `side`
pub fn legal_destinations(
    board: &Board,
    side: Color,
    square: Square,
) -> Result<Vec<Square>, EngineError> {
    if board.color_at(square) != Some(side) {
        return Err(EngineError::NotYourPiece { square });
    }

    Ok(generate_moves(board, side, false)
        .into_iter()
        .filter(|mv| mv.from == square)
        .map(|mv| mv.to)
        .collect())
}

/// Squares `side` threatens: mate-check destinations, first occurrence kept
pub fn attacked_squares(board: &Board, side: Color) -> Vec<Square> {
    let mut seen = [false; crate::board::NUM_SQUARES];
    generate_moves(board, side, true)
        .into_iter()
        .filter_map(|mv| {
            let fresh = !seen[mv.to.index()];
            seen[mv.to.index()] = true;
            fresh.then_some(mv.to)
        })
        .collect()
}
