//! Piece kinds endpoint
//!
//! Returns the piece legend and movement summary for the UI.

use axum::Json;
use raumschach_core::pieces::{MoveType, PAWN_CAPTURE_DELTAS, PAWN_PASSIVE_DELTAS, ALL_KINDS};
use serde::Serialize;
use std::collections::BTreeMap;

/// Piece kind info for the UI
#[derive(Serialize)]
pub struct PieceKindInfo {
    pub name: &'static str,
    pub white: char,
    pub black: char,
    pub move_type: &'static str,
    pub vectors: usize,
}

/// Piece kinds keyed by their white tag letter
pub async fn get_pieces() -> Json<BTreeMap<char, PieceKindInfo>> {
    let pieces = ALL_KINDS
        .iter()
        .map(|&kind| {
            let (move_type, vectors) = match kind.move_type() {
                MoveType::Slide => ("SLIDE", kind.deltas().len()),
                MoveType::Leap => ("LEAP", kind.deltas().len()),
                MoveType::Pawn => ("PAWN", PAWN_PASSIVE_DELTAS.len() + PAWN_CAPTURE_DELTAS.len()),
            };
            let info = PieceKindInfo {
                name: kind.name(),
                white: kind.letter(),
                black: kind.letter().to_ascii_lowercase(),
                move_type,
                vectors,
            };
            (kind.letter(), info)
        })
        .collect();

    Json(pieces)
}
