//! Custom starting positions loaded from JSON

use crate::board::{Board, Square};
use crate::game::GameState;
use crate::pieces::{Color, Piece};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Position description: occupied squares only, everything else empty.
///
/// ```json
/// { "side_to_move": "black", "pieces": { "Cc3": "R", "Ec5": "k" } }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Setup {
    #[serde(default = "default_side")]
    pub side_to_move: Color,
    pub pieces: BTreeMap<String, char>,
}

fn default_side() -> Color {
    Color::White
}

impl Setup {
    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read setup file {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("invalid setup file {}", path.display()))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Capture a game's board and side to move
    pub fn from_state(state: &GameState) -> Self {
        Self {
            side_to_move: state.side_to_move(),
            pieces: state
                .board()
                .pieces()
                .map(|(sq, piece)| (sq.to_string(), piece.tag()))
                .collect(),
        }
    }

    /// Convert to GameState
    pub fn to_game_state(&self) -> anyhow::Result<GameState> {
        let mut board = Board::empty();

        for (name, &tag) in &self.pieces {
            let sq: Square = name.parse()?;
            let piece = Piece::from_tag(tag).with_context(|| format!("on square {}", name))?;
            board.set(sq, Some(piece));
        }

        Ok(GameState::from_board(board, self.side_to_move))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Move;

    #[test]
    fn test_parse_setup() {
        let setup = Setup::from_json(
            r#"{ "side_to_move": "black", "pieces": { "Cc3": "R", "Ec5": "k" } }"#,
        )
        .unwrap();
        let state = setup.to_game_state().unwrap();

        assert_eq!(state.side_to_move(), Color::Black);
        assert_eq!(state.board().pieces().count(), 2);
        assert_eq!(state.board().get("Ec5".parse().unwrap()).map(Piece::tag), Some('k'));
    }

    #[test]
    fn test_side_defaults_to_white() {
        let setup = Setup::from_json(r#"{ "pieces": {} }"#).unwrap();
        assert_eq!(setup.side_to_move, Color::White);
        assert!(setup.to_game_state().unwrap().legal_moves().is_empty());
    }

    #[test]
    fn test_bad_entries_rejected() {
        let bad_square = Setup::from_json(r#"{ "pieces": { "Zz9": "R" } }"#).unwrap();
        assert!(bad_square.to_game_state().is_err());

        let bad_piece = Setup::from_json(r#"{ "pieces": { "Aa1": "X" } }"#).unwrap();
        assert!(bad_piece.to_game_state().is_err());

        assert!(Setup::from_json(r#"{ "side_to_move": "red", "pieces": {} }"#).is_err());
    }

    #[test]
    fn test_state_round_trip() {
        let mut state = GameState::new();
        state
            .play(Move::new("Ab1".parse().unwrap(), "Cc1".parse().unwrap()))
            .unwrap();

        let setup = Setup::from_state(&state);
        assert_eq!(setup.pieces.len(), 40);

        let back = setup.to_game_state().unwrap();
        assert_eq!(back.board(), state.board());
        assert_eq!(back.side_to_move(), Color::Black);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Setup::load(Path::new("/nonexistent/setup.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read setup file"));
    }
}
