//! Random-move opponent

use crate::board::Board;
use crate::game::{GameState, Move, MoveOutcome};
use crate::movegen::generate_moves;
use crate::pieces::Color;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Pick a legal move for `side` uniformly at random, `None` if there is none
pub fn choose_move<R: Rng + ?Sized>(board: &Board, side: Color, rng: &mut R) -> Option<Move> {
    generate_moves(board, side, false).choose(rng).copied()
}

/// Opponent that owns its random source
pub struct RandomAI {
    rng: ChaCha8Rng,
}

impl RandomAI {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Move for the side to move in `state`
    pub fn best_move(&mut self, state: &GameState) -> Option<Move> {
        choose_move(state.board(), state.side_to_move(), &mut self.rng)
    }

    /// Let the AI play both sides until no move is left or `max_plies` is reached
    pub fn play_game(
        &mut self,
        initial: GameState,
        max_plies: usize,
    ) -> (GameState, Vec<MoveOutcome>) {
        let mut state = initial;
        let mut history = Vec::new();

        while history.len() < max_plies {
            let Some(mv) = self.best_move(&state) else {
                tracing::debug!("{} has no legal move", state.side_to_move());
                break;
            };

            match state.play(mv) {
                Ok(outcome) => history.push(outcome),
                Err(e) => {
                    tracing::debug!("generated move rejected: {}", e);
                    break;
                }
            }
        }

        (state, history)
    }
}

impl Default for RandomAI {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;
    use crate::game::GameStatus;
    use crate::pieces::{Piece, PieceKind};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_single_legal_move_always_chosen() {
        // white pawn blocked on the level axis, free along the row
        let mut board = Board::empty();
        board.set(sq("Aa4"), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set(sq("Ba4"), Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let only = Move::new(sq("Aa4"), sq("Aa5"));
        assert_eq!(generate_moves(&board, Color::White, false), vec![only]);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(choose_move(&board, Color::White, &mut rng), Some(only));
        }
    }

    #[test]
    fn test_no_moves_returns_none() {
        let board = Board::empty();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(choose_move(&board, Color::White, &mut rng), None);
    }

    #[test]
    fn test_choice_is_legal_and_seeded() {
        let board = Board::opening();
        let legal = generate_moves(&board, Color::Black, false);

        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..10 {
            let x = choose_move(&board, Color::Black, &mut a).unwrap();
            let y = choose_move(&board, Color::Black, &mut b).unwrap();
            assert_eq!(x, y);
            assert!(legal.contains(&x));
        }
    }

    #[test]
    fn test_choice_covers_all_moves() {
        let board = Board::opening();
        let legal = generate_moves(&board, Color::White, false);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..legal.len() * 40 {
            seen.insert(choose_move(&board, Color::White, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), legal.len());
    }

    #[test]
    fn test_self_play() {
        let mut ai = RandomAI::with_seed(11);
        let (state, history) = ai.play_game(GameState::new(), 60);

        assert!(!history.is_empty());
        assert!(history.len() == 60 || matches!(state.status(), GameStatus::NoLegalMove(_)));

        let mut side = Color::White;
        for outcome in &history {
            assert_eq!(outcome.piece.color, side);
            side = side.opponent();
            assert_eq!(outcome.side_to_move, side);
        }

        let taken = state.captures().white.len() + state.captures().black.len();
        let on_board = state.board().count(Color::White) + state.board().count(Color::Black);
        assert_eq!(on_board, 40 - taken);
    }
}
