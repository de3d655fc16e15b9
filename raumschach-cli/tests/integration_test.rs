//! Integration tests for the Raumschach engine
//!
//! Exercises the public core API end to end: opening position, move
//! generation, move application and the random opponent.

use raumschach_core::{
    apply_move, attacked_squares, candidate_squares, choose_move, generate_moves, new_game, Board,
    Color, EngineError, GameState, GameStatus, Move, Piece, PieceKind, RandomAI, Setup, Square,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn lone(name: &str, kind: PieceKind, color: Color) -> Board {
    let mut board = Board::empty();
    board.set(sq(name), Some(Piece::new(kind, color)));
    board
}

// ============================================================================
// COORDINATES AND LAYOUT
// ============================================================================

#[test]
fn test_every_square_round_trips() {
    for square in Square::all() {
        let (l, c, r) = square.coords();
        assert_eq!(Square::from_coords(l, c, r), Some(square));
        assert_eq!(square.to_string().parse::<Square>(), Ok(square));
    }
}

#[test]
fn test_new_game_defaults() {
    let game = new_game();
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.board().pieces().count(), 40);
    assert!(game.captures().white.is_empty() && game.captures().black.is_empty());
}

// ============================================================================
// GEOMETRY PROPERTIES
// ============================================================================

#[test]
fn test_sliders_never_pass_first_blocker() {
    let mut ai = RandomAI::with_seed(17);
    let (state, _) = ai.play_game(GameState::new(), 40);
    let board = state.board();

    for (from, piece) in board.pieces() {
        if !matches!(
            piece.kind,
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Unicorn | PieceKind::Queen
        ) {
            continue;
        }

        for to in candidate_squares(board, from, false) {
            // every square strictly between from and to must be empty
            let (fl, fc, fr) = from.coords();
            let (tl, tc, tr) = to.coords();
            let step = ((tl - fl).signum(), (tc - fc).signum(), (tr - fr).signum());
            let mut cur = from.offset(step).unwrap();
            while cur != to {
                assert!(board.is_empty(cur), "{} jumped over {}", from, cur);
                cur = cur.offset(step).unwrap();
            }
            assert_ne!(board.color_at(to), Some(piece.color));
        }
    }
}

#[test]
fn test_knight_in_corner_has_fewer_moves() {
    let board = lone("Aa1", PieceKind::Knight, Color::White);
    let corner = candidate_squares(&board, sq("Aa1"), false);
    assert!(corner.len() < 24);

    let board = lone("Cc3", PieceKind::Knight, Color::White);
    assert_eq!(candidate_squares(&board, sq("Cc3"), false).len(), 24);
}

#[test]
fn test_mate_check_drops_pawn_pushes() {
    let board = lone("Bc2", PieceKind::Pawn, Color::White);
    let normal = generate_moves(&board, Color::White, false);
    let threat = generate_moves(&board, Color::White, true);

    assert!(normal.contains(&Move::new(sq("Bc2"), sq("Cc2"))));
    assert!(threat.is_empty());
    assert!(board.is_empty(sq("Cc2")));
    assert!(attacked_squares(&board, Color::White).is_empty());
}

// ============================================================================
// STATE MACHINE
// ============================================================================

#[test]
fn test_rejected_move_changes_nothing() {
    let mut board = Board::opening();
    let before = board.clone();
    let bad = Move::new(sq("Ac1"), sq("Cc3"));

    assert_eq!(
        apply_move(&mut board, Color::White, bad),
        Err(EngineError::IllegalMove { mv: bad })
    );
    assert_eq!(board, before);
}

#[test]
fn test_capture_sequence_from_setup() {
    let setup = Setup::from_json(
        r#"{ "side_to_move": "white", "pieces": { "Aa1": "Q", "Ee5": "r", "Ea1": "k" } }"#,
    )
    .unwrap();
    let mut game = setup.to_game_state().unwrap();

    // queen takes rook along the long diagonal
    let outcome = game.play(Move::new(sq("Aa1"), sq("Ee5"))).unwrap();
    assert_eq!(outcome.captured, Some(Piece::new(PieceKind::Rook, Color::Black)));
    assert_eq!(game.board().get(sq("Ee5")), Some(Piece::new(PieceKind::Queen, Color::White)));
    assert!(game.board().is_empty(sq("Aa1")));
    assert_eq!(game.captures().by(Color::White).len(), 1);
    assert_eq!(game.side_to_move(), Color::Black);

    // black king still has moves
    assert_eq!(game.status(), GameStatus::Ongoing);
}

#[test]
fn test_generation_repeatable_after_moves() {
    let mut ai = RandomAI::with_seed(3);
    let (state, history) = ai.play_game(GameState::new(), 25);
    assert_eq!(history.len(), 25);

    let a = generate_moves(state.board(), state.side_to_move(), false);
    let b = generate_moves(state.board(), state.side_to_move(), false);
    assert_eq!(a, b);
}

#[test]
fn test_full_random_game_stays_legal() {
    let mut game = GameState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for _ in 0..300 {
        let side = game.side_to_move();
        let Some(mv) = choose_move(game.board(), side, &mut rng) else {
            assert_eq!(game.status(), GameStatus::NoLegalMove(side));
            break;
        };
        assert!(game.legal_moves().contains(&mv));

        let outcome = game.play(mv).unwrap();
        assert_eq!(outcome.piece.color, side);
        if let Some(taken) = outcome.captured {
            assert_eq!(taken.color, side.opponent());
        }
        assert_eq!(game.side_to_move(), side.opponent());
    }

    let taken = game.captures().white.len() + game.captures().black.len();
    assert_eq!(game.board().pieces().count() + taken, 40);
}

#[test]
fn test_single_move_always_selected() {
    // black pawn on the bottom edge of level E can only step down a level
    let board = lone("Ea1", PieceKind::Pawn, Color::Black);
    let moves = generate_moves(&board, Color::Black, false);
    assert_eq!(moves, vec![Move::new(sq("Ea1"), sq("Da1"))]);

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for _ in 0..10 {
        assert_eq!(choose_move(&board, Color::Black, &mut rng), Some(moves[0]));
    }
}
