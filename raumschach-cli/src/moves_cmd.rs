//! Moves command - inspect a position
//!
//! Prints the board and either every legal move for the side to move,
//! the destinations of one piece, or the threatened squares.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use raumschach_core::{attacked_squares, Color, GameState, Setup, Square};

#[derive(Args)]
pub struct MovesArgs {
    /// Only list destinations of the piece on this square (e.g. "Aa2")
    #[arg(long)]
    pub square: Option<String>,

    /// Start from a JSON setup file instead of the opening position
    #[arg(long, value_name = "FILE")]
    pub setup: Option<PathBuf>,

    /// Side to move ("white" or "black"), overriding the position's own
    #[arg(long)]
    pub side: Option<Color>,

    /// List squares the side to move threatens instead of its moves
    #[arg(long)]
    pub threats: bool,
}

/// Run moves command
pub fn run(args: MovesArgs) -> Result<()> {
    let state = load_state(&args)?;

    println!("{}", state.board());
    println!("{} to move", state.side_to_move());

    for line in describe(&state, &args)? {
        println!("{}", line);
    }

    Ok(())
}

/// Starting position with the side override applied
fn load_state(args: &MovesArgs) -> Result<GameState> {
    let state = match &args.setup {
        Some(path) => Setup::load(path)?.to_game_state()?,
        None => GameState::new(),
    };

    Ok(match args.side {
        Some(side) if side != state.side_to_move() => {
            GameState::from_board(state.board().clone(), side)
        }
        _ => state,
    })
}

/// Lines to print for the requested view
fn describe(state: &GameState, args: &MovesArgs) -> Result<Vec<String>> {
    if let Some(text) = &args.square {
        let square: Square = text.parse()?;
        let dests = state
            .legal_destinations(square)
            .with_context(|| format!("cannot list moves for {}", text))?;
        return Ok(vec![join(&dests)]);
    }

    if args.threats {
        let threatened = attacked_squares(state.board(), state.side_to_move());
        return Ok(vec![format!("{} threatened squares", threatened.len()), join(&threatened)]);
    }

    let moves = state.legal_moves();
    let mut lines = vec![format!("{} legal moves", moves.len())];
    lines.extend(moves.iter().map(|mv| mv.to_string()));
    Ok(lines)
}

fn join(squares: &[Square]) -> String {
    squares
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
