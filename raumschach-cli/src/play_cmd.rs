//! Play command - random self-play games
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_start(), play_games(), report_results()
//! - Level 3: play_single_game(), compute_statistics()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use raumschach_core::{GameState, GameStatus, MoveOutcome, RandomAI, Setup};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Number of games to play
    #[arg(long, default_value = "1")]
    pub games: usize,

    /// Stop a game after this many plies
    #[arg(long, default_value = "200")]
    pub max_plies: usize,

    /// Start from a JSON setup file instead of the opening position
    #[arg(long, value_name = "FILE")]
    pub setup: Option<PathBuf>,

    /// Print every move
    #[arg(long)]
    pub verbose: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub game_number: usize,
    pub plies: usize,
    pub status: GameStatus,
    pub white_captures: usize,
    pub black_captures: usize,
    pub moves: Vec<MoveOutcome>,
}

/// Aggregated results
#[derive(Clone, Debug)]
pub struct PlayResults {
    pub games: Vec<GameRecord>,
    pub stalled: usize,
    pub avg_plies: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Load the starting position
/// 2. Play the games
/// 3. Report results
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let start = load_start(&args)?;

    tracing::info!(
        "Starting self-play: {} games, max {} plies",
        args.games,
        args.max_plies
    );

    let results = play_games(&start, &args, seed);

    report_results(&results, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Opening position or the setup file
pub fn load_start(args: &PlayArgs) -> Result<GameState> {
    match &args.setup {
        Some(path) => Setup::load(path)?.to_game_state(),
        None => Ok(GameState::new()),
    }
}

/// Play all games
pub fn play_games(start: &GameState, args: &PlayArgs, seed: Option<u64>) -> PlayResults {
    let mut rng = create_rng(seed);
    let mut games = Vec::with_capacity(args.games);

    for game_num in 0..args.games {
        let record = play_single_game(start, game_num + 1, args.max_plies, rng.gen());

        tracing::info!(
            "Game {}: {:?} ({} plies)",
            record.game_number,
            record.status,
            record.plies
        );

        games.push(record);
    }

    compute_statistics(games)
}

/// Report results
fn report_results(results: &PlayResults, args: &PlayArgs) {
    if args.verbose {
        print_moves(results);
    }

    if args.json {
        print_json_results(results);
    } else {
        print_text_results(results);
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one game with a fresh AI seeded from the match generator
fn play_single_game(
    start: &GameState,
    game_number: usize,
    max_plies: usize,
    seed: u64,
) -> GameRecord {
    let mut ai = RandomAI::with_seed(seed);
    let (final_state, moves) = ai.play_game(start.clone(), max_plies);

    GameRecord {
        game_number,
        plies: moves.len(),
        status: final_state.status(),
        white_captures: final_state.captures().white.len(),
        black_captures: final_state.captures().black.len(),
        moves,
    }
}

/// Compute aggregate statistics from game records
fn compute_statistics(games: Vec<GameRecord>) -> PlayResults {
    let stalled = games
        .iter()
        .filter(|g| matches!(g.status, GameStatus::NoLegalMove(_)))
        .count();

    let total_plies: usize = games.iter().map(|g| g.plies).sum();
    let avg_plies = if games.is_empty() {
        0.0
    } else {
        total_plies as f32 / games.len() as f32
    };

    PlayResults {
        games,
        stalled,
        avg_plies,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn status_label(status: GameStatus) -> String {
    match status {
        GameStatus::Ongoing => "ply limit".to_string(),
        GameStatus::NoLegalMove(side) => format!("{} has no legal move", side),
    }
}

fn print_moves(results: &PlayResults) {
    for game in &results.games {
        println!("--- Game {} ---", game.game_number);
        for (ply, outcome) in game.moves.iter().enumerate() {
            match outcome.captured {
                Some(taken) => {
                    println!("{:>4}. {} {}x{}", ply + 1, outcome.piece, outcome.mv, taken)
                }
                None => println!("{:>4}. {} {}", ply + 1, outcome.piece, outcome.mv),
            }
        }
    }
}

/// Print results as JSON
fn print_json_results(results: &PlayResults) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        plies: usize,
        end: String,
        white_captures: usize,
        black_captures: usize,
        moves: Vec<String>,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        total_games: usize,
        stalled: usize,
        avg_plies: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        total_games: results.games.len(),
        stalled: results.stalled,
        avg_plies: results.avg_plies,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                plies: g.plies,
                end: status_label(g.status),
                white_captures: g.white_captures,
                black_captures: g.black_captures,
                moves: g.moves.iter().map(|o| o.mv.to_string()).collect(),
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Print results as text
fn print_text_results(results: &PlayResults) {
    println!("\n=== Self-play Results ===");
    println!("Total games: {}", results.games.len());
    println!("Stalled:     {}", results.stalled);
    println!("Avg plies:   {:.1}", results.avg_plies);

    for g in &results.games {
        println!(
            "Game {:>3}: {:>4} plies, captures W{} B{}, {}",
            g.game_number,
            g.plies,
            g.white_captures,
            g.black_captures,
            status_label(g.status)
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
