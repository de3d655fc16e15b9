//! Raumschach CLI - Command-line interface
//!
//! Commands:
//! - serve: Start the HTTP game server
//! - play: Random self-play games
//! - moves: Inspect legal moves of a position

mod moves_cmd;
mod play_cmd;
mod server;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "raumschach")]
#[command(about = "5x5x5 Raumschach engine and game server")]
struct Cli {
    /// Random seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP game server
    Serve(server::ServerArgs),
    /// Play random self-play games
    Play(play_cmd::PlayArgs),
    /// List legal moves of a position
    Moves(moves_cmd::MovesArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => server::run(args, cli.seed),
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Moves(args) => moves_cmd::run(args),
    }
}
