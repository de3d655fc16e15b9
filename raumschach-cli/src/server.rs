//! Serve command - run the HTTP game server in the foreground

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use raumschach_server::{run_server, ServerConfig};

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value = "5001")]
    pub port: u16,

    /// Directory of static client files to serve
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

/// Run serve command; blocks until the server exits
pub fn run(args: ServerArgs, seed: Option<u64>) -> Result<()> {
    let config = server_config(&args, seed)?;
    match config.seed {
        Some(seed) => tracing::info!("computer moves seeded with {}", seed),
        None => tracing::debug!("computer moves drawn from entropy"),
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(config))
}

fn server_config(args: &ServerArgs, seed: Option<u64>) -> Result<ServerConfig> {
    let static_dir = match &args.static_dir {
        Some(dir) => Some(check_static_dir(dir)?),
        None => None,
    };

    Ok(ServerConfig {
        port: args.port,
        static_dir,
        seed,
    })
}

/// A missing client directory only warns; a file in its place is an error
fn check_static_dir(dir: &Path) -> Result<String> {
    if !dir.exists() {
        tracing::warn!("static directory {} not found, serving API only", dir.display());
    } else if !dir.is_dir() {
        anyhow::bail!("static path is not a directory: {}", dir.display());
    }

    Ok(dir.to_string_lossy().into_owned())
}
