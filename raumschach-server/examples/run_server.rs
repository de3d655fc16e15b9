//! Example to run the Raumschach server standalone
//!
//! Run with: cargo run -p raumschach-server --example run_server

use raumschach_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig {
        port: 5001,
        static_dir: None,
        seed: None,
    };

    println!("Starting Raumschach server on port {}", config.port);
    println!("POST http://localhost:{}/new_game to begin", config.port);

    run_server(config).await
}
