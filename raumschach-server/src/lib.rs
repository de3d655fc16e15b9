//! Raumschach Server - HTTP API for the game client
//!
//! This crate provides the web backend:
//! - Game session registry
//! - JSON endpoints for new game, possible moves, player and computer moves
//! - Cross-origin headers for browser clients
//! - Optional static file serving

mod error;
mod routes;
mod state;

use axum::http::{header, Method};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub use error::ApiError;
pub use state::{GameSession, ServerState};

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: Option<String>,
    /// Fixed seed for the computer player; entropy when unset
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5001,
            static_dir: None,
            seed: None,
        }
    }
}

/// Any origin, the headers and methods the browser client sends
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS, Method::DELETE])
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let router = Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Piece kinds
        .route("/api/pieces", get(routes::pieces::get_pieces))
        // Board geometry
        .route("/api/board", get(routes::board::get_board))
        // Game API
        .route("/new_game", post(routes::game::new_game))
        .route("/possible_moves", post(routes::game::possible_moves))
        .route("/apply_move", post(routes::game::apply_move))
        .route("/get_move", post(routes::game::get_move))
        // Shared state
        .with_state(state)
        .layer(cors_layer());

    // Static file serving (must be last)
    match &config.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::with_seed(config.seed));
    let router = create_router(&config, state);

    tracing::info!("Raumschach server starting on http://0.0.0.0:{}", config.port);
    if let Some(dir) = &config.static_dir {
        tracing::info!("Static files served from: {}", dir);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
