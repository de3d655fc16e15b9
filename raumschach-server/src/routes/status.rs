//! Liveness and session count

use crate::state::ServerState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub engine: &'static str,
    pub version: &'static str,
    pub games: usize,
}

pub async fn status_handler(State(state): State<Arc<ServerState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        engine: "raumschach",
        version: env!("CARGO_PKG_VERSION"),
        games: state.games().len(),
    })
}
