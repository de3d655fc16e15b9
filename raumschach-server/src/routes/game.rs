//! Game API routes
//!
//! New game, legal destinations for a piece, player moves and AI moves.

use crate::error::ApiError;
use crate::state::{GameSession, ServerState};
use axum::{extract::State, Json};
use raumschach_core::{choose_move, Captures, GameState, Move, Square};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Board, side to move and captures as the client expects them
#[derive(Serialize)]
pub struct Snapshot {
    pub board: BTreeMap<String, char>,
    pub side_to_move: &'static str,
    pub captured_pieces: CapturedPieces,
}

/// Tags of pieces taken by each side
#[derive(Serialize)]
pub struct CapturedPieces {
    pub white: Vec<char>,
    pub black: Vec<char>,
}

impl From<&Captures> for CapturedPieces {
    fn from(captures: &Captures) -> Self {
        Self {
            white: captures.white.iter().map(|p| p.tag()).collect(),
            black: captures.black.iter().map(|p| p.tag()).collect(),
        }
    }
}

impl From<&GameState> for Snapshot {
    fn from(game: &GameState) -> Self {
        Self {
            board: game.board().to_map(),
            side_to_move: game.side_to_move().as_str(),
            captured_pieces: game.captures().into(),
        }
    }
}

#[derive(Serialize)]
pub struct NewGameResponse {
    pub game_id: String,
    #[serde(flatten)]
    pub snapshot: Snapshot,
}

/// Create a game in the opening position
pub async fn new_game(State(state): State<Arc<ServerState>>) -> Json<NewGameResponse> {
    let (game_id, session) = state.create_game();
    tracing::info!("created game {}", game_id);

    Json(NewGameResponse {
        game_id,
        snapshot: Snapshot::from(&session.game),
    })
}

#[derive(Deserialize)]
pub struct PossibleMovesRequest {
    pub game_id: Option<String>,
    pub square: Option<String>,
}

#[derive(Serialize)]
pub struct PossibleMovesResponse {
    pub possible_moves: Vec<Square>,
}

/// Destinations for the piece on a square
pub async fn possible_moves(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<PossibleMovesRequest>,
) -> Result<Json<PossibleMovesResponse>, ApiError> {
    let games = state.games();
    let session = lookup(&games, req.game_id.as_deref())?;
    let square = parse_square(req.square.as_deref()).ok_or(ApiError::NotYourPiece)?;

    let possible_moves = session.game.legal_destinations(square)?;
    Ok(Json(PossibleMovesResponse { possible_moves }))
}

#[derive(Deserialize)]
pub struct ApplyMoveRequest {
    pub game_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Serialize)]
pub struct ApplyMoveResponse {
    pub success: bool,
    #[serde(flatten)]
    pub snapshot: Snapshot,
}

/// Apply a player's move
pub async fn apply_move(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ApplyMoveRequest>,
) -> Result<Json<ApplyMoveResponse>, ApiError> {
    let mut games = state.games_mut();
    let session = lookup_mut(&mut games, req.game_id.as_deref())?;

    // unparseable squares cannot name a legal move
    let mv = match (parse_square(req.from.as_deref()), parse_square(req.to.as_deref())) {
        (Some(from), Some(to)) => Move::new(from, to),
        _ => return Err(ApiError::IllegalMove),
    };

    let outcome = session.game.play(mv)?;
    tracing::debug!("player move {} captured {:?}", outcome.mv, outcome.captured);

    Ok(Json(ApplyMoveResponse {
        success: true,
        snapshot: Snapshot::from(&session.game),
    }))
}

#[derive(Deserialize)]
pub struct GetMoveRequest {
    pub game_id: Option<String>,
}

#[derive(Serialize)]
pub struct ComputerMove {
    pub from: Square,
    pub to: Square,
    pub piece: char,
}

/// `{"move": null}` alone when the side to move is stuck
#[derive(Serialize)]
pub struct GetMoveResponse {
    #[serde(rename = "move")]
    pub mv: Option<ComputerMove>,
    #[serde(flatten)]
    pub snapshot: Option<Snapshot>,
}

/// Let the computer choose and play a move for the side to move
pub async fn get_move(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<GetMoveRequest>,
) -> Result<Json<GetMoveResponse>, ApiError> {
    let mut rng = state.request_rng();
    let mut games = state.games_mut();
    let session = lookup_mut(&mut games, req.game_id.as_deref())?;
    let game = &mut session.game;

    let Some(mv) = choose_move(game.board(), game.side_to_move(), &mut rng) else {
        tracing::info!("{} has no legal move", game.side_to_move());
        return Ok(Json(GetMoveResponse {
            mv: None,
            snapshot: None,
        }));
    };

    let outcome = game.play(mv)?;
    tracing::debug!("computer move {} captured {:?}", outcome.mv, outcome.captured);

    Ok(Json(GetMoveResponse {
        mv: Some(ComputerMove {
            from: outcome.mv.from,
            to: outcome.mv.to,
            piece: outcome.piece.tag(),
        }),
        snapshot: Some(Snapshot::from(&*game)),
    }))
}

// ============================================================================
// HELPERS
// ============================================================================

fn lookup<'a>(
    games: &'a HashMap<String, GameSession>,
    id: Option<&str>,
) -> Result<&'a GameSession, ApiError> {
    id.and_then(|id| games.get(id)).ok_or(ApiError::InvalidGameId)
}

fn lookup_mut<'a>(
    games: &'a mut HashMap<String, GameSession>,
    id: Option<&str>,
) -> Result<&'a mut GameSession, ApiError> {
    id.and_then(|id| games.get_mut(id)).ok_or(ApiError::InvalidGameId)
}

fn parse_square(text: Option<&str>) -> Option<Square> {
    text.and_then(|t| t.parse().ok())
}
