//! API error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use raumschach_core::EngineError;
use serde_json::json;

/// Request rejection, rendered as 400 `{"error": "..."}`
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    InvalidGameId,
    NotYourPiece,
    IllegalMove,
    BadRequest(String),
}

impl ApiError {
    fn message(&self) -> String {
        match self {
            ApiError::InvalidGameId => "Invalid game_id".to_string(),
            ApiError::NotYourPiece => "Not your piece".to_string(),
            ApiError::IllegalMove => "Illegal move".to_string(),
            ApiError::BadRequest(msg) => msg.clone(),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::NotYourPiece { .. } => ApiError::NotYourPiece,
            EngineError::IllegalMove { .. } => ApiError::IllegalMove,
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("rejected request: {:?}", self);
        (StatusCode::BAD_REQUEST, Json(json!({ "error": self.message() }))).into_response()
    }
}
