//! Board geometry endpoint

use axum::Json;
use raumschach_core::Square;
use serde::Serialize;

#[derive(Serialize)]
pub struct BoardInfo {
    pub size: i8,
    pub squares: Vec<Square>,
    pub levels: Vec<&'static str>,
}

/// Every square name in text order, for clients laying out the cube
pub async fn get_board() -> Json<BoardInfo> {
    Json(BoardInfo {
        size: raumschach_core::board::SIZE,
        squares: Square::all().collect(),
        levels: vec!["A", "B", "C", "D", "E"],
    })
}
