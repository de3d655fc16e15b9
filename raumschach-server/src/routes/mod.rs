//! HTTP route handlers

pub mod board;
pub mod game;
pub mod pieces;
pub mod status;
