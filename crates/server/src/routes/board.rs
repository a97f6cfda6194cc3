use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use shakmaty::{Color, Position};
use trainer_core::manual::{build_manual_board, SkippedToken};
use trainer_core::position;
use trainer_core::render::render_svg;

use crate::error::AppError;

const DEFAULT_SVG_SIZE: u32 = 480;
const MAX_SVG_SIZE: u32 = 2048;

#[derive(Deserialize)]
pub struct ManualBoardBody {
    pub pieces: String,
}

#[derive(Serialize)]
pub struct ManualBoardResponse {
    pub fen: String,
    pub placed: Vec<String>,
    pub skipped: Vec<SkippedToken>,
    /// Whether the board is also a playable position
    pub legal: bool,
}

/// POST /api/board/manual
/// Build a board from "Ke1, Qd4, pa2". Bad tokens are listed, not rejected.
pub async fn manual_board(
    body: Result<Json<ManualBoardBody>, JsonRejection>,
) -> Result<Json<ManualBoardResponse>, AppError> {
    let Json(body) = body?;
    let board = build_manual_board(&body.pieces);
    if !board.skipped.is_empty() {
        tracing::debug!(skipped = board.skipped.len(), "Manual board tokens skipped");
    }

    Ok(Json(ManualBoardResponse {
        fen: board.fen(),
        placed: board.placed.iter().map(ToString::to_string).collect(),
        legal: board.to_position().is_ok(),
        skipped: board.skipped,
    }))
}

#[derive(Deserialize)]
pub struct FenQuery {
    pub fen: String,
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub fen: String,
    pub turn: &'static str,
    pub legal_moves: usize,
    pub game_over: bool,
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// GET /api/board/validate?fen=...
/// Hand-entered FEN check; 400 with a detail message when it does not parse.
pub async fn validate_fen(
    query: Result<Query<FenQuery>, QueryRejection>,
) -> Result<Json<ValidateResponse>, AppError> {
    let Query(q) = query?;
    let pos = position::parse_fen(&q.fen)?;
    Ok(Json(ValidateResponse {
        fen: position::to_fen(&pos),
        turn: color_name(pos.turn()),
        legal_moves: pos.legal_moves().len(),
        game_over: pos.is_game_over(),
    }))
}

#[derive(Deserialize)]
pub struct SvgQuery {
    pub fen: String,
    /// "white" or "black"; defaults to the side to move
    pub orientation: Option<String>,
    pub size: Option<u32>,
}

/// GET /api/board.svg?fen=...&orientation=black&size=480
pub async fn board_svg(
    query: Result<Query<SvgQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(q) = query?;
    let setup = position::parse_setup(&q.fen)?;

    let orientation = match q.orientation.as_deref() {
        None => setup.turn,
        Some("white") => Color::White,
        Some("black") => Color::Black,
        Some(other) => {
            return Err(AppError::BadRequest(format!("Unknown orientation: {other}")));
        }
    };
    let size = q.size.unwrap_or(DEFAULT_SVG_SIZE).min(MAX_SVG_SIZE);

    let svg = render_svg(&setup.board, orientation, size);
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
