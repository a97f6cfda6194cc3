pub mod clients;
pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::clients::lichess::LichessClient;
use crate::config::Config;

/// Build the application router with its shared, read-only state.
pub fn app(config: Config, client: Arc<LichessClient>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Page + health
        .route("/", get(routes::index::index))
        .route("/health", get(routes::health::health_check))
        // Puzzles
        .route("/api/puzzles/generate", get(routes::puzzles::generate_puzzle))
        .route("/api/puzzles/difficulties", get(routes::puzzles::list_difficulties))
        .route("/api/puzzles/library", get(routes::puzzles::library_puzzle))
        .route("/api/puzzles/check", post(routes::puzzles::check_move))
        // Boards
        .route("/api/board/manual", post(routes::board::manual_board))
        .route("/api/board/validate", get(routes::board::validate_fen))
        .route("/api/board.svg", get(routes::board::board_svg))
        // Shared state
        .layer(Extension(config))
        .layer(Extension(client))
        .layer(cors)
}
