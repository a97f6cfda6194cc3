use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query},
    Extension, Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use trainer_core::difficulty::Difficulty;
use trainer_core::generator::{GenerationOutcome, PuzzleGenerator};
use trainer_core::library::{self, PuzzleKind};
use trainer_core::puzzle::{self, MoveJudgement, Puzzle};

use crate::clients::lichess::LichessClient;
use crate::config::Config;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct GenerateQuery {
    pub difficulty: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub difficulty: Difficulty,
    #[serde(flatten)]
    pub outcome: GenerationOutcome,
}

/// GET /api/puzzles/generate?difficulty=medium
/// Random-walk positions until the cloud eval yields a puzzle, or give up.
/// Giving up is a normal response with `"puzzle": null`.
pub async fn generate_puzzle(
    Extension(config): Extension<Config>,
    Extension(client): Extension<Arc<LichessClient>>,
    Query(q): Query<GenerateQuery>,
) -> Result<Json<GenerateResponse>, AppError> {
    let difficulty = match q.difficulty.as_deref() {
        Some(d) => d.parse()?,
        None => Difficulty::default(),
    };

    let generator = PuzzleGenerator::new(client.as_ref(), config.generator_config(difficulty));
    let mut rng = StdRng::from_entropy();
    let outcome = generator.generate(&mut rng).await;

    Ok(Json(GenerateResponse { difficulty, outcome }))
}

/// GET /api/puzzles/difficulties
pub async fn list_difficulties() -> Json<JsonValue> {
    let presets: Vec<JsonValue> = Difficulty::ALL
        .iter()
        .map(|d| {
            let preset = d.preset();
            serde_json::json!({
                "difficulty": d,
                "depth": preset.depth,
                "min_gap": preset.min_gap,
            })
        })
        .collect();
    Json(serde_json::json!(presets))
}

#[derive(Deserialize)]
pub struct LibraryQuery {
    pub kind: Option<String>,
}

/// GET /api/puzzles/library?kind=mate
pub async fn library_puzzle(Query(q): Query<LibraryQuery>) -> Result<Json<Puzzle>, AppError> {
    let kind = match q.kind.as_deref() {
        Some(k) => k.parse()?,
        None => PuzzleKind::Mate,
    };
    let mut rng = StdRng::from_entropy();
    library::random_puzzle(kind, &mut rng)
        .map(Json)
        .ok_or_else(|| AppError::Internal(format!("No library puzzles of kind {kind:?}")))
}

#[derive(Deserialize)]
pub struct CheckBody {
    pub puzzle: Puzzle,
    #[serde(rename = "move")]
    pub mv: String,
}

/// POST /api/puzzles/check
/// Judge a move against the puzzle the page is showing.
pub async fn check_move(
    body: Result<Json<CheckBody>, JsonRejection>,
) -> Result<Json<MoveJudgement>, AppError> {
    let Json(body) = body?;
    let judgement = puzzle::judge(&body.puzzle, &body.mv)?;
    tracing::debug!(input = %body.mv, ?judgement, "Move checked");
    Ok(Json(judgement))
}
