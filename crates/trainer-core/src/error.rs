//! Trainer error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrainerError {
    #[error("Invalid FEN: {0}")]
    InvalidPositionEncoding(String),

    #[error("Evaluation unavailable: {0}")]
    EvaluationUnavailable(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Unknown puzzle kind: {0}")]
    UnknownPuzzleKind(String),
}
