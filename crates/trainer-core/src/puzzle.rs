//! Puzzle data model and move judging

use serde::{Deserialize, Serialize};

use crate::error::TrainerError;
use crate::notation;
use crate::position;

/// What kind of answer the puzzle expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Category {
    /// Forced mate, N = plies reported by the evaluation source
    MateIn { n: u32 },
    /// A clearly best non-mating move
    Tactic,
}

impl Category {
    pub fn label(&self) -> String {
        match self {
            Category::MateIn { n } => format!("Mate in {n}"),
            Category::Tactic => "Tactic".to_string(),
        }
    }
}

/// An accepted training position. Replaced wholesale, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub fen: String,
    /// Correct move in UCI notation
    pub solution: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Outcome of checking a player's move against a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MoveJudgement {
    Correct,
    Incorrect { played: String },
    /// The input was not understood as a legal move here
    Unparseable { input: String },
}

/// Judge `input` (UCI or SAN) against the puzzle's solution.
///
/// Fails only when the puzzle's own FEN is unreadable.
pub fn judge(puzzle: &Puzzle, input: &str) -> Result<MoveJudgement, TrainerError> {
    let pos = position::parse_fen(&puzzle.fen)?;

    let Some(played) = notation::to_machine_notation(&pos, input) else {
        return Ok(MoveJudgement::Unparseable {
            input: input.trim().to_string(),
        });
    };

    // Solution may come from the engine in a non-canonical spelling
    let expected = notation::canonical_uci(&pos, &puzzle.solution)
        .unwrap_or_else(|| puzzle.solution.clone());

    if played == expected {
        Ok(MoveJudgement::Correct)
    } else {
        Ok(MoveJudgement::Incorrect { played })
    }
}
