//! Puzzle acceptance policy over engine output.
//!
//! A position becomes a puzzle when the best line is a forced mate, or when
//! the best line beats the second-best by at least the configured margin.

use shakmaty::{Chess, Color, Position};

use crate::evaluation::{CandidateLine, EvaluationResult, Score};
use crate::notation;
use crate::position;
use crate::puzzle::{Category, Puzzle};

/// Centipawn stand-in for a mate score in the second line.
pub const MATE_SCORE: i64 = 100_000;

/// Why a position was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// No evaluation, or an evaluation without lines
    NoEvaluation,
    /// Best line carries no moves
    MissingMove,
    /// Best line's leading move is not legal in the position
    IllegalMove(String),
    /// No mate and no second line to compare against
    SingleLine,
    GapTooSmall { gap: i64, required: i32 },
}

/// Score of a line from the side to move's perspective. Widened to `i64`
/// so remote scores near the `i32` bounds cannot overflow.
fn oriented_score(line: &CandidateLine, turn: Color) -> i64 {
    let white_pov = match line.score {
        Some(Score::Mate(m)) if m > 0 => MATE_SCORE - i64::from(m),
        Some(Score::Mate(m)) if m < 0 => -MATE_SCORE - i64::from(m),
        Some(Score::Mate(_)) => 0,
        _ => i64::from(line.centipawns()),
    };
    match turn {
        Color::White => white_pov,
        Color::Black => -white_pov,
    }
}

/// Classify one evaluated position.
pub fn classify(
    pos: &Chess,
    eval: Option<&EvaluationResult>,
    min_gap: i32,
) -> Result<Puzzle, Rejection> {
    let best = eval
        .and_then(EvaluationResult::best)
        .ok_or(Rejection::NoEvaluation)?;

    let leading = best.leading_move().ok_or(Rejection::MissingMove)?;
    let solution = notation::canonical_uci(pos, leading)
        .ok_or_else(|| Rejection::IllegalMove(leading.to_string()))?;

    let category = if let Some(m) = best.mate() {
        Category::MateIn { n: m.unsigned_abs() }
    } else {
        let second = eval
            .and_then(EvaluationResult::second)
            .ok_or(Rejection::SingleLine)?;
        let turn = pos.turn();
        let gap = oriented_score(best, turn) - oriented_score(second, turn);
        if gap < i64::from(min_gap) {
            return Err(Rejection::GapTooSmall {
                gap,
                required: min_gap,
            });
        }
        Category::Tactic
    };

    Ok(Puzzle {
        fen: position::to_fen(pos),
        solution,
        category,
        theme: None,
    })
}
