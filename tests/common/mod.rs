#![allow(dead_code)]

use std::future::{ready, Future};
use std::sync::atomic::{AtomicU32, Ordering};

use shakmaty::{CastlingMode, Position};
use trainer_core::evaluation::{CandidateLine, EvaluationResult, Evaluator, Score};
use trainer_core::position::parse_fen;
use trainer_core::TrainerError;

/// Evaluator driven by a closure over (fen, call index), counting calls.
pub struct ScriptedEvaluator<F> {
    script: F,
    calls: AtomicU32,
}

impl<F> ScriptedEvaluator<F>
where
    F: Fn(&str, u32) -> Result<EvaluationResult, TrainerError> + Sync,
{
    pub fn new(script: F) -> Self {
        Self {
            script,
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<F> Evaluator for ScriptedEvaluator<F>
where
    F: Fn(&str, u32) -> Result<EvaluationResult, TrainerError> + Sync,
{
    fn evaluate(
        &self,
        fen: &str,
        _depth: u32,
    ) -> impl Future<Output = Result<EvaluationResult, TrainerError>> + Send {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        ready((self.script)(fen, call))
    }
}

/// Build a candidate line with a single leading move.
pub fn line(rank: usize, mv: &str, score: Option<Score>) -> CandidateLine {
    CandidateLine {
        rank,
        moves: vec![mv.to_string()],
        score,
    }
}

pub fn cp(value: i32) -> Option<Score> {
    Some(Score::Centipawns(value))
}

pub fn mate(plies: i32) -> Option<Score> {
    Some(Score::Mate(plies))
}

pub fn eval(lines: Vec<CandidateLine>) -> EvaluationResult {
    EvaluationResult { depth: 14, lines }
}

/// First legal move of a position in UCI, for scripts that need a real move.
pub fn first_legal_uci(fen: &str) -> Option<String> {
    let pos = parse_fen(fen).expect("scripted FEN");
    let legals = pos.legal_moves();
    legals
        .first()
        .map(|m| m.to_uci(CastlingMode::Standard).to_string())
}
