//! Scored engine lines and the seam to whatever produces them.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::TrainerError;

/// Score of a candidate line, from White's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Score {
    Centipawns(i32),
    /// Plies to forced mate; positive = White mates.
    Mate(i32),
}

/// One ranked principal variation returned by the evaluation source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateLine {
    /// 1 = best line
    pub rank: usize,
    /// UCI moves, leading move first
    pub moves: Vec<String>,
    pub score: Option<Score>,
}

impl CandidateLine {
    pub fn leading_move(&self) -> Option<&str> {
        self.moves.first().map(String::as_str)
    }

    pub fn mate(&self) -> Option<i32> {
        match self.score {
            Some(Score::Mate(m)) => Some(m),
            _ => None,
        }
    }

    /// Centipawn score; a missing score counts as 0.
    pub fn centipawns(&self) -> i32 {
        match self.score {
            Some(Score::Centipawns(cp)) => cp,
            _ => 0,
        }
    }
}

/// Ranked candidate lines for one position at one depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub depth: u32,
    pub lines: Vec<CandidateLine>,
}

impl EvaluationResult {
    pub fn best(&self) -> Option<&CandidateLine> {
        self.lines.first()
    }

    pub fn second(&self) -> Option<&CandidateLine> {
        self.lines.get(1)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Raw cloud-eval JSON document.
#[derive(Debug, Default, Deserialize)]
pub struct CloudEvalPayload {
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub pvs: Vec<CloudEvalPv>,
}

#[derive(Debug, Deserialize)]
pub struct CloudEvalPv {
    #[serde(default)]
    pub moves: String,
    pub cp: Option<i32>,
    pub mate: Option<i32>,
}

impl From<CloudEvalPayload> for EvaluationResult {
    fn from(payload: CloudEvalPayload) -> Self {
        let lines = payload
            .pvs
            .into_iter()
            .enumerate()
            .map(|(i, pv)| {
                // mate and cp are exclusive; mate wins if both are sent
                let score = match (pv.mate, pv.cp) {
                    (Some(m), _) => Some(Score::Mate(m)),
                    (None, Some(cp)) => Some(Score::Centipawns(cp)),
                    (None, None) => None,
                };
                CandidateLine {
                    rank: i + 1,
                    moves: pv.moves.split_whitespace().map(str::to_string).collect(),
                    score,
                }
            })
            .collect();

        Self {
            depth: payload.depth,
            lines,
        }
    }
}

/// Decode a cloud-eval response body.
pub fn parse_cloud_eval(body: &str) -> Result<EvaluationResult, TrainerError> {
    let payload: CloudEvalPayload = serde_json::from_str(body)
        .map_err(|e| TrainerError::EvaluationUnavailable(format!("Malformed payload: {e}")))?;
    Ok(payload.into())
}

/// Anything that can score a position: the remote cloud-eval client, or a
/// scripted source in tests.
pub trait Evaluator {
    fn evaluate(
        &self,
        fen: &str,
        depth: u32,
    ) -> impl Future<Output = Result<EvaluationResult, TrainerError>> + Send;
}

impl<T: Evaluator + Sync> Evaluator for &T {
    fn evaluate(
        &self,
        fen: &str,
        depth: u32,
    ) -> impl Future<Output = Result<EvaluationResult, TrainerError>> + Send {
        (**self).evaluate(fen, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cloud_eval_lines() {
        let body = r#"{
            "fen": "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
            "knodes": 1234,
            "depth": 30,
            "pvs": [
                {"moves": "f1b5 a7a6 b5a4", "cp": 34},
                {"moves": "d2d4 e5d4", "cp": 20}
            ]
        }"#;
        let result = parse_cloud_eval(body).unwrap();
        assert_eq!(result.depth, 30);
        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.lines[0].rank, 1);
        assert_eq!(result.lines[0].leading_move(), Some("f1b5"));
        assert_eq!(result.lines[0].score, Some(Score::Centipawns(34)));
        assert_eq!(result.lines[1].rank, 2);
        assert_eq!(result.lines[1].moves, vec!["d2d4", "e5d4"]);
    }

    #[test]
    fn test_mate_takes_precedence_over_cp() {
        let body = r#"{"depth": 20, "pvs": [{"moves": "d1h5", "cp": 900, "mate": -3}]}"#;
        let result = parse_cloud_eval(body).unwrap();
        assert_eq!(result.lines[0].mate(), Some(-3));
        assert_eq!(result.lines[0].centipawns(), 0);
    }

    #[test]
    fn test_missing_pvs_is_empty_result() {
        let result = parse_cloud_eval("{}").unwrap();
        assert!(result.is_empty());
        assert!(result.best().is_none());
    }

    #[test]
    fn test_missing_score_counts_as_zero() {
        let body = r#"{"pvs": [{"moves": "e2e4"}]}"#;
        let result = parse_cloud_eval(body).unwrap();
        assert_eq!(result.lines[0].score, None);
        assert_eq!(result.lines[0].centipawns(), 0);
    }

    #[test]
    fn test_malformed_payload_is_unavailable() {
        let err = parse_cloud_eval("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, TrainerError::EvaluationUnavailable(_)));
    }
}
