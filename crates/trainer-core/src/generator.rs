//! Bounded puzzle generation: sample a random position, score it, classify,
//! and give up after a fixed number of trials.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::{debug, info};

use crate::classifier::{classify, Rejection};
use crate::difficulty::Difficulty;
use crate::evaluation::Evaluator;
use crate::position;
use crate::puzzle::Puzzle;
use crate::sampler::{self, random_walk};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Search depth requested from the evaluation source
    pub depth: u32,
    pub min_gap: i32,
    pub max_attempts: u32,
    /// Random plies played from the start position
    pub plies: RangeInclusive<u32>,
}

impl GeneratorConfig {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let preset = difficulty.preset();
        Self {
            depth: preset.depth,
            min_gap: preset.min_gap,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            plies: sampler::DEFAULT_PLIES,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

/// Generation state machine: `Sampling` until a trial is accepted or the
/// attempt budget runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationState {
    Sampling { attempt: u32 },
    Accepted { puzzle: Puzzle, attempts: u32 },
    Exhausted { attempts: u32 },
}

/// Final result of a generation run. Exhaustion is an expected outcome.
///
/// Serializes as `{"status", "puzzle", "attempts"}` with `"puzzle": null`
/// on exhaustion, so clients always find the same three keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Accepted { puzzle: Puzzle, attempts: u32 },
    Exhausted { attempts: u32 },
}

impl GenerationOutcome {
    pub fn puzzle(&self) -> Option<&Puzzle> {
        match self {
            GenerationOutcome::Accepted { puzzle, .. } => Some(puzzle),
            GenerationOutcome::Exhausted { .. } => None,
        }
    }

    pub fn attempts(&self) -> u32 {
        match self {
            GenerationOutcome::Accepted { attempts, .. } | GenerationOutcome::Exhausted { attempts } => {
                *attempts
            }
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            GenerationOutcome::Accepted { .. } => "accepted",
            GenerationOutcome::Exhausted { .. } => "exhausted",
        }
    }
}

impl Serialize for GenerationOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GenerationOutcome", 3)?;
        state.serialize_field("status", self.status())?;
        state.serialize_field("puzzle", &self.puzzle())?;
        state.serialize_field("attempts", &self.attempts())?;
        state.end()
    }
}

pub struct PuzzleGenerator<E> {
    evaluator: E,
    config: GeneratorConfig,
}

impl<E: Evaluator + Sync> PuzzleGenerator<E> {
    pub fn new(evaluator: E, config: GeneratorConfig) -> Self {
        Self { evaluator, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run trials until one is accepted or `max_attempts` is reached.
    pub async fn generate<R: Rng + Send>(&self, rng: &mut R) -> GenerationOutcome {
        let mut state = GenerationState::Sampling { attempt: 0 };

        while let GenerationState::Sampling { attempt } = state {
            state = self.step(attempt, rng).await;
        }

        match state {
            GenerationState::Accepted { puzzle, attempts } => {
                info!(attempts, solution = %puzzle.solution, category = %puzzle.category.label(), "Puzzle accepted");
                GenerationOutcome::Accepted { puzzle, attempts }
            }
            GenerationState::Exhausted { attempts } | GenerationState::Sampling { attempt: attempts } => {
                info!(attempts, "No puzzle found within attempt budget");
                GenerationOutcome::Exhausted { attempts }
            }
        }
    }

    /// Advance the state machine by one trial.
    async fn step<R: Rng + Send>(&self, attempt: u32, rng: &mut R) -> GenerationState {
        if attempt >= self.config.max_attempts {
            return GenerationState::Exhausted { attempts: attempt };
        }
        let attempt = attempt + 1;

        match self.trial(rng).await {
            Ok(puzzle) => GenerationState::Accepted {
                puzzle,
                attempts: attempt,
            },
            Err(reason) => {
                debug!(attempt, ?reason, "Trial rejected");
                GenerationState::Sampling { attempt }
            }
        }
    }

    async fn trial<R: Rng + Send>(&self, rng: &mut R) -> Result<Puzzle, Rejection> {
        let (pos, plies) = random_walk(rng, self.config.plies.clone());
        let fen = position::to_fen(&pos);
        debug!(plies, fen = %fen, "Sampled position");

        let eval = match self.evaluator.evaluate(&fen, self.config.depth).await {
            Ok(eval) => Some(eval),
            Err(e) => {
                debug!(error = %e, "Evaluation failed");
                None
            }
        };

        classify(&pos, eval.as_ref(), self.config.min_gap)
    }
}
