//! Bounded generation loop against scripted evaluators.

mod common;

use common::{cp, eval, first_legal_uci, line, mate, ScriptedEvaluator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use trainer_core::difficulty::Difficulty;
use trainer_core::evaluation::EvaluationResult;
use trainer_core::generator::{GenerationOutcome, GeneratorConfig, PuzzleGenerator};
use trainer_core::position::STANDARD_START_FEN;
use trainer_core::puzzle::Category;
use trainer_core::TrainerError;

fn config(max_attempts: u32, min_gap: i32) -> GeneratorConfig {
    GeneratorConfig {
        depth: 12,
        min_gap,
        max_attempts,
        plies: 0..=0,
    }
}

#[tokio::test]
async fn exhausts_after_max_attempts_when_evaluation_fails() {
    let evaluator = ScriptedEvaluator::new(|_: &str, _: u32| {
        Err(TrainerError::EvaluationUnavailable("HTTP 404".to_string()))
    });
    let generator = PuzzleGenerator::new(&evaluator, config(5, 100));

    let outcome = generator.generate(&mut StdRng::seed_from_u64(1)).await;

    assert_eq!(outcome, GenerationOutcome::Exhausted { attempts: 5 });
    assert!(outcome.puzzle().is_none());
    assert_eq!(evaluator.calls(), 5);
}

#[tokio::test]
async fn exhausts_on_empty_evaluations() {
    let evaluator = ScriptedEvaluator::new(|_: &str, _: u32| Ok(EvaluationResult::default()));
    let generator = PuzzleGenerator::new(&evaluator, config(3, 100));

    let outcome = generator.generate(&mut StdRng::seed_from_u64(2)).await;

    assert_eq!(outcome.attempts(), 3);
    assert_eq!(evaluator.calls(), 3);
}

#[tokio::test]
async fn zero_budget_never_calls_the_evaluator() {
    let evaluator = ScriptedEvaluator::new(|_: &str, _: u32| Ok(EvaluationResult::default()));
    let generator = PuzzleGenerator::new(&evaluator, config(0, 100));

    let outcome = generator.generate(&mut StdRng::seed_from_u64(3)).await;

    assert_eq!(outcome, GenerationOutcome::Exhausted { attempts: 0 });
    assert_eq!(evaluator.calls(), 0);
}

#[tokio::test]
async fn accepts_mate_on_first_trial() {
    let evaluator = ScriptedEvaluator::new(|fen: &str, _: u32| {
        let mv = first_legal_uci(fen).unwrap();
        Ok(eval(vec![line(1, &mv, mate(-3))]))
    });
    let generator = PuzzleGenerator::new(&evaluator, config(50, 100));

    let outcome = generator.generate(&mut StdRng::seed_from_u64(4)).await;

    let GenerationOutcome::Accepted { puzzle, attempts } = outcome else {
        panic!("expected a puzzle, got {outcome:?}");
    };
    assert_eq!(attempts, 1);
    assert_eq!(puzzle.category, Category::MateIn { n: 3 });
    assert_eq!(puzzle.fen, STANDARD_START_FEN);
    assert_eq!(Some(puzzle.solution), first_legal_uci(STANDARD_START_FEN));
}

#[tokio::test]
async fn retries_until_a_trial_is_accepted() {
    let evaluator = ScriptedEvaluator::new(|_: &str, call: u32| {
        if call < 4 {
            Err(TrainerError::EvaluationUnavailable("timeout".to_string()))
        } else {
            Ok(eval(vec![line(1, "e2e4", cp(300)), line(2, "d2d4", cp(100))]))
        }
    });
    let generator = PuzzleGenerator::new(&evaluator, config(50, 200));

    let outcome = generator.generate(&mut StdRng::seed_from_u64(5)).await;

    assert_eq!(outcome.attempts(), 5);
    let puzzle = outcome.puzzle().unwrap();
    assert_eq!(puzzle.category, Category::Tactic);
    assert_eq!(puzzle.solution, "e2e4");
    assert_eq!(evaluator.calls(), 5);
}

#[tokio::test]
async fn small_gaps_never_qualify() {
    let evaluator = ScriptedEvaluator::new(|_: &str, _: u32| {
        Ok(eval(vec![line(1, "e2e4", cp(40)), line(2, "d2d4", cp(30))]))
    });
    let generator = PuzzleGenerator::new(&evaluator, config(8, 150));

    let outcome = generator.generate(&mut StdRng::seed_from_u64(6)).await;

    assert_eq!(outcome, GenerationOutcome::Exhausted { attempts: 8 });
}

#[tokio::test]
async fn random_positions_reach_the_evaluator() {
    let evaluator = ScriptedEvaluator::new(|fen: &str, _: u32| {
        assert_ne!(fen, STANDARD_START_FEN);
        // A walk that ends in mate has no move to offer
        let lines = first_legal_uci(fen)
            .map(|mv| vec![line(1, &mv, mate(1))])
            .unwrap_or_default();
        Ok(eval(lines))
    });
    let cfg = GeneratorConfig {
        plies: 6..=6,
        ..GeneratorConfig::for_difficulty(Difficulty::Easy)
    };
    let generator = PuzzleGenerator::new(&evaluator, cfg);

    let outcome = generator.generate(&mut StdRng::seed_from_u64(7)).await;

    assert!(outcome.puzzle().is_some());
    assert!(evaluator.calls() >= 1);
}

#[test]
fn difficulty_config_defaults() {
    let cfg = GeneratorConfig::for_difficulty(Difficulty::Medium);
    assert_eq!(cfg.depth, 14);
    assert_eq!(cfg.min_gap, 150);
    assert_eq!(cfg.max_attempts, 50);
    assert_eq!(cfg.plies, 6..=24);
    assert_eq!(GeneratorConfig::default(), cfg);
}
