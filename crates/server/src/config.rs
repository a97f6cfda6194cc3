use std::env;
use std::ops::RangeInclusive;
use std::time::Duration;

use trainer_core::difficulty::Difficulty;
use trainer_core::generator::{GeneratorConfig, DEFAULT_MAX_ATTEMPTS};
use trainer_core::sampler::DEFAULT_PLIES;

pub const DEFAULT_CLOUD_EVAL_URL: &str = "https://lichess.org/api/cloud-eval";

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cloud_eval_url: String,
    pub cloud_eval_timeout: Duration,
    /// Lines requested per evaluation; the classifier needs at least two
    pub cloud_eval_multi_pv: u32,
    pub user_agent: String,
    pub max_attempts: u32,
    pub random_plies: RangeInclusive<u32>,
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

impl Config {
    pub fn from_env() -> Self {
        let plies_min = parsed("RANDOM_PLIES_MIN").unwrap_or(*DEFAULT_PLIES.start());
        let plies_max = parsed("RANDOM_PLIES_MAX").unwrap_or(*DEFAULT_PLIES.end());

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parsed("PORT").unwrap_or(8000),
            cloud_eval_url: env::var("CLOUD_EVAL_URL")
                .unwrap_or_else(|_| DEFAULT_CLOUD_EVAL_URL.to_string()),
            cloud_eval_timeout: Duration::from_secs(parsed("CLOUD_EVAL_TIMEOUT_SECS").unwrap_or(10)),
            cloud_eval_multi_pv: parsed::<u32>("CLOUD_EVAL_MULTI_PV").unwrap_or(2).max(2),
            user_agent: env::var("CLOUD_EVAL_USER_AGENT")
                .unwrap_or_else(|_| "ChessPuzzleTrainer/1.0".to_string()),
            max_attempts: parsed("PUZZLE_MAX_ATTEMPTS").unwrap_or(DEFAULT_MAX_ATTEMPTS),
            random_plies: plies_min.min(plies_max)..=plies_max.max(plies_min),
        }
    }

    /// Generation settings for one request at the given difficulty.
    pub fn generator_config(&self, difficulty: Difficulty) -> GeneratorConfig {
        GeneratorConfig {
            max_attempts: self.max_attempts,
            plies: self.random_plies.clone(),
            ..GeneratorConfig::for_difficulty(difficulty)
        }
    }
}
