//! Generate one puzzle from the cloud eval and print it as JSON.
//!
//! Usage: cargo run --bin generate-puzzle -- [easy|medium|hard]
//!
//! Reads the same environment variables as the server.

use rand::rngs::StdRng;
use rand::SeedableRng;
use server::clients::lichess::LichessClient;
use server::config::Config;
use trainer_core::difficulty::Difficulty;
use trainer_core::generator::{GenerationOutcome, PuzzleGenerator};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let difficulty: Difficulty = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => Difficulty::default(),
    };

    let config = Config::from_env();
    let client = LichessClient::new(&config)?;
    let generator = PuzzleGenerator::new(&client, config.generator_config(difficulty));

    eprintln!(
        "Generating {} puzzle (depth {}, gap {}, up to {} attempts)...",
        difficulty,
        generator.config().depth,
        generator.config().min_gap,
        generator.config().max_attempts
    );

    let mut rng = StdRng::from_entropy();
    let outcome = generator.generate(&mut rng).await;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    if let GenerationOutcome::Exhausted { attempts } = outcome {
        eprintln!("No puzzle found after {attempts} attempts");
        std::process::exit(1);
    }

    Ok(())
}
