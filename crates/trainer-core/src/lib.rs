//! Core logic for the chess puzzle trainer: puzzle selection from engine
//! output, manual board construction, move notation handling and rendering.

pub mod classifier;
pub mod difficulty;
pub mod error;
pub mod evaluation;
pub mod generator;
pub mod library;
pub mod manual;
pub mod notation;
pub mod position;
pub mod puzzle;
pub mod render;
pub mod sampler;

pub use error::TrainerError;
