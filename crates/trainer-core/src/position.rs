//! FEN helpers on top of shakmaty.

use shakmaty::fen::{Fen, LossyFenError};
use shakmaty::{CastlingMode, Chess, EnPassantMode, FromSetup, Setup};

use crate::error::TrainerError;

pub const STANDARD_START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse a FEN string without checking legality of the position.
pub fn parse_setup(fen: &str) -> Result<Setup, TrainerError> {
    let fen: Fen = fen
        .trim()
        .parse()
        .map_err(|e| TrainerError::InvalidPositionEncoding(format!("{e}")))?;
    Ok(fen.into_setup())
}

/// Parse a FEN string into a legal, playable position.
pub fn parse_fen(fen: &str) -> Result<Chess, TrainerError> {
    let setup = parse_setup(fen)?;
    Chess::from_setup(setup, CastlingMode::Standard)
        .map_err(|e| TrainerError::InvalidPositionEncoding(format!("{e}")))
}

pub fn to_fen(pos: &Chess) -> String {
    Fen::from_position(pos, EnPassantMode::Legal).to_string()
}

pub fn setup_to_fen(setup: &Setup) -> String {
    Fen::try_from_setup(setup.clone())
        .unwrap_or_else(LossyFenError::ignore)
        .to_string()
}
