//! Manual board builder for terse piece lists like `"Ke1, Qd4, pa2, pb2"`.
//!
//! Each token is a piece letter (uppercase = White, lowercase = Black)
//! followed by a square name. Malformed tokens are skipped and reported,
//! never fatal, and no legality check is made on the result.

use std::fmt;

use serde::Serialize;
use shakmaty::{Chess, Piece, Setup, Square};

use crate::error::TrainerError;
use crate::position;

/// One parsed placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSpec {
    pub piece: Piece,
    pub square: Square,
}

impl fmt::Display for PieceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.piece.char(), self.square)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// Fewer than three characters: cannot hold a piece and a square
    TooShort,
    UnknownPiece(char),
    InvalidSquare(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedToken {
    pub token: String,
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Parse a single trimmed token such as `Ke1` or `pa2`.
pub fn parse_piece_spec(token: &str) -> Result<PieceSpec, SkipReason> {
    let mut chars = token.chars();
    let Some(letter) = chars.next() else {
        return Err(SkipReason::TooShort);
    };
    if token.chars().count() < 3 {
        return Err(SkipReason::TooShort);
    }

    let piece = Piece::from_char(letter).ok_or(SkipReason::UnknownPiece(letter))?;

    let square_name = chars.as_str();
    let square: Square = square_name
        .parse()
        .map_err(|_| SkipReason::InvalidSquare(square_name.to_string()))?;

    Ok(PieceSpec { piece, square })
}

/// A board assembled from a piece list, plus the tokens that were dropped.
#[derive(Debug, Clone)]
pub struct ManualBoard {
    pub setup: Setup,
    pub placed: Vec<PieceSpec>,
    pub skipped: Vec<SkippedToken>,
}

impl ManualBoard {
    pub fn fen(&self) -> String {
        position::setup_to_fen(&self.setup)
    }

    pub fn piece_count(&self) -> usize {
        self.setup.board.occupied().count()
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.setup.board.piece_at(square)
    }

    /// Validate the board as a playable position.
    pub fn to_position(&self) -> Result<Chess, TrainerError> {
        position::parse_fen(&self.fen())
    }
}

/// Build a board from comma-separated tokens. Never fails; later tokens on
/// the same square replace earlier ones.
pub fn build_manual_board(text: &str) -> ManualBoard {
    let mut setup = Setup::empty();
    let mut placed = Vec::new();
    let mut skipped = Vec::new();

    for raw in text.split(',') {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        match parse_piece_spec(token) {
            Ok(spec) => {
                setup.board.set_piece_at(spec.square, spec.piece);
                placed.push(spec);
            }
            Err(reason) => skipped.push(SkippedToken {
                token: token.to_string(),
                reason,
            }),
        }
    }

    ManualBoard {
        setup,
        placed,
        skipped,
    }
}
