//! Built-in puzzles for when no evaluation source is wanted.

use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TrainerError;
use crate::puzzle::{Category, Puzzle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleKind {
    Mate,
    Tactic,
}

impl FromStr for PuzzleKind {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mate" => Ok(PuzzleKind::Mate),
            "tactic" => Ok(PuzzleKind::Tactic),
            _ => Err(TrainerError::UnknownPuzzleKind(s.to_string())),
        }
    }
}

struct Entry {
    fen: &'static str,
    solution: &'static str,
    category: Category,
    theme: &'static str,
}

const MATES: &[Entry] = &[
    Entry {
        fen: "6k1/5ppp/8/8/8/2Q5/5PPP/6K1 w - - 0 1",
        solution: "c3c8",
        category: Category::MateIn { n: 1 },
        theme: "Back rank",
    },
    Entry {
        fen: "6k1/5ppp/8/8/8/5Q2/5PPP/6K1 w - - 0 1",
        solution: "f3a8",
        category: Category::MateIn { n: 1 },
        theme: "Back rank",
    },
    Entry {
        fen: "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1",
        solution: "a1a8",
        category: Category::MateIn { n: 1 },
        theme: "Back rank",
    },
    Entry {
        fen: "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
        solution: "f3f7",
        category: Category::MateIn { n: 1 },
        theme: "Scholar's mate",
    },
];

const TACTICS: &[Entry] = &[
    Entry {
        fen: "rnbqkbnr/pppp1ppp/8/4p3/3PP3/5N2/PPP2PPP/RNBQKB1R w KQkq - 1 3",
        solution: "f3e5",
        category: Category::Tactic,
        theme: "Winning a pawn",
    },
    Entry {
        fen: "r3k3/8/8/1N6/8/8/8/4K3 w - - 0 1",
        solution: "b5c7",
        category: Category::Tactic,
        theme: "Fork",
    },
    Entry {
        fen: "4k3/8/8/8/q7/8/8/3QK3 w - - 0 1",
        solution: "d1a4",
        category: Category::Tactic,
        theme: "Hanging piece",
    },
];

fn entries(kind: PuzzleKind) -> &'static [Entry] {
    match kind {
        PuzzleKind::Mate => MATES,
        PuzzleKind::Tactic => TACTICS,
    }
}

fn to_puzzle(entry: &Entry) -> Puzzle {
    Puzzle {
        fen: entry.fen.to_string(),
        solution: entry.solution.to_string(),
        category: entry.category,
        theme: Some(entry.theme.to_string()),
    }
}

/// All library puzzles of one kind.
pub fn puzzles(kind: PuzzleKind) -> Vec<Puzzle> {
    entries(kind).iter().map(to_puzzle).collect()
}

/// Pick one library puzzle of the given kind uniformly at random.
pub fn random_puzzle<R: Rng>(kind: PuzzleKind, rng: &mut R) -> Option<Puzzle> {
    entries(kind).choose(rng).map(to_puzzle)
}
