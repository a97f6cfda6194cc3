//! Random positions: a uniform random walk from the initial position.

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;
use shakmaty::{Chess, Position};

/// Default number of random plies to play from the start.
pub const DEFAULT_PLIES: RangeInclusive<u32> = 6..=24;

/// Play a random number of uniformly random legal moves (count drawn from
/// `plies`), stopping early if the game ends. Returns the position and the
/// number of plies actually played.
pub fn random_walk<R: Rng>(rng: &mut R, plies: RangeInclusive<u32>) -> (Chess, u32) {
    let target = if plies.is_empty() {
        *plies.start()
    } else {
        rng.gen_range(plies)
    };

    let mut pos = Chess::default();
    let mut played = 0;

    while played < target && !pos.is_game_over() {
        let legals = pos.legal_moves();
        let Some(mv) = legals.choose(rng) else {
            break;
        };
        pos.play_unchecked(mv.clone());
        played += 1;
    }

    (pos, played)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::position::to_fen;

    #[test]
    fn test_ply_count_within_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let (pos, played) = random_walk(&mut rng, 6..=24);
            assert!(played <= 24);
            if !pos.is_game_over() {
                assert!(played >= 6);
            }
        }
    }

    #[test]
    fn test_zero_plies_is_start_position() {
        let mut rng = StdRng::seed_from_u64(1);
        let (pos, played) = random_walk(&mut rng, 0..=0);
        assert_eq!(played, 0);
        assert_eq!(to_fen(&pos), to_fen(&Chess::default()));
    }

    #[test]
    fn test_seeded_walk_is_deterministic() {
        let (a, _) = random_walk(&mut StdRng::seed_from_u64(42), 10..=10);
        let (b, _) = random_walk(&mut StdRng::seed_from_u64(42), 10..=10);
        assert_eq!(to_fen(&a), to_fen(&b));
    }
}
