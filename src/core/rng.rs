//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use card_table::core::TableRng;
//!
//! let mut rng = TableRng::new(42);
//! let a = rng.gen_range_inclusive(0, 51);
//!
//! let mut again = TableRng::new(42);
//! assert_eq!(a, again.gen_range_inclusive(0, 51));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing the sampler.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct TableRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl TableRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is available through [`TableRng::seed`] so the
    /// session can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[min, max]`, both ends included.
    ///
    /// Panics if `min > max`; the sampler validates ranges before calling.
    pub fn gen_range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        self.inner.gen_range(min..=max)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> TableRngState {
        TableRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &TableRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for replaying a deal.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_range_covers_both_ends() {
        let mut rng = TableRng::new(7);
        let mut seen = [false; 52];
        for _ in 0..5000 {
            let v = rng.gen_range_inclusive(0, 51);
            assert!(v <= 51);
            seen[v as usize] = true;
        }
        // 51 is the king of spades and must be dealable
        assert!(seen[0] && seen[51]);
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = TableRng::new(7);
        for _ in 0..10 {
            assert_eq!(rng.gen_range_inclusive(5, 5), 5);
        }
    }

    #[test]
    fn test_entropy_seed_replays_stream() {
        let mut rng = TableRng::from_entropy();
        let mut replay = TableRng::new(rng.seed());

        for _ in 0..20 {
            assert_eq!(rng.gen_range_inclusive(0, 51), replay.gen_range_inclusive(0, 51));
        }
    }

    #[test]
    fn test_state_mid_stream_resumes_deal() {
        let mut rng = TableRng::new(42);
        let first_hand: Vec<_> = (0..7).map(|_| rng.gen_range_inclusive(0, 51)).collect();

        let checkpoint = rng.state();
        assert_eq!(checkpoint.seed, 42);
        assert!(checkpoint.word_pos > 0);
        let second_hand: Vec<_> = (0..7).map(|_| rng.gen_range_inclusive(0, 51)).collect();

        let mut resumed = TableRng::from_state(&checkpoint);
        let again: Vec<_> = (0..7).map(|_| resumed.gen_range_inclusive(0, 51)).collect();
        assert_eq!(second_hand, again);
        assert_eq!(resumed.seed(), 42);

        let mut fresh = TableRng::from_state(&TableRng::new(42).state());
        let replayed: Vec<_> = (0..7).map(|_| fresh.gen_range_inclusive(0, 51)).collect();
        assert_eq!(first_hand, replayed);
    }

    #[test]
    fn test_choose_from_remaining_values() {
        let mut rng = TableRng::new(3);
        let open = [4u32, 17, 51];
        for _ in 0..20 {
            assert!(open.contains(rng.choose(&open).unwrap()));
        }
        assert!(rng.choose::<u32>(&[]).is_none());
    }

    #[test]
    fn test_state_json_shape() {
        let state = TableRng::new(9).state();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"seed":9,"word_pos":0}"#);
    }
}
