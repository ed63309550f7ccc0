//! Unique-value sampling without replacement.
//!
//! The `RandomSampler` draws integers from an inclusive range, rejecting
//! any value already present in a shared [`ChosenSet`]. Every accepted
//! value is recorded in the set, so successive draws against the same set
//! never repeat. This is how the player and bot hands stay disjoint.
//!
//! ## Bounds
//!
//! The number of values still available is checked before anything is
//! drawn. A request that cannot be satisfied fails with
//! `TableError::InsufficientRange` and leaves the set untouched. Once a
//! single draw has been rejected `range size` times in a row, the sampler
//! picks uniformly among the values that remain instead of retrying.

use rustc_hash::FxHashSet;

use crate::core::{Result, TableError, TableRng, TableRngState};

/// Values already drawn in one sampling session.
///
/// Grows monotonically; there is no way to remove a value. Start a new
/// set for a new session.
#[derive(Clone, Debug, Default)]
pub struct ChosenSet {
    values: FxHashSet<u32>,
}

impl ChosenSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a value has been drawn.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        self.values.contains(&value)
    }

    /// Number of values drawn.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been drawn yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over drawn values in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.values.iter().copied()
    }

    /// Number of drawn values inside `[min, max]`.
    #[must_use]
    pub fn count_in(&self, min: u32, max: u32) -> usize {
        self.values.iter().filter(|&&v| v >= min && v <= max).count()
    }

    fn insert(&mut self, value: u32) -> bool {
        self.values.insert(value)
    }
}

/// Draws unique integers by rejection sampling.
///
/// ## Example
///
/// ```
/// use card_table::core::TableRng;
/// use card_table::deal::{ChosenSet, RandomSampler};
///
/// let mut sampler = RandomSampler::new(TableRng::new(42));
/// let mut chosen = ChosenSet::new();
///
/// let first = sampler.draw_unique(7, 0, 51, &mut chosen).unwrap();
/// let second = sampler.draw_unique(7, 0, 51, &mut chosen).unwrap();
///
/// assert_eq!(chosen.len(), 14);
/// assert!(first.iter().all(|v| !second.contains(v)));
/// ```
#[derive(Clone, Debug)]
pub struct RandomSampler {
    rng: TableRng,
}

impl RandomSampler {
    /// Create a sampler driven by `rng`.
    #[must_use]
    pub fn new(rng: TableRng) -> Self {
        Self { rng }
    }

    /// Current RNG state, for replaying later draws.
    #[must_use]
    pub fn rng_state(&self) -> TableRngState {
        self.rng.state()
    }

    /// Values that can still be drawn from `[min, max]` given `excluding`.
    pub fn remaining(min: u32, max: u32, excluding: &ChosenSet) -> Result<usize> {
        if min > max {
            return Err(TableError::InvalidRange { min, max });
        }
        let range_size = (max - min) as usize + 1;
        Ok(range_size - excluding.count_in(min, max))
    }

    /// Draw `count` distinct values from `[min, max]` that are not in
    /// `excluding`, adding each one to `excluding` as it is drawn.
    ///
    /// Output order is the draw order and carries no other meaning.
    pub fn draw_unique(
        &mut self,
        count: usize,
        min: u32,
        max: u32,
        excluding: &mut ChosenSet,
    ) -> Result<Vec<u32>> {
        let remaining = Self::remaining(min, max, excluding)?;
        if count > remaining {
            return Err(TableError::InsufficientRange {
                requested: count,
                remaining,
            });
        }

        let range_size = (max - min) as usize + 1;
        let mut drawn = Vec::with_capacity(count);

        for _ in 0..count {
            let value = self.draw_one(min, max, range_size, excluding)?;
            excluding.insert(value);
            drawn.push(value);
        }

        Ok(drawn)
    }

    fn draw_one(
        &mut self,
        min: u32,
        max: u32,
        range_size: usize,
        excluding: &ChosenSet,
    ) -> Result<u32> {
        for attempt in 0..range_size {
            let candidate = self.rng.gen_range_inclusive(min, max);
            if !excluding.contains(candidate) {
                return Ok(candidate);
            }
            tracing::trace!(candidate, attempt, "sample rejected");
        }

        tracing::trace!(range_size, "rejection limit reached, choosing among remaining");
        self.choose_remaining(min, max, excluding)
    }

    fn choose_remaining(&mut self, min: u32, max: u32, excluding: &ChosenSet) -> Result<u32> {
        let open: Vec<u32> = (min..=max).filter(|&v| !excluding.contains(v)).collect();
        self.rng
            .choose(&open)
            .copied()
            .ok_or(TableError::InsufficientRange {
                requested: 1,
                remaining: 0,
            })
    }
}
