//! Hands of dealt cards and their reveal state.
//!
//! A `Hand` is an ordered row of `HandEntry` values belonging to one
//! side of the table. Each entry knows its card, its slot, where it rests
//! in its lane, and whether it is currently lifted.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardIndex, Face, Rank};
use crate::core::LaneConfig;
use crate::pick::Vec3;

/// Which party a hand belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Bot,
}

impl Side {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Bot => "bot",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed row a side's cards are placed in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub side: Side,
    pub config: LaneConfig,
}

impl Lane {
    #[must_use]
    pub const fn new(side: Side, config: LaneConfig) -> Self {
        Self { side, config }
    }

    /// Resting position of a card at lateral offset `x`.
    #[must_use]
    pub fn base_position(&self, x: f32) -> Vec3 {
        Vec3::new(x, self.config.base_y, self.config.z)
    }
}

/// Visibility/lift mode of one entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    #[default]
    Normal,
    Lifted,
}

/// One dealt card placed in a hand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandEntry {
    pub card: Card,
    /// Position within the hand, left to right.
    pub slot: usize,
    /// Resting position in the lane.
    pub base: Vec3,
    /// Height while lifted.
    pub lifted_y: f32,
    pub state: RevealState,
    /// Front artwork.
    pub front: Face,
}

impl HandEntry {
    /// Create an entry resting in `lane` at lateral offset `x`.
    #[must_use]
    pub fn new(card: Card, slot: usize, x: f32, lane: &Lane, front: Face) -> Self {
        Self {
            card,
            slot,
            base: lane.base_position(x),
            lifted_y: lane.config.lifted_y,
            state: RevealState::Normal,
            front,
        }
    }

    #[must_use]
    pub fn index(&self) -> CardIndex {
        self.card.index()
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.card.rank
    }

    #[must_use]
    pub fn is_lifted(&self) -> bool {
        self.state == RevealState::Lifted
    }

    /// Current position, taking the lift into account.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        match self.state {
            RevealState::Normal => self.base,
            RevealState::Lifted => Vec3::new(self.base.x, self.lifted_y, self.base.z),
        }
    }
}

/// Ordered cards dealt to one side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    lane: Lane,
    entries: SmallVec<[HandEntry; 8]>,
}

impl Hand {
    /// Create an empty hand in `lane`.
    #[must_use]
    pub fn new(lane: Lane) -> Self {
        Self {
            lane,
            entries: SmallVec::new(),
        }
    }

    /// Append an entry.
    pub fn push(&mut self, entry: HandEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn lane(&self) -> &Lane {
        &self.lane
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.lane.side
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&HandEntry> {
        self.entries.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut HandEntry> {
        self.entries.get_mut(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HandEntry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut HandEntry> {
        self.entries.iter_mut()
    }

    /// Card indices in slot order.
    #[must_use]
    pub fn indices(&self) -> Vec<CardIndex> {
        self.entries.iter().map(HandEntry::index).collect()
    }

    /// Slots currently lifted.
    #[must_use]
    pub fn lifted_slots(&self) -> Vec<usize> {
        self.entries
            .iter()
            .filter(|e| e.is_lifted())
            .map(|e| e.slot)
            .collect()
    }

    /// Set one entry's state. Returns `false` if the slot does not exist.
    pub fn set_state(&mut self, slot: usize, state: RevealState) -> bool {
        match self.entries.get_mut(slot) {
            Some(entry) => {
                entry.state = state;
                true
            }
            None => false,
        }
    }

    /// Return every entry to `Normal`. Returns how many entries changed.
    pub fn reset(&mut self) -> usize {
        let mut changed = 0;
        for entry in self.entries.iter_mut().filter(|e| e.is_lifted()) {
            entry.state = RevealState::Normal;
            changed += 1;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn hand_of(indices: &[u8]) -> Hand {
        let lane = Lane::new(Side::Bot, LaneConfig::bot());
        let mut hand = Hand::new(lane);
        for (slot, &i) in indices.iter().enumerate() {
            let card = Card::from_index(CardIndex::new(i).unwrap());
            hand.push(HandEntry::new(card, slot, slot as f32 * 4.0, &lane, Face::Placeholder));
        }
        hand
    }

    #[test]
    fn test_entry_position_follows_state() {
        let mut hand = hand_of(&[5]);
        let entry = hand.get(0).unwrap();
        assert_eq!(entry.position(), Vec3::new(0.0, 15.0, 0.0));

        hand.set_state(0, RevealState::Lifted);
        let entry = hand.get(0).unwrap();
        assert!(entry.is_lifted());
        assert_eq!(entry.position(), Vec3::new(0.0, 21.0, 0.0));
    }

    #[test]
    fn test_indices_and_ranks() {
        let hand = hand_of(&[5, 18, 51]);
        let expected: Vec<_> = [5, 18, 51].into_iter().filter_map(CardIndex::new).collect();
        assert_eq!(hand.indices(), expected);
        assert_eq!(hand.get(1).unwrap().rank().raw(), 5);
        assert_eq!(hand.get(1).unwrap().card.suit, Suit::Diamonds);
        assert_eq!(hand.side(), Side::Bot);
    }

    #[test]
    fn test_reset() {
        let mut hand = hand_of(&[1, 2, 3]);
        hand.set_state(0, RevealState::Lifted);
        hand.set_state(2, RevealState::Lifted);
        assert_eq!(hand.lifted_slots(), vec![0, 2]);

        assert_eq!(hand.reset(), 2);
        assert!(hand.lifted_slots().is_empty());
        assert_eq!(hand.reset(), 0);
    }

    #[test]
    fn test_set_state_missing_slot() {
        let mut hand = hand_of(&[1]);
        assert!(!hand.set_state(4, RevealState::Lifted));
    }

    #[test]
    fn test_empty_hand() {
        let hand = Hand::new(Lane::new(Side::Player, LaneConfig::player()));
        assert!(hand.is_empty());
        assert_eq!(hand.len(), 0);
        assert!(hand.get(0).is_none());
    }
}
