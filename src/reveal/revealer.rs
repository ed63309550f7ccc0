//! Rank-match reveal.
//!
//! Hovering one of your own cards lifts every opponent card of the same
//! rank. Matching compares the structured rank only; suit never
//! participates.

use smallvec::SmallVec;

use crate::cards::Rank;
use crate::deal::{Hand, RevealState};

/// Slots touched by a reveal.
pub type RevealedSlots = SmallVec<[usize; 4]>;

/// Lifts opponent cards sharing a rank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchRevealer;

impl MatchRevealer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Lift every entry in `hand` whose rank equals `rank`.
    ///
    /// Entries of other ranks keep whatever state they had; callers reset
    /// the hand first when stale lifts must not survive. Returns the
    /// slots that were lifted, in slot order.
    ///
    /// ```
    /// use card_table::cards::{Card, CardIndex, Face, Rank};
    /// use card_table::core::LaneConfig;
    /// use card_table::deal::{Hand, HandEntry, Lane, Side};
    /// use card_table::reveal::MatchRevealer;
    ///
    /// let lane = Lane::new(Side::Bot, LaneConfig::bot());
    /// let mut bot = Hand::new(lane);
    /// for (slot, i) in [5u8, 18, 7].into_iter().enumerate() {
    ///     let card = Card::from_index(CardIndex::new(i).unwrap());
    ///     bot.push(HandEntry::new(card, slot, 0.0, &lane, Face::Placeholder));
    /// }
    ///
    /// let lifted = MatchRevealer::new().reveal(Rank::new(5).unwrap(), &mut bot);
    /// assert_eq!(lifted.as_slice(), &[0, 1]);
    /// ```
    pub fn reveal(&self, rank: Rank, hand: &mut Hand) -> RevealedSlots {
        let mut lifted = RevealedSlots::new();
        for entry in hand.iter_mut().filter(|e| e.rank() == rank) {
            entry.state = RevealState::Lifted;
            lifted.push(entry.slot);
        }
        lifted
    }
}
