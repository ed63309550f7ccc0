//! Hover state machine.
//!
//! Driven once per pointer-move event with the result of hit-testing the
//! player hand:
//!
//! - A hit moves to `Hovering`: both hands reset, the hovered entry is
//!   lifted, and bot entries of the same rank are revealed.
//! - A miss moves to `Idle`: both hands reset.
//!
//! Every transition completes synchronously inside `apply`.

use serde::{Deserialize, Serialize};

use super::revealer::{MatchRevealer, RevealedSlots};
use crate::cards::Rank;
use crate::deal::{Hand, RevealState};
use crate::pick::Hit;

/// Current hover state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverState {
    /// No player card under the pointer.
    #[default]
    Idle,
    /// The player card in `slot` is under the pointer.
    Hovering { slot: usize, rank: Rank },
}

/// What a pointer move changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HoverTransition {
    /// A new player card became hovered.
    Entered {
        slot: usize,
        rank: Rank,
        /// Bot slots lifted by the rank match.
        revealed: RevealedSlots,
    },
    /// The pointer stayed over the same card.
    Unchanged,
    /// The pointer left the player hand.
    Left,
    /// The pointer was and remains outside the player hand.
    Idle,
}

/// Tracks hover state across pointer moves.
#[derive(Clone, Debug, Default)]
pub struct HoverTracker {
    state: HoverState,
    revealer: MatchRevealer,
}

impl HoverTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> HoverState {
        self.state
    }

    /// Apply one hit-test result to both hands.
    pub fn apply(&mut self, hit: Option<Hit>, player: &mut Hand, bot: &mut Hand) -> HoverTransition {
        let hovered = hit.and_then(|h| player.get(h.slot).map(|e| (h.slot, e.rank())));

        match (self.state, hovered) {
            (HoverState::Hovering { slot: current, .. }, Some((slot, _))) if current == slot => {
                HoverTransition::Unchanged
            }
            (_, Some((slot, rank))) => {
                player.reset();
                bot.reset();
                player.set_state(slot, RevealState::Lifted);
                let revealed = self.revealer.reveal(rank, bot);

                tracing::debug!(slot, %rank, revealed = ?revealed.as_slice(), "hover entered");
                self.state = HoverState::Hovering { slot, rank };
                HoverTransition::Entered {
                    slot,
                    rank,
                    revealed,
                }
            }
            (previous, None) => {
                player.reset();
                bot.reset();
                self.state = HoverState::Idle;
                match previous {
                    HoverState::Hovering { slot, .. } => {
                        tracing::debug!(slot, "hover left");
                        HoverTransition::Left
                    }
                    HoverState::Idle => HoverTransition::Idle,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardIndex, Face};
    use crate::core::LaneConfig;
    use crate::deal::{HandEntry, Lane, Side};

    fn hand(side: Side, lane: LaneConfig, indices: &[u8]) -> Hand {
        let lane = Lane::new(side, lane);
        let mut hand = Hand::new(lane);
        for (slot, &i) in indices.iter().enumerate() {
            hand.push(HandEntry::new(
                Card::from_index(CardIndex::new(i).unwrap()),
                slot,
                slot as f32 * 4.0,
                &lane,
                Face::Placeholder,
            ));
        }
        hand
    }

    fn hit(slot: usize) -> Option<Hit> {
        Some(Hit {
            slot,
            distance: 10.0,
        })
    }

    fn table() -> (Hand, Hand) {
        // Player: 5♣ 9♣ 1♦   Bot: 5♦ 5♥ 9♠ 2♣
        let player = hand(Side::Player, LaneConfig::player(), &[5, 9, 14]);
        let bot = hand(Side::Bot, LaneConfig::bot(), &[18, 31, 48, 2]);
        (player, bot)
    }

    #[test]
    fn test_enter_lifts_and_reveals() {
        let (mut player, mut bot) = table();
        let mut tracker = HoverTracker::new();

        let transition = tracker.apply(hit(0), &mut player, &mut bot);

        match transition {
            HoverTransition::Entered { slot, rank, revealed } => {
                assert_eq!(slot, 0);
                assert_eq!(rank.raw(), 5);
                assert_eq!(revealed.as_slice(), &[0, 1]);
            }
            other => panic!("unexpected transition {:?}", other),
        }
        assert_eq!(player.lifted_slots(), vec![0]);
        assert_eq!(player.get(0).unwrap().position().y, 1.0);
        assert_eq!(bot.lifted_slots(), vec![0, 1]);
        assert!(matches!(tracker.state(), HoverState::Hovering { slot: 0, .. }));
    }

    #[test]
    fn test_same_card_is_unchanged() {
        let (mut player, mut bot) = table();
        let mut tracker = HoverTracker::new();

        tracker.apply(hit(0), &mut player, &mut bot);
        assert_eq!(tracker.apply(hit(0), &mut player, &mut bot), HoverTransition::Unchanged);
        assert_eq!(bot.lifted_slots(), vec![0, 1]);
    }

    #[test]
    fn test_switching_cards_clears_previous_reveal() {
        let (mut player, mut bot) = table();
        let mut tracker = HoverTracker::new();

        tracker.apply(hit(0), &mut player, &mut bot);
        tracker.apply(hit(1), &mut player, &mut bot);

        assert_eq!(player.lifted_slots(), vec![1]);
        assert_eq!(bot.lifted_slots(), vec![2]);
    }

    #[test]
    fn test_hover_without_matches() {
        let (mut player, mut bot) = table();
        let mut tracker = HoverTracker::new();

        let transition = tracker.apply(hit(2), &mut player, &mut bot);

        assert!(matches!(
            transition,
            HoverTransition::Entered { ref revealed, .. } if revealed.is_empty()
        ));
        assert_eq!(player.lifted_slots(), vec![2]);
        assert!(bot.lifted_slots().is_empty());
    }

    #[test]
    fn test_leave_resets_both_hands() {
        let (mut player, mut bot) = table();
        let mut tracker = HoverTracker::new();

        tracker.apply(hit(0), &mut player, &mut bot);
        assert_eq!(tracker.apply(None, &mut player, &mut bot), HoverTransition::Left);

        assert!(player.lifted_slots().is_empty());
        assert!(bot.lifted_slots().is_empty());
        assert_eq!(tracker.state(), HoverState::Idle);

        assert_eq!(tracker.apply(None, &mut player, &mut bot), HoverTransition::Idle);
    }

    #[test]
    fn test_hit_on_missing_slot_is_a_miss() {
        let (mut player, mut bot) = table();
        let mut tracker = HoverTracker::new();
        assert_eq!(tracker.apply(hit(9), &mut player, &mut bot), HoverTransition::Idle);
    }
}
