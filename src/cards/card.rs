//! Card identity: suit, rank, and catalog index.
//!
//! A card is an immutable `(suit, rank)` pair. Its global index is
//! `suit * 13 + rank`, so clubs occupy 0..13, diamonds 13..26, hearts
//! 26..39 and spades 39..52.

use serde::{Deserialize, Serialize};

use crate::core::TableError;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Card suit, in catalog order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    /// All suits in catalog order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Suit for a 0-based position in catalog order.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    /// 0-based position in catalog order.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Lowercase name, as used in asset paths.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank within a suit, `0..=12`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// Create a rank. Returns `None` outside `0..=12`.
    #[must_use]
    pub const fn new(rank: u8) -> Option<Self> {
        if rank < RANKS_PER_SUIT {
            Some(Self(rank))
        } else {
            None
        }
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Iterate over every rank in ascending order.
    pub fn all() -> impl Iterator<Item = Rank> {
        (0..RANKS_PER_SUIT).map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = TableError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or(TableError::InvalidCard {
            field: "rank",
            value: u32::from(value),
        })
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Global catalog index of a card, `0..52`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardIndex(u8);

impl CardIndex {
    /// Create a card index. Returns `None` outside `0..52`.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < DECK_SIZE {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the raw index as `usize`.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for CardIndex {
    type Error = TableError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CardIndex::new(value).ok_or(TableError::InvalidCard {
            field: "card index",
            value: u32::from(value),
        })
    }
}

impl TryFrom<u32> for CardIndex {
    type Error = TableError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(CardIndex::new)
            .ok_or(TableError::InvalidCard {
                field: "card index",
                value,
            })
    }
}

impl From<CardIndex> for u8 {
    fn from(index: CardIndex) -> Self {
        index.0
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A playing card.
///
/// ```
/// use card_table::cards::{Card, CardIndex, Suit};
///
/// let five = CardIndex::new(5).unwrap();
/// let card = Card::from_index(five);
/// assert_eq!(card.suit, Suit::Clubs);
/// assert_eq!(card.rank.raw(), 5);
/// assert_eq!(card.index(), five);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Decompose a catalog index into its card.
    #[must_use]
    pub const fn from_index(index: CardIndex) -> Self {
        let suit = match Suit::from_ordinal(index.0 / RANKS_PER_SUIT) {
            Some(suit) => suit,
            // CardIndex is bounded to 0..52
            None => Suit::Spades,
        };
        Self {
            suit,
            rank: Rank(index.0 % RANKS_PER_SUIT),
        }
    }

    /// Catalog index, `suit * 13 + rank`.
    #[must_use]
    pub const fn index(self) -> CardIndex {
        CardIndex(self.suit.ordinal() * RANKS_PER_SUIT + self.rank.0)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
