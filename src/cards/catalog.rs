//! The fixed universe of 52 cards.
//!
//! The `CardCatalog` is built once per session and looked up by
//! `CardIndex`. Order is deterministic: suits in catalog order, ranks
//! ascending within each suit, so `catalog[i].index() == i`.

use super::card::{Card, CardIndex, Rank, Suit};

/// Ordered catalog of every card.
///
/// ## Example
///
/// ```
/// use card_table::cards::{CardCatalog, CardIndex, Suit};
///
/// let catalog = CardCatalog::build();
/// assert_eq!(catalog.len(), 52);
///
/// let card = catalog.get(CardIndex::new(13).unwrap()).unwrap();
/// assert_eq!(card.suit, Suit::Diamonds);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardCatalog {
    cards: Vec<Card>,
}

impl CardCatalog {
    /// Build the full catalog.
    #[must_use]
    pub fn build() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::all().map(move |rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// Get a card by index.
    #[must_use]
    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.as_usize())
    }

    /// Highest valid index, for sampling.
    #[must_use]
    pub fn max_index(&self) -> u32 {
        self.cards.len().saturating_sub(1) as u32
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::build()
    }
}

impl std::ops::Index<CardIndex> for CardCatalog {
    type Output = Card;

    fn index(&self, index: CardIndex) -> &Self::Output {
        &self.cards[index.as_usize()]
    }
}
