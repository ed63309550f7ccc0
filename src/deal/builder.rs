//! Dealing hands from the catalog.
//!
//! `HandBuilder` draws unique catalog indices and lays the resulting
//! cards out left to right, centred on x = 0. Dealing several hands
//! against the same `ChosenSet` keeps them disjoint.

use super::hand::{Hand, HandEntry, Lane};
use super::sampler::{ChosenSet, RandomSampler};
use crate::cards::{front_path, AssetLoader, Card, CardCatalog, CardIndex};
use crate::core::{Result, TableConfig};

/// Lays out dealt cards in slots.
///
/// ## Example
///
/// ```
/// use card_table::cards::{CardCatalog, DirectoryAssetLoader};
/// use card_table::core::{LaneConfig, TableRng};
/// use card_table::deal::{ChosenSet, HandBuilder, Lane, RandomSampler, Side};
///
/// let catalog = CardCatalog::build();
/// let mut sampler = RandomSampler::new(TableRng::new(42));
/// let mut chosen = ChosenSet::new();
/// let mut loader = DirectoryAssetLoader::new("/no/assets");
/// let builder = HandBuilder::new(7, 4.0);
///
/// let player = builder
///     .deal_hand(&catalog, &mut sampler, &mut chosen, Lane::new(Side::Player, LaneConfig::player()), &mut loader)
///     .unwrap();
///
/// assert_eq!(player.len(), 7);
/// assert_eq!(player.get(0).unwrap().base.x, -12.0);
/// assert_eq!(player.get(6).unwrap().base.x, 12.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HandBuilder {
    size: usize,
    spacing: f32,
    asset_root: String,
}

impl HandBuilder {
    /// Builder for hands of `size` cards, `spacing` apart.
    #[must_use]
    pub fn new(size: usize, spacing: f32) -> Self {
        Self {
            size,
            spacing,
            asset_root: String::new(),
        }
    }

    /// Builder matching a table configuration.
    #[must_use]
    pub fn from_config(config: &TableConfig) -> Self {
        Self::new(config.hand_size, config.slot_spacing).with_asset_root(config.asset_root.clone())
    }

    /// Set the directory front artwork is resolved under.
    #[must_use]
    pub fn with_asset_root(mut self, root: impl Into<String>) -> Self {
        self.asset_root = root.into();
        self
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Slot offset that centres the hand.
    #[must_use]
    pub fn center_offset(&self) -> f32 {
        self.size.saturating_sub(1) as f32 / 2.0
    }

    /// Lateral position of `slot`.
    #[must_use]
    pub fn slot_x(&self, slot: usize) -> f32 {
        (slot as f32 - self.center_offset()) * self.spacing
    }

    /// Deal one hand into `lane`.
    ///
    /// Every drawn index is added to `excluding`. If the catalog cannot
    /// supply `size` more cards, fails with `InsufficientRange` and
    /// leaves `excluding` unchanged.
    pub fn deal_hand<L>(
        &self,
        catalog: &CardCatalog,
        sampler: &mut RandomSampler,
        excluding: &mut ChosenSet,
        lane: Lane,
        loader: &mut L,
    ) -> Result<Hand>
    where
        L: AssetLoader + ?Sized,
    {
        let drawn = sampler.draw_unique(self.size, 0, catalog.max_index(), excluding)?;

        let mut hand = Hand::new(lane);
        for (slot, raw) in drawn.into_iter().enumerate() {
            let index = CardIndex::try_from(raw)?;
            let card = catalog.get(index).copied().unwrap_or_else(|| Card::from_index(index));
            let front = loader.load_or_placeholder(&front_path(&self.asset_root, card));
            let x = self.slot_x(slot);

            tracing::debug!(side = %lane.side, slot, card = %card, x, "dealt card");
            hand.push(HandEntry::new(card, slot, x, &lane, front));
        }

        Ok(hand)
    }
}
