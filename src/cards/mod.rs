//! Card system: identity, catalog, and artwork.
//!
//! ## Key Types
//!
//! - `Card`: Immutable `(suit, rank)` pair
//! - `CardIndex`: Global index `suit * 13 + rank`
//! - `CardCatalog`: All 52 cards in deterministic order
//! - `AssetLoader`: Resolves front/back artwork, tolerating failures

pub mod assets;
pub mod card;
pub mod catalog;

pub use assets::{back_path, front_path, AssetLoader, DirectoryAssetLoader, Face, TextureId};
pub use card::{Card, CardIndex, Rank, Suit, DECK_SIZE, RANKS_PER_SUIT};
pub use catalog::CardCatalog;
