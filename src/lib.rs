//! # card-table
//!
//! Dealing, pointer hit-testing and rank-match reveal for a 3D card
//! table scene.
//!
//! ## Flow
//!
//! 1. **Startup**: `Table::deal` builds the 52-card catalog and deals a
//!    player hand and a bot hand from one shared exclusion set, so no
//!    card is dealt twice.
//!
//! 2. **Pointer moves**: `Table::on_pointer_move` projects the pointer
//!    into a ray, hit-tests the player hand, and drives the hover
//!    machine. Hovering a card lifts it and reveals every bot card of
//!    the same rank; leaving the hand resets both rows.
//!
//! 3. **Frames**: `Table::render` hands a read-only scene snapshot to a
//!    `RenderSurface`.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, errors
//! - `cards`: Card identity, catalog, artwork loading
//! - `deal`: Unique sampling, hands, reveal state
//! - `pick`: Geometry, camera, hit-testing
//! - `reveal`: Rank-match reveal and hover state machine
//! - `table`: Session and rendering seam

pub mod core;
pub mod cards;
pub mod deal;
pub mod pick;
pub mod reveal;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    CameraConfig, LaneConfig, Result, TableConfig, TableError, TableRng, TableRngState,
};

pub use crate::cards::{
    AssetLoader, Card, CardCatalog, CardIndex, DirectoryAssetLoader, Face, Rank, Suit, TextureId,
};

pub use crate::deal::{ChosenSet, Hand, HandBuilder, HandEntry, Lane, RandomSampler, RevealState, Side};

pub use crate::pick::{Camera, CardGeometry, Hit, HitTester, PointerState, Ray, Vec3};

pub use crate::reveal::{HoverState, HoverTracker, HoverTransition, MatchRevealer};

pub use crate::table::{RenderSurface, SceneNode, Table};
