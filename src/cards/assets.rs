//! Card artwork resolution.
//!
//! Fronts live at `<root>/front/<suit>/<rank>.svg` and every card shares
//! one back at `<root>/back/<name>.svg`. Loading is delegated to an
//! [`AssetLoader`]; a face that fails to load becomes
//! [`Face::Placeholder`] instead of aborting the deal.

use std::path::PathBuf;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::{Result, TableError};

/// Opaque handle to a loaded texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Outcome of loading one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    /// Artwork resolved to a texture.
    Texture(TextureId),
    /// Artwork failed to load; render blank.
    Placeholder,
}

impl Face {
    /// Check if this face fell back to the placeholder.
    #[must_use]
    pub fn is_placeholder(self) -> bool {
        matches!(self, Face::Placeholder)
    }
}

/// Path of a card's front artwork.
#[must_use]
pub fn front_path(root: &str, card: Card) -> String {
    format!("{}/front/{}/{}.svg", root.trim_end_matches('/'), card.suit.name(), card.rank)
}

/// Path of the shared back artwork.
#[must_use]
pub fn back_path(root: &str, name: &str) -> String {
    format!("{}/back/{}.svg", root.trim_end_matches('/'), name)
}

/// Resolves artwork paths to textures.
pub trait AssetLoader {
    /// Load the asset at `path`.
    fn load(&mut self, path: &str) -> Result<TextureId>;

    /// Load the asset, falling back to a placeholder on failure.
    fn load_or_placeholder(&mut self, path: &str) -> Face {
        match self.load(path) {
            Ok(id) => Face::Texture(id),
            Err(err) => {
                tracing::warn!(%path, error = %err, "asset failed to load, using placeholder");
                Face::Placeholder
            }
        }
    }
}

/// Loader backed by a directory on disk.
///
/// Asset paths are resolved relative to `base`; a leading `/` on the
/// asset path is ignored. Each distinct path gets one texture handle.
#[derive(Clone, Debug, Default)]
pub struct DirectoryAssetLoader {
    base: PathBuf,
    handles: FxHashMap<String, TextureId>,
}

impl DirectoryAssetLoader {
    /// Create a loader rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            handles: FxHashMap::default(),
        }
    }

    /// Number of distinct textures loaded so far.
    #[must_use]
    pub fn loaded(&self) -> usize {
        self.handles.len()
    }
}

impl AssetLoader for DirectoryAssetLoader {
    fn load(&mut self, path: &str) -> Result<TextureId> {
        if let Some(&id) = self.handles.get(path) {
            return Ok(id);
        }

        let resolved = self.base.join(path.trim_start_matches('/'));
        if !resolved.is_file() {
            return Err(TableError::AssetResolution {
                path: path.to_string(),
                reason: format!("{} is not a file", resolved.display()),
            });
        }

        let id = TextureId(self.handles.len() as u32);
        self.handles.insert(path.to_string(), id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::{CardIndex, Rank, Suit};

    struct FailEven {
        calls: u32,
    }

    impl AssetLoader for FailEven {
        fn load(&mut self, path: &str) -> Result<TextureId> {
            self.calls += 1;
            if self.calls % 2 == 0 {
                Err(TableError::AssetResolution {
                    path: path.to_string(),
                    reason: "even".into(),
                })
            } else {
                Ok(TextureId(self.calls))
            }
        }
    }

    #[test]
    fn test_front_path() {
        let card = Card::new(Suit::Hearts, Rank::new(11).unwrap());
        assert_eq!(front_path("/card_models", card), "/card_models/front/hearts/11.svg");
        assert_eq!(
            front_path("/card_models/", Card::from_index(CardIndex::new(0).unwrap())),
            "/card_models/front/clubs/0.svg"
        );
    }

    #[test]
    fn test_back_path() {
        assert_eq!(back_path("/card_models", "red"), "/card_models/back/red.svg");
    }

    #[test]
    fn test_load_or_placeholder() {
        let mut loader = FailEven { calls: 0 };
        assert_eq!(loader.load_or_placeholder("a"), Face::Texture(TextureId(1)));
        assert_eq!(loader.load_or_placeholder("b"), Face::Placeholder);
        assert!(Face::Placeholder.is_placeholder());
    }

    #[test]
    fn test_directory_loader_missing() {
        let mut loader = DirectoryAssetLoader::new("/nonexistent-card-assets");
        let err = loader.load("/card_models/back/red.svg").unwrap_err();
        assert!(matches!(err, TableError::AssetResolution { .. }));
        assert_eq!(loader.loaded(), 0);
    }

    #[test]
    fn test_directory_loader_existing_file() {
        // Cargo.toml is always present at the crate root during tests.
        let mut loader = DirectoryAssetLoader::new(env!("CARGO_MANIFEST_DIR"));
        let first = loader.load("/Cargo.toml").unwrap();
        let again = loader.load("/Cargo.toml").unwrap();
        assert_eq!(first, again);
        assert_eq!(loader.loaded(), 1);
    }
}
