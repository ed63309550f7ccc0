//! Table configuration types.
//!
//! A table is configured at startup by providing:
//! - `LaneConfig`: Vertical placement of one party's row of cards
//! - `CameraConfig`: Perspective camera used for pointer projection
//! - `TableConfig`: Combines all configuration
//!
//! Configuration can be built in code with the `with_*` methods or read
//! from TOML, where every missing key falls back to its default.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::{Result, TableError};
use crate::pick::{CardGeometry, Vec3};

/// Vertical placement of one row of cards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaneConfig {
    /// Height of a card at rest.
    pub base_y: f32,
    /// Height of a card while lifted.
    pub lifted_y: f32,
    /// Depth of the row.
    #[serde(default)]
    pub z: f32,
}

impl LaneConfig {
    /// Create a lane config.
    #[must_use]
    pub const fn new(base_y: f32, lifted_y: f32) -> Self {
        Self {
            base_y,
            lifted_y,
            z: 0.0,
        }
    }

    /// Player row: rests on the table, hovers one unit up.
    #[must_use]
    pub const fn player() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Bot row: sits above the player row and rises well clear of it.
    #[must_use]
    pub const fn bot() -> Self {
        Self::new(15.0, 21.0)
    }

    /// Set the row depth.
    #[must_use]
    pub fn with_z(mut self, z: f32) -> Self {
        self.z = z;
        self
    }
}

/// Keys given in a `[player_lane]` or `[bot_lane]` table; the rest
/// come from that lane's default.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LaneOverrides {
    base_y: Option<f32>,
    lifted_y: Option<f32>,
    z: Option<f32>,
}

impl LaneOverrides {
    fn apply(self, lane: LaneConfig) -> LaneConfig {
        LaneConfig {
            base_y: self.base_y.unwrap_or(lane.base_y),
            lifted_y: self.lifted_y.unwrap_or(lane.lifted_y),
            z: self.z.unwrap_or(lane.z),
        }
    }
}

fn player_lane<'de, D>(deserializer: D) -> std::result::Result<LaneConfig, D::Error>
where
    D: Deserializer<'de>,
{
    LaneOverrides::deserialize(deserializer).map(|o| o.apply(LaneConfig::player()))
}

fn bot_lane<'de, D>(deserializer: D) -> std::result::Result<LaneConfig, D::Error>
where
    D: Deserializer<'de>,
{
    LaneOverrides::deserialize(deserializer).map(|o| o.apply(LaneConfig::bot()))
}

/// Perspective camera settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera looks at. `None` looks straight down -Z.
    pub target: Option<Vec3>,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, 20.0),
            target: None,
            fov_y_degrees: 75.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Complete table configuration.
///
/// ## Example
///
/// ```
/// use card_table::core::TableConfig;
///
/// let config = TableConfig::default().with_hand_size(5).with_seed(7);
/// assert_eq!(config.center_offset(), 2.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Cards dealt to each party.
    pub hand_size: usize,

    /// Lateral distance between neighbouring slots.
    pub slot_spacing: f32,

    #[serde(deserialize_with = "player_lane")]
    pub player_lane: LaneConfig,
    #[serde(deserialize_with = "bot_lane")]
    pub bot_lane: LaneConfig,

    /// Card box dimensions.
    pub card: CardGeometry,

    pub camera: CameraConfig,

    /// Root directory of the card artwork.
    pub asset_root: String,

    /// Back face artwork name, resolved as `back/<name>.svg`.
    pub back_face: String,

    /// Deal seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            hand_size: 7,
            slot_spacing: 4.0,
            player_lane: LaneConfig::player(),
            bot_lane: LaneConfig::bot(),
            card: CardGeometry::default(),
            camera: CameraConfig::default(),
            asset_root: "/card_models".to_string(),
            back_face: "red".to_string(),
            seed: None,
        }
    }
}

impl TableConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the slot spacing.
    #[must_use]
    pub fn with_slot_spacing(mut self, spacing: f32) -> Self {
        self.slot_spacing = spacing;
        self
    }

    /// Set the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the player lane.
    #[must_use]
    pub fn with_player_lane(mut self, lane: LaneConfig) -> Self {
        self.player_lane = lane;
        self
    }

    /// Set the bot lane.
    #[must_use]
    pub fn with_bot_lane(mut self, lane: LaneConfig) -> Self {
        self.bot_lane = lane;
        self
    }

    /// Set the camera.
    #[must_use]
    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    /// Set the asset root directory.
    #[must_use]
    pub fn with_asset_root(mut self, root: impl Into<String>) -> Self {
        self.asset_root = root.into();
        self
    }

    /// Slot offset that centres the hand on x = 0.
    #[must_use]
    pub fn center_offset(&self) -> f32 {
        self.hand_size.saturating_sub(1) as f32 / 2.0
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.hand_size == 0 {
            return Err(TableError::InvalidConfig("hand_size must be at least 1".into()));
        }
        if !(self.slot_spacing.is_finite() && self.slot_spacing > 0.0) {
            return Err(TableError::InvalidConfig(format!(
                "slot_spacing must be positive, got {}",
                self.slot_spacing
            )));
        }
        for (name, lane) in [("player_lane", &self.player_lane), ("bot_lane", &self.bot_lane)] {
            if ![lane.base_y, lane.lifted_y, lane.z].iter().all(|v| v.is_finite()) {
                return Err(TableError::InvalidConfig(format!(
                    "{name} values must be finite, got {lane:?}"
                )));
            }
        }
        let card = &self.card;
        if [card.width, card.height, card.depth]
            .iter()
            .any(|d| !(d.is_finite() && *d >= 0.0))
        {
            return Err(TableError::InvalidConfig(
                "card dimensions must be finite and non-negative".into(),
            ));
        }
        let cam = &self.camera;
        if !(cam.fov_y_degrees > 0.0 && cam.fov_y_degrees < 180.0) {
            return Err(TableError::InvalidConfig(format!(
                "camera fov must be in (0, 180), got {}",
                cam.fov_y_degrees
            )));
        }
        if !(cam.aspect.is_finite() && cam.aspect > 0.0) {
            return Err(TableError::InvalidConfig(format!(
                "camera aspect must be positive, got {}",
                cam.aspect
            )));
        }
        if !(cam.near > 0.0 && cam.far > cam.near) {
            return Err(TableError::InvalidConfig(format!(
                "camera clip planes must satisfy 0 < near < far, got {} / {}",
                cam.near, cam.far
            )));
        }
        if let Some(target) = cam.target {
            if target == cam.position {
                return Err(TableError::InvalidConfig(
                    "camera target coincides with its position".into(),
                ));
            }
        }
        Ok(())
    }
}
