//! Crate-wide error type.
//!
//! Every fallible operation returns [`Result`]. Errors are raised
//! synchronously to the caller; nothing in the crate retries except the
//! sampler's rejection loop, which is bounded.

use thiserror::Error;

/// Errors produced while configuring, dealing, or handling pointer input.
#[derive(Debug, Error)]
pub enum TableError {
    /// More unique values were requested than the range still holds.
    #[error("insufficient remaining values: requested {requested}, only {remaining} left")]
    InsufficientRange { requested: usize, remaining: usize },

    /// Sampling range with `min > max`.
    #[error("invalid sampling range [{min}, {max}]")]
    InvalidRange { min: u32, max: u32 },

    /// A card face could not be resolved by the asset loader.
    #[error("failed to resolve asset `{path}`: {reason}")]
    AssetResolution { path: String, reason: String },

    /// A rank or card index outside the deck.
    #[error("{field} {value} is outside the deck")]
    InvalidCard { field: &'static str, value: u32 },

    /// Pointer coordinates cannot be normalized against this viewport.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    /// Pointer coordinates that are not finite.
    #[error("invalid pointer position ({x}, {y})")]
    InvalidPointer { x: f32, y: f32 },

    /// Configuration values that fail validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableError>;
