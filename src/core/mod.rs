//! Core table types: configuration, RNG, and the crate error.
//!
//! Everything here is independent of cards and geometry; the other
//! modules build on it.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{CameraConfig, LaneConfig, TableConfig};
pub use error::{Result, TableError};
pub use rng::{TableRng, TableRngState};
