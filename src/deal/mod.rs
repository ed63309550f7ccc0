//! Dealing: unique sampling, hand layout, and reveal state.
//!
//! ## Key Types
//!
//! - `ChosenSet`: Indices already drawn in this session
//! - `RandomSampler`: Rejection sampler over an inclusive range
//! - `HandBuilder`: Deals a hand of fixed size into a lane
//! - `Hand` / `HandEntry`: Dealt cards with placement and `RevealState`

pub mod builder;
pub mod hand;
pub mod sampler;

pub use builder::HandBuilder;
pub use hand::{Hand, HandEntry, Lane, RevealState, Side};
pub use sampler::{ChosenSet, RandomSampler};
