//! Match reveal and the hover state machine.
//!
//! ## Key Types
//!
//! - `MatchRevealer`: Lifts bot cards sharing the hovered card's rank
//! - `HoverTracker`: Idle/hovering machine applied on every pointer move
//! - `HoverTransition`: What one pointer move changed

pub mod hover;
pub mod revealer;

pub use hover::{HoverState, HoverTracker, HoverTransition};
pub use revealer::{MatchRevealer, RevealedSlots};
