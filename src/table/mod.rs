//! Table session and rendering hand-off.
//!
//! ## Key Types
//!
//! - `Table`: Dealt session; routes pointer moves through hit-testing
//!   and the hover machine
//! - `SceneNode`: Read-only snapshot of one card for a renderer
//! - `RenderSurface`: Renderer seam

pub mod scene;
pub mod session;

pub use scene::{RenderSurface, SceneNode};
pub use session::Table;
