//! Pointer picking: geometry, camera projection, and hit-testing.
//!
//! ## Key Types
//!
//! - `PointerState`: Pointer position in normalized device coordinates
//! - `Camera`: Projects pointers into world-space rays
//! - `CardGeometry`: Card box dimensions and orientation
//! - `HitTester`: Finds the hand entry under the pointer

pub mod camera;
pub mod geometry;
pub mod hit;

pub use camera::{Camera, PointerState};
pub use geometry::{Aabb, CardGeometry, Ray, Vec3};
pub use hit::{Hit, HitTester};
