//! Read-only scene snapshot handed to a renderer.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Face};
use crate::deal::{HandEntry, RevealState, Side};
use crate::pick::{Camera, PointerState, Ray, Vec3};

/// One positioned, named card in the scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    /// Stable name, `<side>-<slot>-<suit>-<rank>`.
    pub name: String,
    pub side: Side,
    pub slot: usize,
    pub card: Card,
    /// Current position, lift included.
    pub position: Vec3,
    /// Rotation about the vertical axis, in radians.
    pub rotation_y: f32,
    pub state: RevealState,
    pub front: Face,
    pub back: Face,
}

impl SceneNode {
    /// Snapshot an entry.
    #[must_use]
    pub fn from_entry(side: Side, entry: &HandEntry, rotation_y: f32, back: Face) -> Self {
        Self {
            name: format!("{}-{}-{}-{}", side, entry.slot, entry.card.suit, entry.card.rank),
            side,
            slot: entry.slot,
            card: entry.card,
            position: entry.position(),
            rotation_y,
            state: entry.state,
            front: entry.front,
            back,
        }
    }
}

/// Something that can draw a frame of the table.
///
/// Rendering only reads the snapshot; it never changes hand state.
pub trait RenderSurface {
    /// Draw one frame.
    fn render(&mut self, nodes: &[SceneNode], camera: &Camera);

    /// Ray from the camera through a normalized pointer position.
    ///
    /// Surfaces with their own projection (letterboxing, a custom
    /// viewport) override this; the default is the camera's own math.
    fn project_pointer(&self, pointer: PointerState, camera: &Camera) -> Ray {
        camera.project_pointer(pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardIndex, TextureId};
    use crate::core::LaneConfig;
    use crate::deal::Lane;

    #[test]
    fn test_from_entry() {
        let lane = Lane::new(Side::Bot, LaneConfig::bot());
        let mut entry = HandEntry::new(
            Card::from_index(CardIndex::new(30).unwrap()),
            2,
            -4.0,
            &lane,
            Face::Texture(TextureId(3)),
        );
        entry.state = RevealState::Lifted;

        let node = SceneNode::from_entry(Side::Bot, &entry, 1.5, Face::Placeholder);

        assert_eq!(node.name, "bot-2-hearts-4");
        assert_eq!(node.position, Vec3::new(-4.0, 21.0, 0.0));
        assert_eq!(node.front, Face::Texture(TextureId(3)));
        assert_eq!(node.back, Face::Placeholder);
        assert_eq!(node.rotation_y, 1.5);
    }
}
