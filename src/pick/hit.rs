//! Pointer hit-testing against a hand.
//!
//! The pointer is projected through the camera into a ray, and the ray is
//! tested against the box of every entry. A resting entry is tested at
//! its resting position. A lifted entry covers both its resting and its
//! lifted box, so a still pointer over the lower edge of the hovered
//! card keeps hitting it after the lift. The nearest hit wins; a card box
//! is one logical target, so crossing both its front and back faces
//! still yields a single hit for that entry.

use super::camera::{Camera, PointerState};
use super::geometry::{Aabb, CardGeometry, Ray};
use crate::deal::{Hand, HandEntry};

/// Result of a successful pick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Slot of the entry under the pointer.
    pub slot: usize,
    /// Distance from the camera along the pointer ray.
    pub distance: f32,
}

/// Finds the hand entry under the pointer.
///
/// ## Example
///
/// ```
/// use card_table::pick::{Camera, CardGeometry, HitTester, PointerState};
/// use card_table::deal::{Hand, Lane, Side};
/// use card_table::core::LaneConfig;
///
/// let tester = HitTester::new(CardGeometry::default());
/// let empty = Hand::new(Lane::new(Side::Player, LaneConfig::player()));
///
/// assert!(tester.pick(PointerState::new(0.0, 0.0), &Camera::default(), &empty).is_none());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitTester {
    geometry: CardGeometry,
}

impl HitTester {
    #[must_use]
    pub fn new(geometry: CardGeometry) -> Self {
        Self { geometry }
    }

    #[must_use]
    pub fn geometry(&self) -> &CardGeometry {
        &self.geometry
    }

    /// Entry under `pointer`, if any.
    #[must_use]
    pub fn pick(&self, pointer: PointerState, camera: &Camera, hand: &Hand) -> Option<Hit> {
        self.pick_in_view(&camera.project_pointer(pointer), camera, hand)
    }

    /// Nearest entry crossed by an already projected `ray`, ignoring hits
    /// past the camera's far plane.
    #[must_use]
    pub fn pick_in_view(&self, ray: &Ray, camera: &Camera, hand: &Hand) -> Option<Hit> {
        self.pick_ray(ray, hand)
            .filter(|hit| hit.distance <= camera.far())
    }

    /// Nearest entry crossed by `ray`. Exact ties go to the lower slot.
    #[must_use]
    pub fn pick_ray(&self, ray: &Ray, hand: &Hand) -> Option<Hit> {
        hand.iter()
            .filter_map(|entry| self.intersect(ray, entry))
            .min_by(|a, b| {
                a.distance
                    .partial_cmp(&b.distance)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Box an entry answers to: resting bounds, widened to the lifted
    /// bounds while the entry is lifted.
    #[must_use]
    pub fn bounds_of(&self, entry: &HandEntry) -> Aabb {
        let resting = self.geometry.bounds_at(entry.base);
        if entry.is_lifted() {
            resting.union(&self.geometry.bounds_at(entry.position()))
        } else {
            resting
        }
    }

    fn intersect(&self, ray: &Ray, entry: &HandEntry) -> Option<Hit> {
        self.bounds_of(entry)
            .intersect(ray)
            .map(|distance| Hit {
                slot: entry.slot,
                distance,
            })
    }
}
