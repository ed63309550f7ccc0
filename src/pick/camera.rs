//! Perspective camera and pointer normalization.
//!
//! The camera turns a normalized pointer position into a world-space ray
//! (and the reverse, for placing a pointer over a known point).

use serde::{Deserialize, Serialize};

use super::geometry::{Ray, Vec3};
use crate::core::{CameraConfig, Result, TableError};

/// Pointer position in normalized device coordinates.
///
/// `x` runs from -1 (left edge) to 1 (right edge), `y` from -1 (bottom)
/// to 1 (top).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Create a pointer state from normalized coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Normalize a viewport-relative pixel position.
    ///
    /// ```
    /// use card_table::pick::PointerState;
    ///
    /// let center = PointerState::from_viewport(400.0, 300.0, 800.0, 600.0).unwrap();
    /// assert_eq!(center, PointerState::new(0.0, 0.0));
    ///
    /// let top_left = PointerState::from_viewport(0.0, 0.0, 800.0, 600.0).unwrap();
    /// assert_eq!(top_left, PointerState::new(-1.0, 1.0));
    /// ```
    pub fn from_viewport(x: f32, y: f32, width: f32, height: f32) -> Result<Self> {
        let usable = |d: f32| d.is_finite() && d > 0.0;
        if !usable(width) || !usable(height) {
            return Err(TableError::InvalidViewport { width, height });
        }
        if !x.is_finite() || !y.is_finite() {
            return Err(TableError::InvalidPointer { x, y });
        }
        Ok(Self {
            x: (x / width) * 2.0 - 1.0,
            y: 1.0 - (y / height) * 2.0,
        })
    }

    /// Check if the pointer lies within the viewport.
    #[must_use]
    pub fn is_inside(&self) -> bool {
        (-1.0..=1.0).contains(&self.x) && (-1.0..=1.0).contains(&self.y)
    }
}

/// Perspective camera with an orthonormal view basis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    tan_half_fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    /// Build a camera from its configuration.
    #[must_use]
    pub fn new(config: &CameraConfig) -> Self {
        let forward = config
            .target
            .and_then(|target| (target - config.position).normalized())
            .unwrap_or(Vec3::NEG_Z);
        // Looking straight up or down leaves the world up axis degenerate
        let right = forward
            .cross(Vec3::Y)
            .normalized()
            .unwrap_or(Vec3::new(1.0, 0.0, 0.0));
        let up = right.cross(forward);

        Self {
            position: config.position,
            forward,
            right,
            up,
            tan_half_fov: (config.fov_y_degrees.to_radians() / 2.0).tan(),
            aspect: config.aspect,
            near: config.near,
            far: config.far,
        }
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Far clip distance; hits beyond it are ignored.
    #[must_use]
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Ray from the camera through the pointer.
    #[must_use]
    pub fn project_pointer(&self, pointer: PointerState) -> Ray {
        let direction = self.forward
            + self.right * (pointer.x * self.tan_half_fov * self.aspect)
            + self.up * (pointer.y * self.tan_half_fov);
        Ray {
            origin: self.position,
            direction: direction.normalized().unwrap_or(self.forward),
        }
    }

    /// Pointer position that lies over `point`, or `None` when the point
    /// is not in front of the near plane.
    #[must_use]
    pub fn project_point(&self, point: Vec3) -> Option<PointerState> {
        let v = point - self.position;
        let depth = v.dot(self.forward);
        if depth < self.near {
            return None;
        }
        Some(PointerState {
            x: v.dot(self.right) / (depth * self.tan_half_fov * self.aspect),
            y: v.dot(self.up) / (depth * self.tan_half_fov),
        })
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}
