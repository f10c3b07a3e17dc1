//! Running world-frame orientation for a staged 3D frame.

use crate::foundation::core::{DMat3, DVec3};

/// Accumulates sequential axis rotations into one orientation matrix.
///
/// Each call composes a right-hand-rule rotation about a fixed world axis on
/// the left of the running product: `current = R(axis, angle) * current`.
/// Rotations therefore act in the world frame, not the frame's own rotated
/// local axes, and the order of calls matters: `rotate_x` then `rotate_y` is
/// not `rotate_y` then `rotate_x`.
///
/// The product of rotation matrices is a rotation matrix, so `current()` is
/// orthonormal after every step.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrientationComposer {
    current: DMat3,
}

impl Default for OrientationComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationComposer {
    /// Create a composer at the identity orientation.
    pub fn new() -> Self {
        Self {
            current: DMat3::IDENTITY,
        }
    }

    /// Compose a rotation of `angle_rad` about the world x axis.
    pub fn rotate_x(&mut self, angle_rad: f64) {
        self.current = DMat3::from_rotation_x(angle_rad) * self.current;
    }

    /// Compose a rotation of `angle_rad` about the world y axis.
    pub fn rotate_y(&mut self, angle_rad: f64) {
        self.current = DMat3::from_rotation_y(angle_rad) * self.current;
    }

    /// Compose a rotation of `angle_rad` about the world z axis.
    pub fn rotate_z(&mut self, angle_rad: f64) {
        self.current = DMat3::from_rotation_z(angle_rad) * self.current;
    }

    /// Restore the identity orientation.
    pub fn reset(&mut self) {
        self.current = DMat3::IDENTITY;
    }

    /// The accumulated orientation relative to the fixed world frame.
    pub fn current(&self) -> DMat3 {
        self.current
    }

    /// Apply the accumulated orientation to a point.
    pub fn apply(&self, p: DVec3) -> DVec3 {
        self.current * p
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/orientation.rs"]
mod tests;
