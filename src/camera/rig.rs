//! A positioned camera: world position, orientation, near plane.

use crate::camera::projection::project_point;
use crate::foundation::core::{DMat3, DVec3, NearPlane};
use crate::foundation::error::AnimaResult;

/// A pinhole camera staged in the world frame.
///
/// The rig's `orientation` rotates camera axes into world axes; it must stay
/// orthonormal, so drive it from an [`crate::OrientationComposer`] rather
/// than writing arbitrary matrices into it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraRig {
    /// Pinhole origin in world space.
    pub position: DVec3,
    /// Rotation from camera axes to world axes. Must stay orthonormal.
    pub orientation: DMat3,
    /// Distance to the projection plane along the camera's -z axis.
    pub near: NearPlane,
}

impl CameraRig {
    /// Create a rig at `position` with identity orientation.
    pub fn new(position: DVec3, near: NearPlane) -> Self {
        Self {
            position,
            orientation: DMat3::IDENTITY,
            near,
        }
    }

    /// Transform a world-space point into camera space.
    ///
    /// The orientation is orthonormal, so its inverse is its transpose.
    pub fn world_to_camera(&self, world: DVec3) -> DVec3 {
        self.orientation.transpose() * (world - self.position)
    }

    /// Project a world-space point onto the rig's near plane.
    ///
    /// Fails like [`project_point`] when the point lands in the camera plane.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn project_world_point(&self, world: DVec3) -> AnimaResult<DVec3> {
        let cam = self.world_to_camera(world);
        tracing::debug!(?cam, "camera-space point");
        project_point(self.near, cam)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/rig.rs"]
mod tests;
