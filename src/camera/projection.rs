//! Pinhole projection onto the near plane.

use crate::foundation::core::{DVec3, NearPlane};
use crate::foundation::error::{AnimaError, AnimaResult};

/// Project a camera-space point onto the plane at `near` distance in front of
/// the pinhole origin.
///
/// Uses the looking-down-minus-z convention: the image always lands at
/// `z = -near`, and the sign carried by `p.z` keeps points in front of the
/// camera from inverting. The projection depends only on the direction of
/// `p`, not its distance along the ray.
///
/// Fails with [`AnimaError::Projection`] when `p.z == 0`: the point lies in
/// the camera plane and has no finite image.
pub fn project_point(near: NearPlane, p: DVec3) -> AnimaResult<DVec3> {
    if p.z == 0.0 {
        return Err(AnimaError::projection(
            "point lies in the camera plane (z = 0)",
        ));
    }
    let n = near.distance();
    Ok(DVec3::new(-n * p.x / p.z, -n * p.y / p.z, -n))
}

#[cfg(test)]
#[path = "../../tests/unit/camera/projection.rs"]
mod tests;
