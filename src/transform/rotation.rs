//! Rotation of staged points about an arbitrary pivot.

use crate::foundation::core::{DMat3, DVec3};
use crate::foundation::error::{AnimaError, AnimaResult};

/// Rotate `p` by `angle_rad` about the axis direction `axis` through `pivot`.
///
/// Right-hand rule about the normalized axis. The pivot is fixed and the
/// distance from `p` to the pivot is preserved.
///
/// Fails when `axis` has zero or non-finite length.
pub fn rotate_about_point(
    p: DVec3,
    pivot: DVec3,
    axis: DVec3,
    angle_rad: f64,
) -> AnimaResult<DVec3> {
    let len = axis.length();
    if !len.is_finite() || len == 0.0 {
        return Err(AnimaError::validation(
            "rotation axis must have nonzero finite length",
        ));
    }
    let rot = DMat3::from_axis_angle(axis / len, angle_rad);
    Ok(pivot + rot * (p - pivot))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rotation.rs"]
mod tests;
