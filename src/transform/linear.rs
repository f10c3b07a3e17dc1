//! Linear transform helpers.

use crate::foundation::core::DVec3;

#[inline]
/// Linearly interpolate between two points with clamped parameter `t`.
pub fn lerp_vec3(a: DVec3, b: DVec3, t: f64) -> DVec3 {
    let t = t.clamp(0.0, 1.0);
    a + (b - a) * t
}

#[inline]
/// Point at parameter `t` along the line through `p1` and `p2`.
///
/// `t` is in units of the `p1 -> p2` segment and may lie outside `[0, 1]`;
/// `t = 2.0` lands one segment length past `p2`.
pub fn point_along(p1: DVec3, p2: DVec3, t: f64) -> DVec3 {
    p1 + (p2 - p1) * t
}

#[cfg(test)]
#[path = "../../tests/unit/transform/linear.rs"]
mod tests;
