//! Logical axis frames and coordinate-to-point mapping.

use crate::foundation::core::DVec3;
use crate::foundation::error::{AnimaError, AnimaResult};

/// Logical range of one axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxisRange {
    /// Lower bound of the range.
    pub min: f64,
    /// Upper bound of the range. Always > `min`.
    pub max: f64,
}

impl AxisRange {
    /// Create a range, rejecting non-finite bounds and `max <= min`.
    pub fn new(min: f64, max: f64) -> AnimaResult<Self> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(AnimaError::validation(
                "AxisRange requires finite min < max",
            ));
        }
        Ok(Self { min, max })
    }

    /// Logical width of the range, `max - min`.
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// A 3D axis frame: logical ranges drawn at fixed scene lengths, with the
/// logical origin placed at `origin` in scene space.
///
/// The frame maps logical coordinates to scene points linearly per axis, one
/// logical unit covering `length / span` scene units. A long asymmetric range
/// drawn at a short length (a camera frustum axis, say) just yields a small
/// unit length; the mapping itself stays linear.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxisFrame3 {
    origin: DVec3,
    ranges: [AxisRange; 3],
    lengths: DVec3,
}

impl AxisFrame3 {
    /// Create a frame from per-axis ranges and drawn lengths.
    ///
    /// Fails when any length is non-finite or not strictly positive.
    pub fn new(origin: DVec3, ranges: [AxisRange; 3], lengths: DVec3) -> AnimaResult<Self> {
        for len in [lengths.x, lengths.y, lengths.z] {
            if !len.is_finite() || len <= 0.0 {
                return Err(AnimaError::validation(
                    "AxisFrame3 lengths must be finite and > 0",
                ));
            }
        }
        Ok(Self {
            origin,
            ranges,
            lengths,
        })
    }

    /// A centered cube frame: every axis spans `[-half, half]` logically and
    /// is drawn `length` scene units long.
    pub fn centered(origin: DVec3, half: f64, length: f64) -> AnimaResult<Self> {
        let r = AxisRange::new(-half, half)?;
        Self::new(origin, [r, r, r], DVec3::splat(length))
    }

    /// Scene position of the logical origin.
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Scene length of one logical unit along each axis.
    pub fn unit_lengths(&self) -> DVec3 {
        DVec3::new(
            self.lengths.x / self.ranges[0].span(),
            self.lengths.y / self.ranges[1].span(),
            self.lengths.z / self.ranges[2].span(),
        )
    }

    /// Map a logical coordinate to its scene-space point.
    pub fn c2p(&self, coord: DVec3) -> DVec3 {
        self.origin + coord * self.unit_lengths()
    }

    /// Map a scene-space point back to its logical coordinate. Inverse of
    /// [`AxisFrame3::c2p`].
    pub fn p2c(&self, point: DVec3) -> DVec3 {
        (point - self.origin) / self.unit_lengths()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/space/axes.rs"]
mod tests;
