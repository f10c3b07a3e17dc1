use crate::foundation::error::{AnimaError, AnimaResult};

pub use glam::{DMat3, DVec3};

/// Distance from the camera origin to the projection plane, along the
/// camera's principal axis.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct NearPlane(f64); // must be finite and > 0

impl NearPlane {
    /// Create a near-plane distance, rejecting non-finite or non-positive
    /// values.
    pub fn new(distance: f64) -> AnimaResult<Self> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(AnimaError::validation(
                "NearPlane distance must be finite and > 0",
            ));
        }
        Ok(Self(distance))
    }

    /// The distance as a plain scalar.
    pub fn distance(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
