//! Shared transform helpers.

/// Interpolation along points and segments.
pub mod linear;
/// Rotation about an arbitrary pivot and axis.
pub mod rotation;
