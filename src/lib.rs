//! Anima is the staging-math core for scripted educational animations.
//!
//! Scenes that explain computer-architecture and graphics concepts are built
//! by placing objects in logical axis frames, orienting them with sequential
//! world-frame rotations, and projecting 3D points onto a near plane for the
//! pinhole-camera walkthroughs. This crate holds that math and nothing else:
//! the choreography, styling, and drawing all live with the renderer.
//!
//! # Staging overview
//!
//! 1. **Frame**: [`AxisFrame3`] maps logical coordinates to scene points
//!    (`c2p`) and back (`p2c`).
//! 2. **Orient**: [`OrientationComposer`] accumulates rotations about the
//!    fixed world axes into one orthonormal matrix.
//! 3. **Project**: [`project_point`] (or a positioned [`CameraRig`]) maps a
//!    camera-space point onto the plane at [`NearPlane`] distance in front of
//!    the pinhole origin.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure-by-default**: every operation is a value computation; the one
//!   stateful type ([`OrientationComposer`]) is owned by its caller and never
//!   shared.
//! - **Explicit degenerate cases**: a point in the camera plane (`z == 0`)
//!   has no finite projection and fails with [`AnimaError::Projection`]
//!   instead of producing infinities.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod camera;
mod foundation;
mod space;

/// Shared transform helpers (interpolation, pivoted rotation).
pub mod transform;

pub use camera::orientation::OrientationComposer;
pub use camera::projection::project_point;
pub use camera::rig::CameraRig;
pub use foundation::core::{DMat3, DVec3, NearPlane};
pub use foundation::error::{AnimaError, AnimaResult};
pub use space::axes::{AxisFrame3, AxisRange};
