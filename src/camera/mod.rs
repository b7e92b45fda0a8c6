//! Camera system for viewing the gallery.
//!
//! Provides a look-at camera that drifts with the pointer, freezes while
//! the user drags, and takes keyboard nudges.

/// Core camera struct and GPU uniform types.
pub mod core;
/// Pointer follow, nudges, and home reset.
pub mod rig;

pub use self::core::{Camera, CameraUniform};
pub use self::rig::{CameraRig, NudgeDirection};
