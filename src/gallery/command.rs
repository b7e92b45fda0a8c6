//! The gallery's interactive vocabulary.
//!
//! Key presses, toolbar buttons, and programmatic calls all become a
//! `GalleryCommand` passed to [`Gallery::execute`](super::Gallery::execute).

use crate::camera::NudgeDirection;
use crate::layout::LayoutKind;

/// A discrete request from the control layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCommand {
    /// Arrange every item in a formation.
    SetLayout {
        /// Formation to switch to.
        kind: LayoutKind,
    },
    /// Re-run the active formation (after items were added).
    Rearrange,
    /// Move the camera one step.
    NudgeCamera {
        /// Which way.
        direction: NudgeDirection,
    },
    /// Put the camera back at its home position.
    ResetCamera,
    /// The viewport changed size.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}
