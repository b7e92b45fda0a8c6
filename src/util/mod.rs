//! Host-side helpers.

/// Frame timing and FPS helpers.
pub mod frame_timing;
