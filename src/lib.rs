// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Layout and animation core for a 3D memory gallery.
//!
//! Memora arranges a collection of media items ("memories") into one of
//! four formations and animates them every frame: each item eases toward
//! its target, bobs, spins slowly, and carries a drifting particle cloud,
//! while the camera follows the pointer. Drawing is left to the host, which
//! receives transforms through a [`render::RenderSink`].
//!
//! # Key entry points
//!
//! - [`gallery::Gallery`] - the session context; call
//!   [`tick`](gallery::Gallery::tick) once per frame
//! - [`layout::compute`] - the pure placement function behind every
//!   formation
//! - [`options::Options`] - runtime configuration (motion, particles,
//!   camera, initial layout, keybindings)
//! - [`input::InputProcessor`] - turns window events into pointer samples
//!   and commands
//!
//! # Frame loop
//!
//! ```ignore
//! let mut gallery = Gallery::with_samples(Options::default());
//! loop {
//!     // between frames: gallery.execute(cmd), gallery.renderable_ready(i, h)
//!     let report = gallery.tick(
//!         FrameInput { elapsed, dt, pointer: input.sample() },
//!         &mut sink,
//!     );
//! }
//! ```

pub mod animation;
pub mod camera;
pub mod error;
pub mod gallery;
pub mod input;
pub mod layout;
pub mod options;
pub mod render;
pub mod store;
pub mod util;

#[cfg(test)]
mod test_utils;

pub use error::GalleryError;
pub use gallery::{
    FrameInput, FrameReport, Gallery, GalleryCommand, GalleryEvent,
};
pub use layout::LayoutKind;
pub use options::Options;
