//! Input handling: event types, the per-tick pointer sample, and the input
//! processor that converts raw window events into gallery commands.

/// Platform-agnostic input events.
pub mod event;
/// Pointer state sampled once per tick.
pub mod pointer;
/// Converts raw events into commands and pointer samples.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use pointer::PointerSample;
pub use processor::InputProcessor;
