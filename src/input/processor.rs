//! Folds raw platform events into per-tick pointer samples and commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! viewport size, held buttons) and the key-binding map. It is the only
//! thing that sits between raw window events and the gallery's
//! [`execute`](crate::gallery::Gallery::execute) and
//! [`tick`](crate::gallery::Gallery::tick) methods.

use std::collections::HashSet;

use super::event::{InputEvent, MouseButton};
use super::pointer::PointerSample;
use crate::gallery::GalleryCommand;
use crate::options::{KeyAction, KeybindingOptions};

/// Converts raw window events into [`GalleryCommand`]s and
/// [`PointerSample`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input.handle_event(event) {
///     gallery.execute(cmd);
/// }
/// if let Some(cmd) = input.handle_key_press("Digit2") {
///     gallery.execute(cmd);
/// }
///
/// // Once per frame:
/// let pointer = input.sample();
/// gallery.tick(FrameInput { elapsed, dt, pointer }, &mut sink);
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Cursor position in physical pixels.
    cursor: (f32, f32),
    /// Viewport size in physical pixels.
    viewport: (u32, u32),
    /// Buttons currently held.
    held: HashSet<MouseButton>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Processor for a `width` × `height` viewport with default bindings.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_key_bindings(width, height, KeybindingOptions::default())
    }

    /// Processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(
        width: u32,
        height: u32,
        key_bindings: KeybindingOptions,
    ) -> Self {
        Self {
            cursor: (width as f32 / 2.0, height as f32 / 2.0),
            viewport: (width, height),
            held: HashSet::new(),
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    /// Whether any mouse button is held.
    #[must_use]
    pub fn drag_active(&self) -> bool {
        !self.held.is_empty()
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<GalleryCommand> {
        self.key_bindings.lookup(key).map(KeyAction::to_command)
    }

    /// Fold one event into the input state. Only a resize produces a
    /// command; pointer events are picked up by [`sample`](Self::sample).
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<GalleryCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = (x, y);
                None
            }
            InputEvent::MouseButton { button, pressed } => {
                if pressed {
                    let _ = self.held.insert(button);
                } else {
                    let _ = self.held.remove(&button);
                }
                None
            }
            InputEvent::Resized { width, height } => {
                self.viewport = (width, height);
                Some(GalleryCommand::Resize { width, height })
            }
        }
    }

    /// Pointer state for this tick, in normalized device coordinates.
    ///
    /// A zero-sized viewport yields the center.
    #[must_use]
    pub fn sample(&self) -> PointerSample {
        let (w, h) = self.viewport;
        let (x, y) = if w == 0 || h == 0 {
            (0.0, 0.0)
        } else {
            (
                (self.cursor.0 / w as f32) * 2.0 - 1.0,
                -(self.cursor.1 / h as f32) * 2.0 + 1.0,
            )
        };
        PointerSample {
            x,
            y,
            drag_active: self.drag_active(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::NudgeDirection;
    use crate::layout::LayoutKind;

    #[test]
    fn cursor_maps_to_ndc() {
        let mut input = InputProcessor::new(800, 600);
        assert_eq!(input.sample(), PointerSample::default());

        let moved = |x, y| InputEvent::CursorMoved { x, y };
        let _ = input.handle_event(moved(0.0, 0.0));
        let s = input.sample();
        assert_eq!((s.x, s.y), (-1.0, 1.0));

        let _ = input.handle_event(moved(800.0, 600.0));
        let s = input.sample();
        assert_eq!((s.x, s.y), (1.0, -1.0));
    }

    #[test]
    fn any_held_button_is_a_drag() {
        let mut input = InputProcessor::new(800, 600);
        let press =
            |button, pressed| InputEvent::MouseButton { button, pressed };
        let _ = input.handle_event(press(MouseButton::Left, true));
        let _ = input.handle_event(press(MouseButton::Right, true));
        let _ = input.handle_event(press(MouseButton::Left, false));
        assert!(input.sample().drag_active);
        let _ = input.handle_event(press(MouseButton::Right, false));
        assert!(!input.sample().drag_active);
    }

    #[test]
    fn resize_rescales_and_forwards() {
        let mut input = InputProcessor::new(800, 600);
        let _ =
            input.handle_event(InputEvent::CursorMoved { x: 400.0, y: 0.0 });
        let cmd = input.handle_event(InputEvent::Resized {
            width: 1600,
            height: 600,
        });
        assert_eq!(
            cmd,
            Some(GalleryCommand::Resize {
                width: 1600,
                height: 600
            })
        );
        assert_eq!(input.sample().x, -0.5);

        let _ = input.handle_event(InputEvent::Resized { width: 0, height: 0 });
        assert_eq!(input.sample().x, 0.0);
    }

    #[test]
    fn default_keys() {
        let input = InputProcessor::new(800, 600);
        assert_eq!(
            input.handle_key_press("KeyW"),
            Some(GalleryCommand::NudgeCamera {
                direction: NudgeDirection::Forward
            })
        );
        assert_eq!(
            input.handle_key_press("Digit4"),
            Some(GalleryCommand::SetLayout {
                kind: LayoutKind::Portal
            })
        );
        assert_eq!(
            input.handle_key_press("KeyR"),
            Some(GalleryCommand::Rearrange)
        );
        assert_eq!(input.handle_key_press("Escape"), None);
    }

    #[test]
    fn rebinding_takes_effect() {
        let mut input = InputProcessor::new(800, 600);
        input
            .key_bindings_mut()
            .bind(KeyAction::ResetCamera, "KeyH");
        assert_eq!(
            input.handle_key_press("KeyH"),
            Some(GalleryCommand::ResetCamera)
        );
        assert_eq!(input.handle_key_press("Space"), None);
    }
}
