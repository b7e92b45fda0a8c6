use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::camera::NudgeDirection;
use crate::gallery::GalleryCommand;
use crate::layout::LayoutKind;

/// Discrete actions that can be bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move the camera toward the scene.
    NudgeForward,
    /// Move the camera away from the scene.
    NudgeBack,
    /// Move the camera left.
    NudgeLeft,
    /// Move the camera right.
    NudgeRight,
    /// Put the camera back at its home position.
    ResetCamera,
    /// Switch to the sphere formation.
    LayoutSphere,
    /// Switch to the spiral formation.
    LayoutSpiral,
    /// Switch to the cube formation.
    LayoutCube,
    /// Switch to the portal formation.
    LayoutPortal,
    /// Re-run the active formation (after uploads).
    Rearrange,
}

impl KeyAction {
    /// The gallery command this action triggers.
    #[must_use]
    pub fn to_command(self) -> GalleryCommand {
        match self {
            Self::NudgeForward => GalleryCommand::NudgeCamera {
                direction: NudgeDirection::Forward,
            },
            Self::NudgeBack => GalleryCommand::NudgeCamera {
                direction: NudgeDirection::Back,
            },
            Self::NudgeLeft => GalleryCommand::NudgeCamera {
                direction: NudgeDirection::Left,
            },
            Self::NudgeRight => GalleryCommand::NudgeCamera {
                direction: NudgeDirection::Right,
            },
            Self::ResetCamera => GalleryCommand::ResetCamera,
            Self::LayoutSphere => GalleryCommand::SetLayout {
                kind: LayoutKind::Sphere,
            },
            Self::LayoutSpiral => GalleryCommand::SetLayout {
                kind: LayoutKind::Spiral,
            },
            Self::LayoutCube => GalleryCommand::SetLayout {
                kind: LayoutKind::Cube,
            },
            Self::LayoutPortal => GalleryCommand::SetLayout {
                kind: LayoutKind::Portal,
            },
            Self::Rearrange => GalleryCommand::Rearrange,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ResetCamera` → `"Space"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::NudgeForward, "KeyW".into()),
            (KeyAction::NudgeBack, "KeyS".into()),
            (KeyAction::NudgeLeft, "KeyA".into()),
            (KeyAction::NudgeRight, "KeyD".into()),
            (KeyAction::ResetCamera, "Space".into()),
            (KeyAction::LayoutSphere, "Digit1".into()),
            (KeyAction::LayoutSpiral, "Digit2".into()),
            (KeyAction::LayoutCube, "Digit3".into()),
            (KeyAction::LayoutPortal, "Digit4".into()),
            (KeyAction::Rearrange, "KeyR".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Bind `action` to `key`, replacing any previous key for that action.
    pub fn bind(&mut self, action: KeyAction, key: &str) {
        let _ = self.bindings.insert(action, key.to_owned());
        self.rebuild_reverse_map();
    }
}
