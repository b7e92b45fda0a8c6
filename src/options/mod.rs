//! Centralized gallery options with TOML preset support.
//!
//! All tweakable settings (motion, particles, camera, initial layout,
//! keybindings) are consolidated here. Options serialize to/from TOML so a
//! host can keep named presets next to its assets.

mod animation;
mod camera;
mod keybindings;
mod layout;
mod particles;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use keybindings::{KeyAction, KeybindingOptions};
pub use layout::LayoutOptions;
pub use particles::{ParticleMotion, ParticleOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Item motion parameters.
    pub animation: AnimationOptions,
    /// Per-item particle cloud parameters.
    pub particles: ParticleOptions,
    /// Camera projection and follow parameters.
    pub camera: CameraOptions,
    /// Formation selection.
    pub layout: LayoutOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::OptionsParse`] when the text is not valid
    /// TOML or a field has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self, GalleryError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| GalleryError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Io`] if the file cannot be read and
    /// [`GalleryError::OptionsParse`] if it is malformed.
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let content = std::fs::read_to_string(path).map_err(GalleryError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::OptionsParse`] if serialization fails and
    /// [`GalleryError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), GalleryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GalleryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GalleryError::Io)?;
        }
        std::fs::write(path, content).map_err(GalleryError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
