//! Crate-level error types.

use std::fmt;

/// Errors produced by the memora crate.
#[derive(Debug)]
pub enum GalleryError {
    /// A layout name outside {sphere, spiral, cube, portal}.
    UnknownLayout(String),
    /// A clarity score outside 0–100.
    InvalidClarity(i64),
    /// Failed to parse an item manifest.
    Manifest(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLayout(name) => {
                write!(f, "unknown layout kind: {name:?}")
            }
            Self::InvalidClarity(value) => {
                write!(f, "clarity must be within 0..=100, got {value}")
            }
            Self::Manifest(msg) => write!(f, "manifest error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for GalleryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GalleryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
