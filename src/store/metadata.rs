//! Descriptive record carried by each item.
//!
//! This flat record is the only data contract at the control boundary. The
//! core stores it and hands it back from lookups; it never reads or edits
//! the fields while animating.

use std::fmt;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

/// Whether the source is a still image or a video.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image.
    #[default]
    Image,
    /// Video clip.
    Video,
}

impl MediaKind {
    /// Kind implied by a file name's extension; anything that is not a
    /// known video type is treated as an image.
    #[must_use]
    pub fn from_file_name(name: &str) -> Self {
        let is_video = mime_guess::from_path(name)
            .iter()
            .any(|mime| mime.type_() == mime_guess::mime::VIDEO);
        if is_video {
            Self::Video
        } else {
            Self::Image
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Image => "image",
            Self::Video => "video",
        })
    }
}

/// Opaque reference to the media source (URL, data URI, file path). The
/// asset loader resolves it; the core only carries it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceHandle(pub String);

/// Clarity score, 0–100.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct Clarity(u8);

impl Clarity {
    /// Highest valid score.
    pub const MAX: u8 = 100;

    /// Validate a raw score.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::InvalidClarity`] outside `0..=100`.
    pub fn new(value: i64) -> Result<Self, GalleryError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX)
            .map(Self)
            .ok_or(GalleryError::InvalidClarity(value))
    }

    /// The score.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// The score as a fraction of 100 (a fill ratio for a meter).
    #[must_use]
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / f32::from(Self::MAX)
    }
}

impl TryFrom<i64> for Clarity {
    type Error = GalleryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Clarity> for u8 {
    fn from(clarity: Clarity) -> Self {
        clarity.0
    }
}

/// Everything the gallery knows about one memory.
///
/// Manifests written for the browser gallery use `type` and `src`; both are
/// accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemoryMetadata {
    /// Image or video.
    #[serde(alias = "type")]
    pub kind: MediaKind,
    /// Where the asset loader finds the media.
    #[serde(alias = "src")]
    pub source: SourceHandle,
    /// Short title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Capture date, ISO `YYYY-MM-DD`.
    pub date: String,
    /// Where it happened.
    pub location: String,
    /// Emotion label.
    pub emotion: String,
    /// Clarity score.
    pub clarity: Clarity,
}

impl MemoryMetadata {
    /// Record for a file the user just uploaded.
    ///
    /// The title is the file name without its last extension and the
    /// clarity is drawn from `80..=99`. `date` is supplied by the host
    /// (usually today).
    pub fn from_upload<R: Rng + ?Sized>(
        file_name: &str,
        date: &str,
        rng: &mut R,
    ) -> Self {
        let kind = MediaKind::from_file_name(file_name);
        Self {
            kind,
            source: SourceHandle(file_name.to_owned()),
            title: strip_extension(file_name).to_owned(),
            description: format!(
                "Uploaded {kind} - \
                 A new memory added to your cosmic collection."
            ),
            date: date.to_owned(),
            location: "Personal Collection".to_owned(),
            emotion: "Joy".to_owned(),
            clarity: Clarity(rng.random_range(80..=99)),
        }
    }
}

/// `name` without its final `.ext`; names whose last dot has nothing (or a
/// path separator) after it are returned unchanged.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) => {
            let ext = &name[dot + 1..];
            if ext.is_empty() || ext.contains('/') {
                name
            } else {
                &name[..dot]
            }
        }
        None => name,
    }
}

/// Parse a JSON array of records.
///
/// # Errors
///
/// Returns [`GalleryError::Manifest`] for malformed JSON, missing fields, or
/// out-of-range clarity.
pub fn parse_manifest(
    json: &str,
) -> Result<Vec<MemoryMetadata>, GalleryError> {
    serde_json::from_str(json)
        .map_err(|e| GalleryError::Manifest(e.to_string()))
}

/// Read and parse a JSON manifest file.
///
/// # Errors
///
/// Returns [`GalleryError::Io`] if the file cannot be read and
/// [`GalleryError::Manifest`] if it does not parse.
pub fn load_manifest(path: &Path) -> Result<Vec<MemoryMetadata>, GalleryError> {
    let content = std::fs::read_to_string(path)?;
    parse_manifest(&content)
}

fn sample(
    source: &str,
    title: &str,
    description: &str,
    date: &str,
    location: &str,
    emotion: &str,
    clarity: u8,
) -> MemoryMetadata {
    MemoryMetadata {
        kind: MediaKind::Image,
        source: SourceHandle(source.to_owned()),
        title: title.to_owned(),
        description: description.to_owned(),
        date: date.to_owned(),
        location: location.to_owned(),
        emotion: emotion.to_owned(),
        clarity: Clarity(clarity.min(Clarity::MAX)),
    }
}

/// The six memories a fresh gallery opens with.
#[must_use]
pub fn sample_memories() -> Vec<MemoryMetadata> {
    vec![
        sample(
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=600&fit=crop",
            "Mountain Adventure",
            "A breathtaking sunrise captured during our hiking trip to the \
             Rocky Mountains. The golden light painted the peaks in warm hues, \
             creating a moment of pure tranquility.",
            "2024-08-15",
            "Rocky Mountains, Colorado",
            "Wonder",
            95,
        ),
        sample(
            "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=400&h=600&fit=crop",
            "Ocean Serenity",
            "Peaceful morning at the beach, watching the waves gently kiss the \
             shore. The perfect moment of tranquility and connection with \
             nature.",
            "2024-07-22",
            "Malibu Beach, California",
            "Peace",
            88,
        ),
        sample(
            "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=400&h=600&fit=crop",
            "Forest Walk",
            "Autumn leaves creating a natural carpet through the enchanted \
             forest path. Nature's artwork displaying the beauty of seasonal \
             change.",
            "2024-10-03",
            "Vermont Forest Trail",
            "Nostalgia",
            92,
        ),
        sample(
            "https://images.unsplash.com/photo-1514905552197-0610a4d8fd73?w=400&h=600&fit=crop",
            "City Lights",
            "The urban jungle comes alive at night, with countless stories \
             unfolding in each glowing window. A testament to human creativity \
             and ambition.",
            "2024-09-18",
            "New York City",
            "Excitement",
            78,
        ),
        sample(
            "https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=400&h=600&fit=crop",
            "Desert Dreams",
            "Endless dunes stretching to the horizon, where silence speaks \
             louder than words. A place of meditation and infinite \
             possibilities.",
            "2024-06-12",
            "Sahara Desert, Morocco",
            "Solitude",
            100,
        ),
        sample(
            "https://images.unsplash.com/photo-1518837695005-2083093ee35b?w=400&h=600&fit=crop",
            "Cosmic Wonder",
            "Gazing up at the infinite cosmos, where stars tell stories of \
             ancient light and distant worlds.",
            "2024-11-08",
            "Observatory Peak",
            "Awe",
            96,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn clarity_bounds() {
        assert_eq!(Clarity::new(0).unwrap().get(), 0);
        assert_eq!(Clarity::new(100).unwrap().get(), 100);
        assert!(matches!(
            Clarity::new(101),
            Err(GalleryError::InvalidClarity(101))
        ));
        assert!(matches!(
            Clarity::new(-1),
            Err(GalleryError::InvalidClarity(-1))
        ));
        assert!((Clarity::new(25).unwrap().fraction() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn six_samples_with_valid_scores() {
        let samples = sample_memories();
        assert_eq!(samples.len(), 6);
        assert_eq!(samples[0].title, "Mountain Adventure");
        assert_eq!(samples[5].emotion, "Awe");
        assert_eq!(samples[4].clarity.get(), 100);
        assert!(samples.iter().all(|m| m.kind == MediaKind::Image));
    }

    #[test]
    fn upload_of_a_video() {
        let mut rng = StdRng::seed_from_u64(1);
        let m = MemoryMetadata::from_upload(
            "beach day.mp4",
            "2025-01-02",
            &mut rng,
        );
        assert_eq!(m.kind, MediaKind::Video);
        assert_eq!(m.title, "beach day");
        assert_eq!(
            m.description,
            "Uploaded video - A new memory added to your cosmic collection."
        );
        assert_eq!(m.location, "Personal Collection");
        assert_eq!(m.emotion, "Joy");
        assert_eq!(m.date, "2025-01-02");
        assert!((80..=99).contains(&m.clarity.get()));
    }

    #[test]
    fn upload_of_an_image_keeps_inner_dots() {
        let mut rng = StdRng::seed_from_u64(1);
        let m =
            MemoryMetadata::from_upload("trip.v2.jpeg", "2025-01-02", &mut rng);
        assert_eq!(m.kind, MediaKind::Image);
        assert_eq!(m.title, "trip.v2");
    }

    #[test]
    fn unknown_extensions_are_images() {
        assert_eq!(MediaKind::from_file_name("notes.zzz"), MediaKind::Image);
        assert_eq!(MediaKind::from_file_name("README"), MediaKind::Image);
        assert_eq!(MediaKind::from_file_name("clip.webm"), MediaKind::Video);
    }

    #[test]
    fn strip_extension_edge_cases() {
        assert_eq!(strip_extension("photo.png"), "photo");
        assert_eq!(strip_extension("photo."), "photo.");
        assert_eq!(strip_extension("noext"), "noext");
        assert_eq!(strip_extension("dir.d/file"), "dir.d/file");
    }

    #[test]
    fn manifest_accepts_browser_field_names() {
        let json = r#"[{
            "type": "video",
            "src": "clips/launch.mp4",
            "title": "Launch",
            "description": "Liftoff",
            "date": "2024-05-01",
            "location": "Cape",
            "emotion": "Awe",
            "clarity": 90
        }]"#;
        let items = parse_manifest(json).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, MediaKind::Video);
        assert_eq!(items[0].source, SourceHandle("clips/launch.mp4".into()));
        assert_eq!(items[0].clarity.get(), 90);
    }

    #[test]
    fn manifest_rejects_out_of_range_clarity() {
        let json = r#"[{"kind":"image","source":"a.png","title":"",
            "description":"",
            "date":"","location":"","emotion":"","clarity":140}]"#;
        assert!(matches!(parse_manifest(json), Err(GalleryError::Manifest(_))));
    }

    #[test]
    fn samples_round_trip_through_json() {
        let json = serde_json::to_string(&sample_memories()).unwrap();
        assert_eq!(parse_manifest(&json).unwrap(), sample_memories());
    }
}
