//! Record types shared by the decoders, the extractor, and the validator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for a field that could not be found. The validator treats it
/// the same as an empty field.
pub const NOT_AVAILABLE: &str = "Not Available";

/// The four fields every record carries, in deficiency-report order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FieldLabel {
    Title,
    Director,
    Producer,
    MusicComposer,
}

impl FieldLabel {
    /// Fixed report order: Title, Director, Producer, Music Composer.
    pub const ALL: [FieldLabel; 4] = [
        FieldLabel::Title,
        FieldLabel::Director,
        FieldLabel::Producer,
        FieldLabel::MusicComposer,
    ];

    /// Human-readable label as it appears in deficiency reports.
    pub fn label(self) -> &'static str {
        match self {
            FieldLabel::Title => "Title",
            FieldLabel::Director => "Director",
            FieldLabel::Producer => "Producer",
            FieldLabel::MusicComposer => "Music Composer",
        }
    }
}

impl fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decoder output before normalization. `None` means the source carried no
/// usable value for the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartialRecord {
    pub title: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub music_composer: Option<String>,
}

impl PartialRecord {
    /// Normalizes into a [`CanonicalRecord`]: every field is trimmed, and
    /// absent or blank values become [`NOT_AVAILABLE`]. This is the only
    /// place sentinel filling happens.
    pub fn into_canonical(self) -> CanonicalRecord {
        CanonicalRecord {
            title: normalize_field(self.title),
            director: normalize_field(self.director),
            producer: normalize_field(self.producer),
            music_composer: normalize_field(self.music_composer),
        }
    }
}

fn normalize_field(value: Option<String>) -> String {
    match value {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

/// The normalized record all decoders converge to. All four fields are
/// always present; a field that could not be found holds [`NOT_AVAILABLE`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    pub title: String,
    pub director: String,
    pub producer: String,
    pub music_composer: String,
}

impl CanonicalRecord {
    /// Field accessor keyed by label, used by the validator.
    pub fn field(&self, label: FieldLabel) -> &str {
        match label {
            FieldLabel::Title => &self.title,
            FieldLabel::Director => &self.director,
            FieldLabel::Producer => &self.producer,
            FieldLabel::MusicComposer => &self.music_composer,
        }
    }
}
