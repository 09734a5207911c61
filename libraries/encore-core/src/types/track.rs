/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Audio track as reported by the media library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier (never changes on rename)
    pub id: TrackId,

    /// Display name, usually the file name
    pub filename: String,

    /// Track duration in milliseconds
    pub duration_ms: u64,

    /// Opaque locator handed to the transport
    pub source_uri: String,

    /// File size in bytes
    pub file_size_bytes: u64,

    /// Uppercase file extension derived from the filename, empty if none
    pub extension: String,

    /// Artwork locator
    pub artwork_uri: Option<String>,
}

impl Track {
    /// Create a track, deriving the extension from `filename`
    pub fn new(
        id: impl Into<TrackId>,
        filename: impl Into<String>,
        duration_ms: u64,
        source_uri: impl Into<String>,
        file_size_bytes: u64,
    ) -> Self {
        let filename = filename.into();
        let extension = extension_of(&filename);
        Self {
            id: id.into(),
            filename,
            duration_ms,
            source_uri: source_uri.into(),
            file_size_bytes,
            extension,
            artwork_uri: None,
        }
    }

    /// Attach an artwork locator
    #[must_use]
    pub fn with_artwork(mut self, artwork_uri: impl Into<String>) -> Self {
        self.artwork_uri = Some(artwork_uri.into());
        self
    }

    /// Get the track duration as a Duration
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Uppercase extension of a file name
///
/// Only a trailing run of ASCII letters/digits after the last `.` counts;
/// `"notes.final mix"` and `"README"` have no extension.
pub fn extension_of(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, suffix))
            if !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            suffix.to_ascii_uppercase()
        }
        _ => String::new(),
    }
}
