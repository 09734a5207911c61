/// Playlist domain type
use crate::types::{PlaylistId, Track, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-created playlist
///
/// Holds its own copies of the tracks it references. No two entries share a
/// track id; the same track may sit in any number of playlists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name (non-empty after trim)
    pub name: String,

    /// Tracks in insertion order
    pub tracks: Vec<Track>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last structural change (add/remove/rename)
    pub updated_at: DateTime<Utc>,
}

impl Playlist {
    /// Create an empty playlist with a fresh ID
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            tracks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the playlist holds a track
    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.tracks.iter().any(|t| &t.id == track_id)
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Total duration of all tracks in milliseconds
    pub fn total_duration_ms(&self) -> u64 {
        self.tracks.iter().map(|t| t.duration_ms).sum()
    }
}
