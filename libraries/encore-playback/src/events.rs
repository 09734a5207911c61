//! Playback Events
//!
//! Delivered synchronously to subscribers after each committed mutation of
//! the playback store.

use crate::types::TransportState;
use encore_core::{RepeatMode, ShuffleMode, TrackId};
use serde::{Deserialize, Serialize};

/// Events emitted by the playback store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Library replaced from a media scan
    LibraryChanged {
        /// Number of tracks in the new library
        track_count: usize,
    },

    /// Current track changed (selection, next/previous, stop, delete)
    CurrentTrackChanged {
        /// ID of the new current track, if any
        track_id: Option<TrackId>,
        /// ID of the previous current track, if any
        previous_track_id: Option<TrackId>,
    },

    /// Transport moved between idle, playing and paused
    StateChanged {
        /// The new transport state
        state: TransportState,
    },

    /// Track added to or removed from favorites
    FavoriteToggled {
        track_id: TrackId,
        is_favorite: bool,
    },

    /// Track removed from the library
    TrackDeleted { track_id: TrackId },

    /// Track display name changed
    TrackRenamed { track_id: TrackId, filename: String },

    /// Repeat mode changed
    RepeatChanged { mode: RepeatMode },

    /// Shuffle mode changed
    ShuffleChanged { mode: ShuffleMode },

    /// Transport failure that was recovered to a stopped transport
    Error {
        /// Error message
        message: String,
    },
}
