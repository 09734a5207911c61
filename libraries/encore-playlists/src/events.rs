//! Playlist Events

use encore_core::{PlaylistId, TrackId};
use serde::{Deserialize, Serialize};

/// Events emitted by the playlist collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaylistEvent {
    Created {
        playlist_id: PlaylistId,
        name: String,
    },

    Deleted {
        playlist_id: PlaylistId,
    },

    Renamed {
        playlist_id: PlaylistId,
        name: String,
    },

    /// Tracks appended (only those not already present)
    TracksAdded {
        playlist_id: PlaylistId,
        track_ids: Vec<TrackId>,
    },

    /// Tracks removed; empty when a removal only refreshed `updated_at`
    TracksRemoved {
        playlist_id: PlaylistId,
        track_ids: Vec<TrackId>,
    },
}
