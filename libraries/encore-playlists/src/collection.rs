//! Playlist collection store
//!
//! Playlists hold their own copies of tracks and are never reconciled with
//! the library: deleting or renaming a library track leaves playlists as
//! they were.

use crate::{
    clock::{Clock, SystemClock},
    events::PlaylistEvent,
};
use encore_core::{
    EncoreError, Observers, OpOutcome, Playlist, PlaylistId, Result, SubscriptionId, Track,
    TrackId,
};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Ordered collection of user playlists
pub struct PlaylistCollection {
    playlists: Vec<Playlist>,
    clock: Arc<dyn Clock>,
    observers: Observers<PlaylistEvent>,
}

impl Default for PlaylistCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaylistCollection {
    /// Empty collection stamped by the wall clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            playlists: Vec::new(),
            clock,
            observers: Observers::new(),
        }
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&PlaylistEvent) + Send + Sync + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ===== Reads =====

    /// Playlists in creation order
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn get(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Playlists that hold `track_id`
    pub fn playlists_containing(&self, track_id: &TrackId) -> Vec<&Playlist> {
        self.playlists
            .iter()
            .filter(|p| p.contains(track_id))
            .collect()
    }

    // ===== Mutations =====

    /// Create an empty playlist and append it
    ///
    /// The name is trimmed; a blank name is rejected.
    pub fn create_playlist(&mut self, name: &str) -> Result<Playlist> {
        let name = valid_name(name)?;
        let playlist = Playlist::new(name, self.clock.now());

        info!("Created playlist {} ({:?})", playlist.id, playlist.name);
        self.playlists.push(playlist.clone());
        self.observers.notify(&PlaylistEvent::Created {
            playlist_id: playlist.id.clone(),
            name: playlist.name.clone(),
        });
        Ok(playlist)
    }

    /// Append tracks not already in the playlist, keeping argument order
    ///
    /// Duplicates inside `tracks` are added once. `updated_at` only moves
    /// when something was appended.
    pub fn add_tracks_to_playlist(&mut self, id: &PlaylistId, tracks: &[Track]) -> OpOutcome {
        let now = self.clock.now();
        let Some(playlist) = self.find_mut(id) else {
            return OpOutcome::NoOp;
        };

        let mut seen: HashSet<TrackId> = playlist.tracks.iter().map(|t| t.id.clone()).collect();
        let fresh: Vec<Track> = tracks
            .iter()
            .filter(|t| seen.insert(t.id.clone()))
            .cloned()
            .collect();
        if fresh.is_empty() {
            return OpOutcome::NoOp;
        }

        let track_ids: Vec<TrackId> = fresh.iter().map(|t| t.id.clone()).collect();
        playlist.tracks.extend(fresh);
        playlist.updated_at = now;

        debug!("Added {} tracks to playlist {}", track_ids.len(), id);
        self.observers.notify(&PlaylistEvent::TracksAdded {
            playlist_id: id.clone(),
            track_ids,
        });
        OpOutcome::Applied
    }

    /// Remove one track from a playlist
    ///
    /// `updated_at` is refreshed even when the track was not in the
    /// playlist. Unknown playlists are a no-op.
    pub fn remove_track_from_playlist(
        &mut self,
        id: &PlaylistId,
        track_id: &TrackId,
    ) -> OpOutcome {
        self.remove_tracks_from_playlist(id, std::slice::from_ref(track_id))
    }

    /// Remove every listed track from a playlist (selection mode)
    pub fn remove_tracks_from_playlist(
        &mut self,
        id: &PlaylistId,
        track_ids: &[TrackId],
    ) -> OpOutcome {
        let now = self.clock.now();
        let Some(playlist) = self.find_mut(id) else {
            return OpOutcome::NoOp;
        };

        let doomed: HashSet<&TrackId> = track_ids.iter().collect();
        let mut removed = Vec::new();
        playlist.tracks.retain(|t| {
            if doomed.contains(&t.id) {
                removed.push(t.id.clone());
                false
            } else {
                true
            }
        });
        playlist.updated_at = now;

        debug!("Removed {} tracks from playlist {}", removed.len(), id);
        self.observers.notify(&PlaylistEvent::TracksRemoved {
            playlist_id: id.clone(),
            track_ids: removed,
        });
        OpOutcome::Applied
    }

    /// Drop a playlist; its tracks stay in the library
    pub fn delete_playlist(&mut self, id: &PlaylistId) -> OpOutcome {
        let before = self.playlists.len();
        self.playlists.retain(|p| &p.id != id);
        if self.playlists.len() == before {
            return OpOutcome::NoOp;
        }

        info!("Deleted playlist {}", id);
        self.observers.notify(&PlaylistEvent::Deleted {
            playlist_id: id.clone(),
        });
        OpOutcome::Applied
    }

    /// Rename a playlist
    ///
    /// Same trimming and blank-name rule as [`Self::create_playlist`]. Track
    /// names inside the playlist are not touched.
    pub fn rename_playlist(&mut self, id: &PlaylistId, new_name: &str) -> Result<OpOutcome> {
        let name = valid_name(new_name)?;
        let now = self.clock.now();
        let Some(playlist) = self.find_mut(id) else {
            return Ok(OpOutcome::NoOp);
        };

        playlist.name = name.to_string();
        playlist.updated_at = now;

        debug!("Renamed playlist {} to {:?}", id, name);
        self.observers.notify(&PlaylistEvent::Renamed {
            playlist_id: id.clone(),
            name: name.to_string(),
        });
        Ok(OpOutcome::Applied)
    }

    fn find_mut(&mut self, id: &PlaylistId) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| &p.id == id)
    }
}

fn valid_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(EncoreError::invalid_input("playlist name cannot be empty"));
    }
    Ok(trimmed)
}

impl fmt::Debug for PlaylistCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaylistCollection")
            .field("playlists", &self.playlists.len())
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}
