//! Playback store - library, favorites and transport
//!
//! Single source of truth for what the library is, what is playing and what
//! is favorited. Transport operations are async and take `&mut self`, so a
//! second transport call cannot start while one is in flight.

use crate::{
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    shuffle::shuffled_order,
    transport::{Transport, TransportHandle, TransportStatus},
    types::{NowPlaying, RemoteCommand, TransportState},
};
use encore_core::{
    config::PlaybackSettings, Observers, OpOutcome, RepeatMode, ShuffleMode, SubscriptionId,
    Track, TrackId,
};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Observable state before a mutation, compared afterwards to emit events
struct Snapshot {
    state: TransportState,
    current: Option<TrackId>,
}

/// Playback state store
///
/// Owns:
/// - The library (replaced wholesale on each media scan)
/// - The favorite set (may hold ids no longer in the library)
/// - The current track and the single transport handle
/// - Repeat and shuffle modes
pub struct PlaybackState {
    library: Vec<Track>,
    favorites: HashSet<TrackId>,
    current_track: Option<Track>,
    is_playing: bool,

    transport: Arc<dyn Transport>,
    handle: Option<Box<dyn TransportHandle>>,

    repeat: RepeatMode,
    shuffle: ShuffleMode,
    // Permutation of library ids, empty unless shuffle is on
    shuffled_order: Vec<TrackId>,

    observers: Observers<PlaybackEvent>,
}

impl PlaybackState {
    /// Create an empty store playing through `transport`
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_settings(transport, PlaybackSettings::default())
    }

    /// Create an empty store with initial repeat/shuffle modes
    pub fn with_settings(transport: Arc<dyn Transport>, settings: PlaybackSettings) -> Self {
        Self {
            library: Vec::new(),
            favorites: HashSet::new(),
            current_track: None,
            is_playing: false,
            transport,
            handle: None,
            repeat: settings.repeat,
            shuffle: settings.shuffle,
            shuffled_order: Vec::new(),
            observers: Observers::new(),
        }
    }

    // ===== Observation =====

    /// Register a callback for every committed change
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&PlaybackEvent) + Send + Sync + 'static,
    {
        self.observers.subscribe(callback)
    }

    /// Remove a callback
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ===== Reads =====

    /// Library in display order
    pub fn library(&self) -> &[Track] {
        &self.library
    }

    /// Favorite ids, including stale ones
    pub fn favorites(&self) -> &HashSet<TrackId> {
        &self.favorites
    }

    /// Check if a track is a favorite
    pub fn is_favorite(&self, track_id: &TrackId) -> bool {
        self.favorites.contains(track_id)
    }

    /// Library tracks that are favorites, in library order
    pub fn favorite_tracks(&self) -> Vec<&Track> {
        self.library
            .iter()
            .filter(|t| self.favorites.contains(&t.id))
            .collect()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Transport state derived from the handle
    pub fn transport_state(&self) -> TransportState {
        match (self.handle.is_some(), self.is_playing) {
            (false, _) => TransportState::Idle,
            (true, true) => TransportState::Playing,
            (true, false) => TransportState::Paused,
        }
    }

    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    pub fn shuffle(&self) -> ShuffleMode {
        self.shuffle
    }

    /// Order next/previous walk: the library, or its shuffled permutation
    pub fn play_order(&self) -> Vec<&Track> {
        if self.shuffle.is_on() {
            self.shuffled_order
                .iter()
                .filter_map(|id| self.find(id))
                .collect()
        } else {
            self.library.iter().collect()
        }
    }

    /// Snapshot for the notification/presence reporter
    pub fn now_playing(&self) -> Option<NowPlaying> {
        self.current_track.as_ref().map(|track| NowPlaying {
            track_id: track.id.clone(),
            filename: track.filename.clone(),
            is_playing: self.is_playing,
        })
    }

    // ===== Library and selection =====

    /// Replace the library with a fresh scan
    ///
    /// Current track, favorites and play status are left alone.
    pub fn set_library(&mut self, tracks: Vec<Track>) {
        self.library = tracks;
        if self.shuffle.is_on() {
            self.reshuffle();
        }
        info!("Library loaded with {} tracks", self.library.len());
        self.observers.notify(&PlaybackEvent::LibraryChanged {
            track_count: self.library.len(),
        });
    }

    /// Select a track without starting playback
    ///
    /// With shuffle on, a newly selected track moves to the front of the
    /// play order so next reaches every other track.
    pub fn set_current_track(&mut self, track: Option<Track>) {
        let before = self.snapshot();
        self.current_track = track;
        if self.shuffle.is_on() && before.current.as_ref() != self.current_id() {
            self.pin_current_in_order();
        }
        self.publish_changes(&before);
    }

    /// Flip a track's favorite status
    ///
    /// The id is not checked against the library. Returns the new status.
    pub fn toggle_favorite(&mut self, track_id: &TrackId) -> bool {
        let is_favorite = if self.favorites.remove(track_id) {
            false
        } else {
            self.favorites.insert(track_id.clone());
            true
        };
        debug!("Track {} favorite: {}", track_id, is_favorite);
        self.observers.notify(&PlaybackEvent::FavoriteToggled {
            track_id: track_id.clone(),
            is_favorite,
        });
        is_favorite
    }

    /// Change a track's display name
    ///
    /// Updates the library entry and the current track copy. Names that are
    /// empty after trimming are ignored.
    pub fn rename_track(&mut self, track_id: &TrackId, new_name: &str) -> OpOutcome {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return OpOutcome::NoOp;
        }

        let mut renamed = false;
        if let Some(track) = self.library.iter_mut().find(|t| &t.id == track_id) {
            track.filename = new_name.to_string();
            renamed = true;
        }
        if let Some(current) = self.current_track.as_mut().filter(|t| &t.id == track_id) {
            current.filename = new_name.to_string();
            renamed = true;
        }

        if !renamed {
            return OpOutcome::NoOp;
        }

        debug!("Renamed track {} to {:?}", track_id, new_name);
        self.observers.notify(&PlaybackEvent::TrackRenamed {
            track_id: track_id.clone(),
            filename: new_name.to_string(),
        });
        OpOutcome::Applied
    }

    /// Remove a track from the library and favorites
    ///
    /// Deleting the current track releases the transport and clears the
    /// selection. The removal is committed even if the release fails; the
    /// failure is still returned.
    pub async fn delete_track(&mut self, track_id: &TrackId) -> Result<OpOutcome> {
        let in_library = self.library.iter().any(|t| &t.id == track_id);
        let is_current = self.current_id() == Some(track_id);
        let was_favorite = self.favorites.contains(track_id);
        if !in_library && !is_current && !was_favorite {
            return Ok(OpOutcome::NoOp);
        }

        let before = self.snapshot();
        self.library.retain(|t| &t.id != track_id);
        self.shuffled_order.retain(|id| id != track_id);
        self.favorites.remove(track_id);

        let mut result = Ok(());
        if is_current {
            result = self.release_handle().await;
            self.current_track = None;
            self.is_playing = false;
        }

        info!("Deleted track {}", track_id);
        self.observers.notify(&PlaybackEvent::TrackDeleted {
            track_id: track_id.clone(),
        });
        self.publish_changes(&before);
        result.map(|()| OpOutcome::Applied)
    }

    // ===== Transport =====

    /// Start the current track from the beginning
    ///
    /// Any loaded handle is released first. Without a current track nothing
    /// happens and the transport is not touched.
    pub async fn play(&mut self) -> Result<OpOutcome> {
        if self.current_track.is_none() {
            debug!("play() ignored: no current track");
            return Ok(OpOutcome::NoOp);
        }

        let before = self.snapshot();
        let result = self.start_current().await;
        self.publish_changes(&before);
        result.map(|()| OpOutcome::Applied)
    }

    /// Play the track after the current one in the play order
    ///
    /// No-op at the end of the order or when the current track is not in it.
    pub async fn play_next(&mut self) -> Result<OpOutcome> {
        match self.neighbor(true) {
            Some(track) => self.switch_to(track).await,
            None => Ok(OpOutcome::NoOp),
        }
    }

    /// Play the track before the current one in the play order
    ///
    /// No-op at the start of the order or when the current track is not in it.
    pub async fn play_previous(&mut self) -> Result<OpOutcome> {
        match self.neighbor(false) {
            Some(track) => self.switch_to(track).await,
            None => Ok(OpOutcome::NoOp),
        }
    }

    /// Pause a playing track or resume a paused one
    pub async fn toggle_play_pause(&mut self) -> Result<OpOutcome> {
        if self.handle.is_none() {
            return Ok(OpOutcome::NoOp);
        }

        let before = self.snapshot();
        let was_playing = self.is_playing;
        let outcome = match self.handle.as_mut() {
            Some(handle) if was_playing => handle.pause().await,
            Some(handle) => handle.start().await,
            None => return Ok(OpOutcome::NoOp),
        };

        let result = match outcome {
            Ok(()) => {
                self.is_playing = !was_playing;
                Ok(OpOutcome::Applied)
            }
            Err(err) => Err(self.recover(err).await),
        };
        self.publish_changes(&before);
        result
    }

    /// Release the transport and clear the current track
    ///
    /// Unlike pause, this forgets what was playing.
    pub async fn stop(&mut self) -> Result<OpOutcome> {
        if self.handle.is_none() && self.current_track.is_none() {
            return Ok(OpOutcome::NoOp);
        }

        let before = self.snapshot();
        let result = self.release_handle().await;
        self.current_track = None;
        self.is_playing = false;
        info!("Playback stopped");
        self.publish_changes(&before);
        result.map(|()| OpOutcome::Applied)
    }

    /// Seek within the loaded track
    pub async fn seek(&mut self, position: Duration) -> Result<OpOutcome> {
        let before = self.snapshot();
        let outcome = match self.handle.as_mut() {
            Some(handle) => handle.seek(position).await,
            None => return Ok(OpOutcome::NoOp),
        };

        let result = match outcome {
            Ok(()) => Ok(OpOutcome::Applied),
            Err(err) => Err(self.recover(err).await),
        };
        self.publish_changes(&before);
        result
    }

    /// Poll the loaded handle
    ///
    /// A failed poll is reported but leaves the transport as it is.
    pub async fn transport_status(&self) -> Result<Option<TransportStatus>> {
        match self.handle.as_ref() {
            Some(handle) => handle
                .status()
                .await
                .map(Some)
                .map_err(PlaybackError::TransportOperationFailed),
            None => Ok(None),
        }
    }

    /// Advance after the current track reached its end
    ///
    /// - `One` replays the current track
    /// - `All` advances, wrapping to the start of the play order
    /// - `Off` advances; at the end the transport stays loaded but paused
    pub async fn handle_track_finished(&mut self) -> Result<OpOutcome> {
        if self.current_track.is_none() {
            return Ok(OpOutcome::NoOp);
        }

        match self.repeat {
            RepeatMode::One => self.play().await,
            RepeatMode::All => {
                let wrapped = self.neighbor(true).or_else(|| {
                    self.position_in_order()?;
                    self.play_order().first().map(|t| (*t).clone())
                });
                match wrapped {
                    Some(track) => self.switch_to(track).await,
                    None => Ok(self.settle_at_end()),
                }
            }
            RepeatMode::Off => match self.neighbor(true) {
                Some(track) => self.switch_to(track).await,
                None => Ok(self.settle_at_end()),
            },
        }
    }

    /// Run a notification action
    pub async fn apply_command(&mut self, command: RemoteCommand) -> Result<OpOutcome> {
        debug!("Remote command: {:?}", command);
        match command {
            RemoteCommand::Previous => self.play_previous().await,
            RemoteCommand::Next => self.play_next().await,
            RemoteCommand::Stop => self.stop().await,
            RemoteCommand::TogglePlayPause => self.toggle_play_pause().await,
            RemoteCommand::Play if !self.is_playing => self.toggle_play_pause().await,
            RemoteCommand::Pause if self.is_playing => self.toggle_play_pause().await,
            RemoteCommand::Play | RemoteCommand::Pause => Ok(OpOutcome::NoOp),
        }
    }

    // ===== Sequencing modes =====

    pub fn set_repeat(&mut self, mode: RepeatMode) {
        if self.repeat != mode {
            self.repeat = mode;
            self.observers
                .notify(&PlaybackEvent::RepeatChanged { mode });
        }
    }

    /// Advance the repeat button: off, all, one
    pub fn cycle_repeat(&mut self) -> RepeatMode {
        self.set_repeat(self.repeat.cycle());
        self.repeat
    }

    /// Enable or disable shuffle
    ///
    /// Turning shuffle on draws a new permutation with the current track
    /// first.
    pub fn set_shuffle(&mut self, mode: ShuffleMode) {
        if self.shuffle == mode {
            return;
        }
        self.shuffle = mode;
        if mode.is_on() {
            self.reshuffle();
        } else {
            self.shuffled_order.clear();
        }
        self.observers
            .notify(&PlaybackEvent::ShuffleChanged { mode });
    }

    pub fn toggle_shuffle(&mut self) -> ShuffleMode {
        let mode = if self.shuffle.is_on() {
            ShuffleMode::Off
        } else {
            ShuffleMode::Random
        };
        self.set_shuffle(mode);
        mode
    }

    // ===== Internal =====

    fn find(&self, id: &TrackId) -> Option<&Track> {
        self.library.iter().find(|t| &t.id == id)
    }

    fn current_id(&self) -> Option<&TrackId> {
        self.current_track.as_ref().map(|t| &t.id)
    }

    fn reshuffle(&mut self) {
        let pinned = self.current_track.as_ref().map(|t| t.id.clone());
        self.shuffled_order = shuffled_order(&self.library, pinned.as_ref());
    }

    /// Move the current track to the front of the shuffled order
    fn pin_current_in_order(&mut self) {
        let Some(current) = self.current_track.as_ref() else {
            return;
        };
        if let Some(pos) = self.shuffled_order.iter().position(|id| id == &current.id) {
            let id = self.shuffled_order.remove(pos);
            self.shuffled_order.insert(0, id);
        }
    }

    /// Index of the current track in the play order
    fn position_in_order(&self) -> Option<usize> {
        let current = self.current_id()?;
        self.play_order().iter().position(|t| &t.id == current)
    }

    /// Neighbor of the current track in the play order, without wrapping
    fn neighbor(&self, forward: bool) -> Option<Track> {
        let index = self.position_in_order()?;
        let order = self.play_order();
        let target = if forward {
            index.checked_add(1).filter(|i| *i < order.len())?
        } else {
            index.checked_sub(1)?
        };
        order.get(target).map(|t| (*t).clone())
    }

    /// Release the handle, make `track` current and start it
    async fn switch_to(&mut self, track: Track) -> Result<OpOutcome> {
        let before = self.snapshot();
        let result = match self.release_handle().await {
            Ok(()) => {
                self.current_track = Some(track);
                self.start_current().await
            }
            Err(err) => Err(err),
        };
        self.publish_changes(&before);
        result.map(|()| OpOutcome::Applied)
    }

    /// Load and start the current track, replacing any loaded handle
    async fn start_current(&mut self) -> Result<()> {
        self.release_handle().await?;

        let Some(track) = self.current_track.as_ref() else {
            return Ok(());
        };
        let track_id = track.id.clone();
        let source_uri = track.source_uri.clone();

        let mut handle = match self.transport.acquire(&source_uri).await {
            Ok(handle) => handle,
            Err(err) => {
                warn!("Failed to load track {}: {}", track_id, err);
                self.report(&err);
                return Err(PlaybackError::TransportAcquireFailed(err));
            }
        };

        if let Err(err) = handle.start().await {
            warn!("Failed to start track {}: {}", track_id, err);
            if let Err(release_err) = handle.release().await {
                debug!("Release after failed start also failed: {}", release_err);
            }
            self.report(&err);
            return Err(PlaybackError::TransportOperationFailed(err));
        }

        self.handle = Some(handle);
        self.is_playing = true;
        info!("Playing track {}", track_id);
        Ok(())
    }

    /// Release the loaded handle, if any
    ///
    /// The handle is gone afterwards whether or not the release succeeded.
    async fn release_handle(&mut self) -> Result<()> {
        self.is_playing = false;
        let Some(mut handle) = self.handle.take() else {
            return Ok(());
        };

        handle.release().await.map_err(|err| {
            warn!("Failed to release transport: {}", err);
            self.report(&err);
            PlaybackError::TransportOperationFailed(err)
        })
    }

    /// Drop a handle whose operation failed and return the error to report
    async fn recover(&mut self, err: crate::error::TransportError) -> PlaybackError {
        warn!("Transport operation failed: {}", err);
        self.is_playing = false;
        if let Some(mut handle) = self.handle.take() {
            if let Err(release_err) = handle.release().await {
                debug!("Release after failure also failed: {}", release_err);
            }
        }
        self.report(&err);
        PlaybackError::TransportOperationFailed(err)
    }

    /// End of the play order without repeat: keep the handle, stop playing
    fn settle_at_end(&mut self) -> OpOutcome {
        if !self.is_playing {
            return OpOutcome::NoOp;
        }
        let before = self.snapshot();
        self.is_playing = false;
        debug!("Reached end of play order");
        self.publish_changes(&before);
        OpOutcome::Applied
    }

    fn report(&self, err: &crate::error::TransportError) {
        self.observers.notify(&PlaybackEvent::Error {
            message: err.to_string(),
        });
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.transport_state(),
            current: self.current_id().cloned(),
        }
    }

    fn publish_changes(&self, before: &Snapshot) {
        let current = self.current_id();
        if before.current.as_ref() != current {
            self.observers.notify(&PlaybackEvent::CurrentTrackChanged {
                track_id: current.cloned(),
                previous_track_id: before.current.clone(),
            });
        }

        let state = self.transport_state();
        if before.state != state {
            self.observers
                .notify(&PlaybackEvent::StateChanged { state });
        }
    }
}

impl fmt::Debug for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackState")
            .field("library_len", &self.library.len())
            .field("favorites", &self.favorites.len())
            .field("current_track", &self.current_id())
            .field("state", &self.transport_state())
            .field("repeat", &self.repeat)
            .field("shuffle", &self.shuffle)
            .finish_non_exhaustive()
    }
}
