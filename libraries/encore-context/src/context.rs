//! Shared application context
//!
//! Holds both stores behind async locks so the shell's UI handlers, the
//! notification listener and the media scanner can share them.

use crate::{
    error::{ContextError, Result},
    scanner::MediaScanner,
};
use encore_core::{AppConfig, EncoreError, OpOutcome, PlaylistId, ThemeSettings, Track, TrackId};
use encore_playback::{NowPlaying, PlaybackState, RemoteCommand, Transport};
use encore_playlists::PlaylistCollection;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// Application-wide state
#[derive(Clone)]
pub struct AppContext {
    config: Arc<AppConfig>,
    playback: Arc<Mutex<PlaybackState>>,
    playlists: Arc<RwLock<PlaylistCollection>>,
    appearance: Arc<RwLock<ThemeSettings>>,
}

impl AppContext {
    /// Build the stores from configuration
    pub fn new(config: AppConfig, transport: Arc<dyn Transport>) -> Self {
        let playback = PlaybackState::with_settings(transport, config.playback);
        Self::with_stores(config, playback, PlaylistCollection::new())
    }

    /// Wrap stores that were built elsewhere
    pub fn with_stores(
        config: AppConfig,
        playback: PlaybackState,
        playlists: PlaylistCollection,
    ) -> Self {
        let appearance = config.appearance;
        Self {
            config: Arc::new(config),
            playback: Arc::new(Mutex::new(playback)),
            playlists: Arc::new(RwLock::new(playlists)),
            appearance: Arc::new(RwLock::new(appearance)),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn playback(&self) -> Arc<Mutex<PlaybackState>> {
        Arc::clone(&self.playback)
    }

    pub fn playlists(&self) -> Arc<RwLock<PlaylistCollection>> {
        Arc::clone(&self.playlists)
    }

    pub async fn appearance(&self) -> ThemeSettings {
        *self.appearance.read().await
    }

    pub async fn set_appearance(&self, settings: ThemeSettings) {
        *self.appearance.write().await = settings;
        debug!("Appearance updated: {:?}", settings);
    }

    /// Rescan the device and replace the library
    ///
    /// A failed scan leaves the current library in place. Returns the new
    /// track count.
    pub async fn refresh_library(&self, scanner: &dyn MediaScanner) -> Result<usize> {
        let assets = scanner.scan_audio_assets().await.map_err(|e| {
            warn!("Media scan failed: {}", e);
            ContextError::from(e)
        })?;

        let tracks: Vec<Track> = assets.into_iter().map(Track::from).collect();
        let count = tracks.len();
        self.playback.lock().await.set_library(tracks);

        info!("Library refreshed: {} tracks", count);
        Ok(count)
    }

    /// Select a library track and start it
    pub async fn play_track_by_id(&self, track_id: &TrackId) -> Result<OpOutcome> {
        let mut playback = self.playback.lock().await;
        let track = playback
            .library()
            .iter()
            .find(|t| &t.id == track_id)
            .cloned()
            .ok_or_else(|| EncoreError::not_found("Track", track_id.as_str()))?;

        playback.set_current_track(Some(track));
        Ok(playback.play().await?)
    }

    /// Run a notification action by its identifier
    ///
    /// Unknown identifiers are ignored.
    pub async fn handle_notification_action(&self, action: &str) -> Result<OpOutcome> {
        match RemoteCommand::from_action(action) {
            Some(command) => self.handle_remote_command(command).await,
            None => {
                debug!("Ignoring unknown notification action {:?}", action);
                Ok(OpOutcome::NoOp)
            }
        }
    }

    pub async fn handle_remote_command(&self, command: RemoteCommand) -> Result<OpOutcome> {
        Ok(self.playback.lock().await.apply_command(command).await?)
    }

    pub async fn now_playing(&self) -> Option<NowPlaying> {
        self.playback.lock().await.now_playing()
    }

    /// Add library tracks to a playlist by id (add-songs flow)
    ///
    /// Ids missing from the library are skipped.
    pub async fn add_library_tracks_to_playlist(
        &self,
        playlist_id: &PlaylistId,
        track_ids: &[TrackId],
    ) -> Result<OpOutcome> {
        let tracks: Vec<Track> = {
            let playback = self.playback.lock().await;
            track_ids
                .iter()
                .filter_map(|id| playback.library().iter().find(|t| &t.id == id).cloned())
                .collect()
        };

        let mut playlists = self.playlists.write().await;
        if playlists.get(playlist_id).is_none() {
            return Err(EncoreError::not_found("Playlist", playlist_id.as_str()).into());
        }
        Ok(playlists.add_tracks_to_playlist(playlist_id, &tracks))
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
