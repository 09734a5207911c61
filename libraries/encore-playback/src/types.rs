//! Core types for playback management

use encore_core::TrackId;
use serde::{Deserialize, Serialize};

/// Transport state
///
/// Derived from whether a handle is held and whether it is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportState {
    /// No track loaded
    Idle,

    /// Loaded and producing audio
    Playing,

    /// Loaded, holding its position
    Paused,
}

/// Actions offered by the playback notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteCommand {
    Previous,
    /// Resume if paused; ignored otherwise
    Play,
    /// Pause if playing; ignored otherwise
    Pause,
    TogglePlayPause,
    Next,
    Stop,
}

impl RemoteCommand {
    /// Parse a notification action identifier
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "previous" => Some(Self::Previous),
            "play" => Some(Self::Play),
            "pause" => Some(Self::Pause),
            "toggle" => Some(Self::TogglePlayPause),
            "next" => Some(Self::Next),
            "stop" => Some(Self::Stop),
            _ => None,
        }
    }
}

/// What the presence/notification reporter shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowPlaying {
    pub track_id: TrackId,
    pub filename: String,
    pub is_playing: bool,
}
