//! Error types for playback management

use thiserror::Error;

/// Failure reported by a platform transport
///
/// Platforms wrap their native decoder/output errors in this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(String);

impl TransportError {
    /// Create a transport error from a platform message
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Get the platform message
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Playback errors
///
/// Both variants are recovered before they reach the caller: the transport
/// handle is dropped and the store reports not playing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The platform could not load the track
    #[error("Failed to load track: {0}")]
    TransportAcquireFailed(TransportError),

    /// Start, pause, seek, status or release failed on a loaded track
    #[error("Transport operation failed: {0}")]
    TransportOperationFailed(TransportError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
