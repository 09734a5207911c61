//! Error types for the application context

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContextError {
    #[error(transparent)]
    Core(#[from] encore_core::EncoreError),

    #[error(transparent)]
    Playback(#[from] encore_playback::PlaybackError),

    /// The platform media scanner failed; the library was left untouched
    #[error("Media scan failed: {0}")]
    Scan(#[from] crate::scanner::ScanError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, ContextError>;
