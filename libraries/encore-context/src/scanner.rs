//! Platform media library seam
//!
//! The shell enumerates audio assets (after obtaining permission) and hands
//! them over as [`ScannedAsset`]s. The context turns them into library
//! tracks.

use async_trait::async_trait;
use encore_core::Track;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by the platform media library
///
/// Carries the platform message (permission denied, query failed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ScanError(String);

impl ScanError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// One audio asset as reported by the platform media library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedAsset {
    pub id: String,
    pub filename: String,
    pub duration_ms: u64,
    pub source_uri: String,
    pub file_size_bytes: u64,
}

/// Scanned tracks carry no artwork
impl From<ScannedAsset> for Track {
    fn from(asset: ScannedAsset) -> Self {
        Track::new(
            asset.id,
            asset.filename,
            asset.duration_ms,
            asset.source_uri,
            asset.file_size_bytes,
        )
    }
}

/// Enumerates audio assets on the device
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaScanner: Send + Sync {
    /// List every audio asset, in the order the library should show them
    async fn scan_audio_assets(&self) -> Result<Vec<ScannedAsset>, ScanError>;
}
