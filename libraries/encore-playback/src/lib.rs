//! Encore - Playback State
//!
//! Platform-agnostic playback store for Encore.
//!
//! This crate provides:
//! - The library snapshot and favorite set
//! - Current track selection and the transport state machine
//!   (idle, playing, paused)
//! - Next/previous navigation without wrap-around
//! - Repeat modes (Off, All, One) applied when a track finishes
//! - Shuffled play order
//! - Notification commands and a now-playing snapshot
//! - Synchronous change events
//!
//! # Architecture
//!
//! `encore-playback` never touches audio hardware. Loading and output go
//! through the [`Transport`] and [`TransportHandle`] traits, implemented by
//! the platform shell.
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use encore_core::Track;
//! use encore_playback::{
//!     PlaybackState, Transport, TransportHandle, TransportResult, TransportStatus,
//! };
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! struct NativePlayer;
//!
//! #[async_trait]
//! impl Transport for NativePlayer {
//!     async fn acquire(&self, source_uri: &str) -> TransportResult<Box<dyn TransportHandle>> {
//!         // Hand the URI to the platform player
//!         # unimplemented!()
//!     }
//! }
//!
//! # async fn run() -> encore_playback::Result<()> {
//! let mut playback = PlaybackState::new(Arc::new(NativePlayer));
//! playback.set_library(vec![
//!     Track::new("1", "Intro.mp3", 90_000, "content://media/1", 2_000_000),
//!     Track::new("2", "Theme.mp3", 200_000, "content://media/2", 5_000_000),
//! ]);
//!
//! let first = playback.library()[0].clone();
//! playback.set_current_track(Some(first));
//! playback.play().await?;
//! playback.play_next().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod events;
mod manager;
pub mod shuffle;
mod transport;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result, TransportError};
pub use events::PlaybackEvent;
pub use manager::PlaybackState;
pub use transport::{Transport, TransportHandle, TransportResult, TransportStatus};
pub use types::{NowPlaying, RemoteCommand, TransportState};

pub use encore_core::{OpOutcome, RepeatMode, ShuffleMode};
