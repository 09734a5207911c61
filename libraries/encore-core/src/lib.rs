//! Encore Core
//!
//! Platform-agnostic types, derived state and configuration shared by the
//! Encore state stores.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, their ids, repeat/shuffle modes
//! - **Change Notification**: `Observers`, `OpOutcome`, `SubscriptionId`
//! - **Derived State**: search filtering, multi-select, display formatting
//! - **Configuration**: `AppConfig` and appearance settings
//! - **Error Handling**: `EncoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use encore_core::{search, Track, TrackSelection};
//!
//! let library = vec![
//!     Track::new("1", "Morning.mp3", 180_000, "content://1", 4_000_000),
//!     Track::new("2", "Evening.flac", 240_000, "content://2", 9_000_000),
//! ];
//!
//! let visible = search::filter_by_filename(&library, "even");
//! assert_eq!(visible.len(), 1);
//!
//! let mut selection = TrackSelection::new();
//! selection.toggle_all(visible);
//! assert_eq!(selection.selected_tracks(&library)[0].extension, "FLAC");
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod events;
pub mod format;
pub mod search;
pub mod selection;
pub mod theme;
pub mod types;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{EncoreError, Result};
pub use events::{Observers, OpOutcome, SubscriptionId};
pub use selection::TrackSelection;
pub use theme::ThemeSettings;
pub use types::{Playlist, PlaylistId, RepeatMode, ShuffleMode, Track, TrackId};
