//! Encore - Playlists
//!
//! In-memory collection of user playlists.
//!
//! Playlists keep their own track copies, so they survive library rescans
//! and deletions unchanged. Adding is idempotent by track id; names are
//! trimmed and must not be blank.
//!
//! # Example
//!
//! ```rust
//! use encore_core::Track;
//! use encore_playlists::PlaylistCollection;
//!
//! let mut playlists = PlaylistCollection::new();
//! let road_trip = playlists.create_playlist("Road Trip").unwrap();
//!
//! let a = Track::new("a", "A.mp3", 1_000, "content://a", 10);
//! let b = Track::new("b", "B.mp3", 1_000, "content://b", 10);
//! let c = Track::new("c", "C.mp3", 1_000, "content://c", 10);
//!
//! playlists.add_tracks_to_playlist(&road_trip.id, &[a, b.clone()]);
//! playlists.add_tracks_to_playlist(&road_trip.id, &[b, c]);
//!
//! assert_eq!(playlists.get(&road_trip.id).unwrap().len(), 3);
//! ```

pub mod clock;
mod collection;
mod events;

pub use clock::{Clock, ManualClock, SystemClock};
pub use collection::PlaylistCollection;
pub use events::PlaylistEvent;

pub use encore_core::{OpOutcome, Playlist, PlaylistId};
