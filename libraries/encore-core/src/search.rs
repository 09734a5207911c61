//! Track filtering for list screens

use crate::types::{Playlist, Track, TrackId};
use std::collections::HashSet;

/// Tracks whose filename contains `query`, ignoring case
///
/// An empty query matches everything. Order is preserved.
pub fn filter_by_filename<'a>(tracks: &'a [Track], query: &str) -> Vec<&'a Track> {
    let needle = query.to_lowercase();
    tracks
        .iter()
        .filter(|t| needle.is_empty() || t.filename.to_lowercase().contains(&needle))
        .collect()
}

/// Library tracks that can still be added to `playlist`, filtered by `query`
pub fn available_for_playlist<'a>(
    library: &'a [Track],
    playlist: &Playlist,
    query: &str,
) -> Vec<&'a Track> {
    let existing: HashSet<&TrackId> = playlist.tracks.iter().map(|t| &t.id).collect();
    filter_by_filename(library, query)
        .into_iter()
        .filter(|t| !existing.contains(&t.id))
        .collect()
}
