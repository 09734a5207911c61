//! Multi-select state for track lists
//!
//! A list enters selection mode when its first track is selected and leaves
//! it when the selection becomes empty.

use crate::types::{Track, TrackId};
use std::collections::HashSet;

/// Set of selected track ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackSelection {
    ids: HashSet<TrackId>,
}

impl TrackSelection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter selection mode with exactly one track selected
    pub fn start_with(&mut self, id: TrackId) {
        self.ids.clear();
        self.ids.insert(id);
    }

    /// Add or remove one track
    ///
    /// Returns true if the track is selected afterwards.
    pub fn toggle(&mut self, id: &TrackId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Select every visible track, or clear if all of them are already selected
    pub fn toggle_all<'a, I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = &'a Track>,
    {
        let visible: HashSet<TrackId> = visible.into_iter().map(|t| t.id.clone()).collect();
        if !visible.is_empty() && self.ids == visible {
            self.ids.clear();
        } else {
            self.ids = visible;
        }
    }

    /// Check if a track is selected
    pub fn contains(&self, id: &TrackId) -> bool {
        self.ids.contains(id)
    }

    /// Whether the list is in selection mode
    pub fn is_active(&self) -> bool {
        !self.ids.is_empty()
    }

    /// Number of selected tracks
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Leave selection mode
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected ids in arbitrary order
    pub fn ids(&self) -> impl Iterator<Item = &TrackId> {
        self.ids.iter()
    }

    /// Selected tracks, in the order they appear in `tracks`
    pub fn selected_tracks(&self, tracks: &[Track]) -> Vec<Track> {
        tracks
            .iter()
            .filter(|t| self.ids.contains(&t.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks() -> Vec<Track> {
        (1..=3)
            .map(|i| Track::new(i.to_string(), format!("t{i}.mp3"), 0, "u", 0))
            .collect()
    }

    #[test]
    fn toggle_enters_and_leaves_selection_mode() {
        let mut selection = TrackSelection::new();
        let id = TrackId::new("1");

        assert!(selection.toggle(&id));
        assert!(selection.is_active());
        assert!(!selection.toggle(&id));
        assert!(!selection.is_active());
    }

    #[test]
    fn start_with_replaces_previous_selection() {
        let mut selection = TrackSelection::new();
        selection.toggle(&TrackId::new("1"));
        selection.toggle(&TrackId::new("2"));

        selection.start_with(TrackId::new("3"));

        assert_eq!(selection.len(), 1);
        assert!(selection.contains(&TrackId::new("3")));
    }

    #[test]
    fn toggle_all_selects_then_clears() {
        let tracks = tracks();
        let mut selection = TrackSelection::new();
        selection.toggle(&TrackId::new("2"));

        selection.toggle_all(&tracks);
        assert_eq!(selection.len(), 3);

        selection.toggle_all(&tracks);
        assert!(selection.is_empty());
    }

    #[test]
    fn selected_tracks_follow_display_order() {
        let tracks = tracks();
        let mut selection = TrackSelection::new();
        selection.toggle(&TrackId::new("3"));
        selection.toggle(&TrackId::new("1"));

        let ids: Vec<String> = selection
            .selected_tracks(&tracks)
            .into_iter()
            .map(|t| t.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
