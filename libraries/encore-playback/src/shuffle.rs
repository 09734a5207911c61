//! Shuffled play order
//!
//! The library itself is never reordered; shuffle produces a permutation of
//! track ids that next/previous walk instead of the library order.

use encore_core::{Track, TrackId};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

/// Random permutation of the library's ids
///
/// `pinned` (normally the current track) is moved to the front so that
/// "next" continues through every other track.
pub fn shuffled_order(tracks: &[Track], pinned: Option<&TrackId>) -> Vec<TrackId> {
    shuffled_order_with(tracks, pinned, &mut thread_rng())
}

/// Same as [`shuffled_order`] with a caller-provided RNG
pub fn shuffled_order_with<R: Rng + ?Sized>(
    tracks: &[Track],
    pinned: Option<&TrackId>,
    rng: &mut R,
) -> Vec<TrackId> {
    let mut order: Vec<TrackId> = tracks.iter().map(|t| t.id.clone()).collect();
    order.shuffle(rng);

    if let Some(pinned) = pinned {
        if let Some(pos) = order.iter().position(|id| id == pinned) {
            let id = order.remove(pos);
            order.insert(0, id);
        }
    }

    order
}
