//! Integration tests for the playlist collection

use chrono::{Duration, TimeZone, Utc};
use encore_core::{Track, TrackId};
use encore_playlists::{Clock, ManualClock, OpOutcome, PlaylistCollection, PlaylistEvent};
use std::sync::{Arc, Mutex};

fn track(id: &str) -> Track {
    Track::new(
        id,
        format!("{id}.mp3"),
        200_000,
        format!("content://media/{id}"),
        4_000_000,
    )
}

fn ids(playlists: &PlaylistCollection, id: &encore_core::PlaylistId) -> Vec<String> {
    playlists
        .get(id)
        .map(|p| p.tracks.iter().map(|t| t.id.to_string()).collect())
        .unwrap_or_default()
}

#[test]
fn road_trip_scenario() {
    let mut playlists = PlaylistCollection::new();
    let road_trip = playlists.create_playlist("Road Trip").unwrap();
    assert!(road_trip.tracks.is_empty());

    playlists.add_tracks_to_playlist(&road_trip.id, &[track("A"), track("B")]);
    playlists.add_tracks_to_playlist(&road_trip.id, &[track("B"), track("C")]);

    assert_eq!(ids(&playlists, &road_trip.id), vec!["A", "B", "C"]);
}

#[test]
fn created_playlists_keep_creation_order() {
    let mut playlists = PlaylistCollection::new();
    let first = playlists.create_playlist("Morning").unwrap();
    let second = playlists.create_playlist("Evening").unwrap();

    let names: Vec<&str> = playlists.playlists().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Morning", "Evening"]);
    assert_ne!(first.id, second.id);
    assert_eq!(playlists.len(), 2);
}

#[test]
fn rename_playlist_leaves_track_names_alone() {
    let mut playlists = PlaylistCollection::new();
    let id = playlists.create_playlist("Gym").unwrap().id;
    playlists.add_tracks_to_playlist(&id, &[track("A")]);

    playlists.rename_playlist(&id, "Workout").unwrap();

    let playlist = playlists.get(&id).unwrap();
    assert_eq!(playlist.name, "Workout");
    assert_eq!(playlist.tracks[0].filename, "A.mp3");
}

#[test]
fn updated_at_moves_on_structural_changes() {
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    let mut playlists = PlaylistCollection::with_clock(clock.clone());
    let id = playlists.create_playlist("Timeline").unwrap().id;

    clock.advance(Duration::minutes(1));
    playlists.add_tracks_to_playlist(&id, &[track("A")]);
    assert_eq!(playlists.get(&id).unwrap().updated_at, clock.now());

    clock.advance(Duration::minutes(1));
    playlists.remove_track_from_playlist(&id, &TrackId::new("A"));
    assert_eq!(playlists.get(&id).unwrap().updated_at, clock.now());

    clock.advance(Duration::minutes(1));
    playlists.rename_playlist(&id, "Renamed").unwrap();

    let playlist = playlists.get(&id).unwrap();
    assert_eq!(playlist.updated_at, clock.now());
    assert_eq!(playlist.created_at, start);
}

#[test]
fn remove_of_absent_track_still_refreshes_updated_at() {
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    let mut playlists = PlaylistCollection::with_clock(clock.clone());
    let id = playlists.create_playlist("Touch").unwrap().id;

    clock.advance(Duration::seconds(30));
    let outcome = playlists.remove_track_from_playlist(&id, &TrackId::new("nope"));

    assert_eq!(outcome, OpOutcome::Applied);
    assert_eq!(playlists.get(&id).unwrap().updated_at, start + Duration::seconds(30));
}

#[test]
fn playlists_survive_unknown_ids() {
    let mut playlists = PlaylistCollection::new();
    let ghost = encore_core::PlaylistId::new("ghost");

    assert_eq!(playlists.delete_playlist(&ghost), OpOutcome::NoOp);
    assert_eq!(
        playlists.remove_track_from_playlist(&ghost, &TrackId::new("A")),
        OpOutcome::NoOp
    );
    assert_eq!(playlists.rename_playlist(&ghost, "Name").unwrap(), OpOutcome::NoOp);
}

#[test]
fn observers_receive_playlist_events() {
    let mut playlists = PlaylistCollection::new();
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    playlists.subscribe(move |e| sink.lock().unwrap().push(e.clone()));

    let id = playlists.create_playlist("Events").unwrap().id;
    playlists.add_tracks_to_playlist(&id, &[track("A"), track("A")]);
    playlists.add_tracks_to_playlist(&id, &[track("A")]);
    playlists.delete_playlist(&id);

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            PlaylistEvent::Created {
                playlist_id: id.clone(),
                name: "Events".to_string(),
            },
            PlaylistEvent::TracksAdded {
                playlist_id: id.clone(),
                track_ids: vec![TrackId::new("A")],
            },
            PlaylistEvent::Deleted { playlist_id: id },
        ]
    );
}
