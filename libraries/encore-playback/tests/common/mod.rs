//! Shared helpers for playback integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use encore_core::Track;
use encore_playback::{
    PlaybackEvent, PlaybackState, Transport, TransportError, TransportHandle, TransportResult,
    TransportStatus,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Transport call log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Acquire(String),
    Start,
    Pause,
    Seek(Duration),
    Release,
    Status,
}

#[derive(Default)]
struct Script {
    calls: Vec<Call>,
    broken_uris: HashSet<String>,
    fail_release: bool,
    finished: bool,
}

/// Mock transport recording every call
///
/// URIs marked broken fail to load; release can be made to fail.
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<Script>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().unwrap().calls.clone()
    }

    pub fn acquire_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Acquire(_)))
            .count()
    }

    pub fn break_uri(&self, uri: &str) {
        self.script
            .lock()
            .unwrap()
            .broken_uris
            .insert(uri.to_string());
    }

    pub fn fail_release(&self, fail: bool) {
        self.script.lock().unwrap().fail_release = fail;
    }

    pub fn set_finished(&self, finished: bool) {
        self.script.lock().unwrap().finished = finished;
    }

    pub fn clear_calls(&self) {
        self.script.lock().unwrap().calls.clear();
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn acquire(&self, source_uri: &str) -> TransportResult<Box<dyn TransportHandle>> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(Call::Acquire(source_uri.to_string()));
        if script.broken_uris.contains(source_uri) {
            return Err(TransportError::new(format!("cannot decode {source_uri}")));
        }
        Ok(Box::new(MockHandle {
            script: Arc::clone(&self.script),
            position: Duration::ZERO,
        }))
    }
}

struct MockHandle {
    script: Arc<Mutex<Script>>,
    position: Duration,
}

#[async_trait]
impl TransportHandle for MockHandle {
    async fn start(&mut self) -> TransportResult<()> {
        self.script.lock().unwrap().calls.push(Call::Start);
        Ok(())
    }

    async fn pause(&mut self) -> TransportResult<()> {
        self.script.lock().unwrap().calls.push(Call::Pause);
        Ok(())
    }

    async fn seek(&mut self, position: Duration) -> TransportResult<()> {
        self.script.lock().unwrap().calls.push(Call::Seek(position));
        self.position = position;
        Ok(())
    }

    async fn release(&mut self) -> TransportResult<()> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(Call::Release);
        if script.fail_release {
            return Err(TransportError::new("release refused"));
        }
        Ok(())
    }

    async fn status(&self) -> TransportResult<TransportStatus> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(Call::Status);
        Ok(TransportStatus {
            position: self.position,
            duration: Duration::from_secs(180),
            finished: script.finished,
        })
    }
}

pub fn track(id: &str) -> Track {
    Track::new(
        id,
        format!("Track {id}.mp3"),
        180_000,
        format!("content://media/{id}"),
        3_000_000,
    )
}

/// Store with library A(1), B(2), C(3)
pub fn store_with_library() -> (PlaybackState, MockTransport) {
    let transport = MockTransport::new();
    let mut state = PlaybackState::new(Arc::new(transport.clone()));
    state.set_library(vec![track("1"), track("2"), track("3")]);
    (state, transport)
}

/// Collect every event the store emits from now on
pub fn record_events(state: &mut PlaybackState) -> Arc<Mutex<Vec<PlaybackEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    state.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
    events
}
