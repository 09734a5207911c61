//! Platform-agnostic transport traits
//!
//! Abstracts audio loading and output for different platforms. The playback
//! store only ever holds one handle and never hands it out.

use crate::error::TransportError;
use async_trait::async_trait;
use std::time::Duration;

/// Result type for transport calls
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Loads playable streams
///
/// Implementors wrap the device audio stack (native player on mobile,
/// an output stream on desktop, a fake in tests).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Load the media behind `source_uri`
    ///
    /// The returned handle is loaded but not started.
    async fn acquire(&self, source_uri: &str) -> TransportResult<Box<dyn TransportHandle>>;
}

/// One loaded, playable stream
#[async_trait]
pub trait TransportHandle: Send + Sync {
    /// Start or resume output
    async fn start(&mut self) -> TransportResult<()>;

    /// Pause output, keeping the position
    async fn pause(&mut self) -> TransportResult<()>;

    /// Move to `position` from the start of the track
    async fn seek(&mut self, position: Duration) -> TransportResult<()>;

    /// Stop output and free the underlying resources
    ///
    /// The handle is dropped right after this call, whatever it returns.
    async fn release(&mut self) -> TransportResult<()>;

    /// Current position, duration and end-of-track flag
    async fn status(&self) -> TransportResult<TransportStatus>;
}

/// Snapshot reported by a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportStatus {
    pub position: Duration,
    pub duration: Duration,

    /// True once the end of the track has been reached
    pub finished: bool,
}

impl TransportStatus {
    /// Progress through the track in `[0.0, 1.0]`
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.position.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// In-memory transport for unit tests
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    /// Transport call, in the order it was made
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Acquire(String),
        Start,
        Pause,
        Seek(Duration),
        Release,
    }

    #[derive(Default)]
    struct Shared {
        calls: Mutex<Vec<Call>>,
        fail_acquire: AtomicBool,
        fail_operations: AtomicBool,
    }

    impl Shared {
        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn operation(&self, call: Call) -> TransportResult<()> {
            self.record(call);
            if self.fail_operations.load(Ordering::SeqCst) {
                return Err(TransportError::new("device busy"));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct FakeTransport {
        shared: Arc<Shared>,
    }

    impl FakeTransport {
        pub fn calls(&self) -> Vec<Call> {
            self.shared.calls.lock().unwrap().clone()
        }

        pub fn fail_acquire(&self, fail: bool) {
            self.shared.fail_acquire.store(fail, Ordering::SeqCst);
        }

        pub fn fail_operations(&self, fail: bool) {
            self.shared.fail_operations.store(fail, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn acquire(&self, source_uri: &str) -> TransportResult<Box<dyn TransportHandle>> {
            self.shared.record(Call::Acquire(source_uri.to_string()));
            if self.shared.fail_acquire.load(Ordering::SeqCst) {
                return Err(TransportError::new("unsupported codec"));
            }
            Ok(Box::new(FakeHandle {
                shared: Arc::clone(&self.shared),
                position: Duration::ZERO,
            }))
        }
    }

    struct FakeHandle {
        shared: Arc<Shared>,
        position: Duration,
    }

    #[async_trait]
    impl TransportHandle for FakeHandle {
        async fn start(&mut self) -> TransportResult<()> {
            self.shared.operation(Call::Start)
        }

        async fn pause(&mut self) -> TransportResult<()> {
            self.shared.operation(Call::Pause)
        }

        async fn seek(&mut self, position: Duration) -> TransportResult<()> {
            self.shared.operation(Call::Seek(position))?;
            self.position = position;
            Ok(())
        }

        async fn release(&mut self) -> TransportResult<()> {
            self.shared.operation(Call::Release)
        }

        async fn status(&self) -> TransportResult<TransportStatus> {
            Ok(TransportStatus {
                position: self.position,
                duration: Duration::from_secs(60),
                finished: false,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        let status = TransportStatus {
            position: Duration::from_secs(30),
            duration: Duration::from_secs(120),
            finished: false,
        };
        assert!((status.progress() - 0.25).abs() < f32::EPSILON);

        let past_end = TransportStatus {
            position: Duration::from_secs(130),
            ..status
        };
        assert_eq!(past_end.progress(), 1.0);
    }

    #[test]
    fn zero_duration_has_no_progress() {
        let status = TransportStatus {
            position: Duration::from_secs(5),
            duration: Duration::ZERO,
            finished: true,
        };
        assert_eq!(status.progress(), 0.0);
    }
}
