//! Change notification for state stores
//!
//! Stores own an [`Observers`] list and call [`Observers::notify`] after each
//! committed mutation. Callbacks run synchronously, in subscription order, on
//! the thread that performed the mutation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a store operation that may have nothing to do
///
/// Unknown ids and already-satisfied requests are not errors; they report
/// `NoOp` so callers and tests can tell them apart from real changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpOutcome {
    /// State changed and observers were notified
    Applied,

    /// Nothing changed
    NoOp,
}

impl OpOutcome {
    /// Check if the operation changed state
    pub fn is_applied(self) -> bool {
        self == OpOutcome::Applied
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Observer callback
pub type Callback<E> = Box<dyn Fn(&E) + Send + Sync + 'static>;

/// Ordered list of observers for one event type
pub struct Observers<E> {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback<E>)>,
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Observers<E> {
    /// Create an empty observer list
    pub fn new() -> Self {
        Self {
            next_id: 0,
            callbacks: Vec::new(),
        }
    }

    /// Register a callback
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback
    ///
    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub, _)| *sub != id);
        self.callbacks.len() != before
    }

    /// Deliver an event to every subscriber
    pub fn notify(&self, event: &E) {
        for (_, callback) in &self.callbacks {
            callback(event);
        }
    }

    /// Number of subscribers
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Check if nobody is subscribed
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<E> fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}
