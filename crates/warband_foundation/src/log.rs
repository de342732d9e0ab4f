//! Message sinks for non-fatal diagnostics.
//!
//! Collisions, ambiguous queries, resolution failures, and coercion
//! suggestions are never returned as errors. They are pushed, as plain
//! human-readable text, into whatever [`MessageLog`] the caller supplies.
//! Presentation (console, dialog, widget) is up to the caller.

use std::collections::VecDeque;

/// An append-only sink for human-readable messages.
pub trait MessageLog {
    /// Appends a message.
    fn push(&mut self, message: String);
}

impl MessageLog for Vec<String> {
    fn push(&mut self, message: String) {
        Vec::push(self, message);
    }
}

impl<L: MessageLog + ?Sized> MessageLog for &mut L {
    fn push(&mut self, message: String) {
        (**self).push(message);
    }
}

/// A sink that drops every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

impl MessageLog for Discard {
    fn push(&mut self, _message: String) {}
}

// =============================================================================
// Warnings
// =============================================================================

/// A bounded FIFO of messages.
///
/// Keeps at most `capacity` messages, discarding the oldest when full.
#[derive(Clone, Debug)]
pub struct Warnings {
    /// The messages, oldest first.
    messages: VecDeque<String>,
    /// Maximum number of messages to keep.
    capacity: usize,
    /// Total number of messages ever pushed.
    pushed: u64,
}

impl Default for Warnings {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl Warnings {
    /// Capacity used by [`Warnings::default`].
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Creates an empty sink holding at most `capacity` messages.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(capacity.min(64)),
            capacity: capacity.max(1),
            pushed: 0,
        }
    }

    /// Number of messages currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if no message is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Total number of messages pushed since creation, evicted ones included.
    #[must_use]
    pub fn total_pushed(&self) -> u64 {
        self.pushed
    }

    /// Removes and returns the oldest message.
    pub fn pop(&mut self) -> Option<String> {
        self.messages.pop_front()
    }

    /// Removes every message, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = String> + '_ {
        self.messages.drain(..)
    }

    /// Moves every message of `other` to the end of this sink.
    pub fn append(&mut self, other: &mut Warnings) {
        for message in other.drain() {
            MessageLog::push(self, message);
        }
    }

    /// Discards all messages.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Iterates over held messages, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Returns the most recent `count` messages, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&str> {
        let start = self.messages.len().saturating_sub(count);
        self.iter().skip(start).collect()
    }

    /// Returns true if some held message contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl MessageLog for Warnings {
    fn push(&mut self, message: String) {
        tracing::debug!(target: "warband::warnings", "{message}");
        self.pushed += 1;
        self.messages.push_back(message);
        while self.messages.len() > self.capacity {
            self.messages.pop_front();
        }
    }
}
