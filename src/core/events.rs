//! Audit trail of roster changes
//!
//! An [`EventLog`] belongs to the roster that produced it; there is no
//! process-wide log.

use chrono::{DateTime, Local};
use std::fmt;

/// A single recorded change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Human-readable description of the change
    pub description: String,
    /// When the change was recorded
    pub logged_at: DateTime<Local>,
}

impl Event {
    /// Create an event stamped with the current local time
    #[must_use]
    pub fn new(description: String) -> Self {
        Self {
            description,
            logged_at: Local::now(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.logged_at.format("%Y-%m-%d %H:%M:%S"),
            self.description
        )
    }
}

/// Ordered collection of events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create an empty log
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event with the given description
    pub fn record(&mut self, description: impl Into<String>) {
        self.events.push(Event::new(description.into()));
    }

    /// Iterate over events, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Number of recorded events
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events have been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discard every event
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Remove and return every event, oldest first
    pub fn take(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
