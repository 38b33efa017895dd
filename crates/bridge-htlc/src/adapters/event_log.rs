//! In-Memory Event Log
//!
//! Append-only `NotificationSink` that keeps every event, for observers that
//! poll rather than subscribe.

use crate::domain::TransferId;
use crate::events::{BridgeEvent, EventTopic, SequencedEvent};
use crate::ports::outbound::NotificationSink;
use parking_lot::RwLock;
use tracing::debug;

/// Append-only event log.
#[derive(Default)]
pub struct InMemoryEventLog {
    events: RwLock<Vec<SequencedEvent>>,
}

impl InMemoryEventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events.
    pub fn events(&self) -> Vec<SequencedEvent> {
        self.events.read().clone()
    }

    /// Events after `sequence` (exclusive), for incremental polling.
    pub fn events_since(&self, sequence: u64) -> Vec<SequencedEvent> {
        self.events
            .read()
            .iter()
            .filter(|e| e.sequence > sequence)
            .cloned()
            .collect()
    }

    /// Events for one transfer, in order.
    pub fn events_for(&self, transfer_id: &TransferId) -> Vec<SequencedEvent> {
        self.events
            .read()
            .iter()
            .filter(|e| e.event.transfer_id() == transfer_id)
            .cloned()
            .collect()
    }

    /// Number of events with the given topic.
    pub fn count(&self, topic: EventTopic) -> usize {
        self.events
            .read()
            .iter()
            .filter(|e| e.event.topic() == topic)
            .count()
    }

    /// Total number of events.
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Whether nothing was emitted yet.
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Most recent event.
    pub fn last(&self) -> Option<SequencedEvent> {
        self.events.read().last().cloned()
    }
}

impl NotificationSink for InMemoryEventLog {
    fn emit(&self, event: BridgeEvent) -> u64 {
        let mut events = self.events.write();
        let sequence = events.len() as u64 + 1;
        debug!(sequence, topic = ?event.topic(), "Event appended");
        events.push(SequencedEvent { sequence, event });
        sequence
    }
}
