//! Broadcast Event Sink
//!
//! `NotificationSink` backed by `tokio::sync::broadcast`, so any number of
//! off-chain observers can subscribe. Sending is non-blocking; the operation
//! that emits never waits on a subscriber.

use crate::events::{BridgeEvent, SequencedEvent};
use crate::ports::outbound::NotificationSink;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Maximum events buffered per subscriber before the slowest one lags.
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

/// Broadcast sink.
pub struct BroadcastEventSink {
    sender: broadcast::Sender<SequencedEvent>,
    /// Last sequence handed out; the lock also orders sends.
    sequence: Mutex<u64>,
    capacity: usize,
}

impl BroadcastEventSink {
    /// Create a sink with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Create a sink with specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            sequence: Mutex::new(0),
            capacity: capacity.max(1),
        }
    }

    /// Subscribe to events emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<SequencedEvent> {
        self.sender.subscribe()
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Channel capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for BroadcastEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for BroadcastEventSink {
    fn emit(&self, event: BridgeEvent) -> u64 {
        let mut last = self.sequence.lock();
        *last += 1;
        let sequence = *last;
        let topic = event.topic();

        match self.sender.send(SequencedEvent { sequence, event }) {
            Ok(receivers) => {
                debug!(sequence, topic = ?topic, receivers, "Event broadcast");
            }
            Err(_) => {
                // Sequence is consumed even when nobody listens
                warn!(sequence, topic = ?topic, "Event dropped (no subscribers)");
            }
        }
        sequence
    }
}
