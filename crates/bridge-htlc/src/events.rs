//! # Bridge Events
//!
//! Transition events delivered to the notification sink. One event per
//! successful state change; failed operations emit nothing.

use crate::domain::{Address, Hash, TransferId};
use serde::{Deserialize, Serialize};

/// Event topic, used for filtering and log fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Transfer created.
    Initiated,
    /// Transfer completed with a pre-image.
    Completed,
    /// Transfer refunded after expiry.
    Refunded,
}

/// State transition event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeEvent {
    /// A transfer was created and funds locked.
    Initiated {
        /// Derived identifier.
        transfer_id: TransferId,
        /// Locking party.
        originator: Address,
        /// Counterparty bytes.
        recipient: Vec<u8>,
        /// Amount locked.
        amount: u64,
        /// Hash commitment.
        hash_lock: Hash,
        /// Absolute expiry.
        time_lock: u64,
    },

    /// A transfer was completed. The pre-image is public from here on.
    Completed {
        /// Transfer identifier.
        transfer_id: TransferId,
        /// Revealed pre-image.
        pre_image: Vec<u8>,
    },

    /// A transfer was refunded to the originator.
    Refunded {
        /// Transfer identifier.
        transfer_id: TransferId,
    },
}

impl BridgeEvent {
    /// Topic of this event.
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::Initiated { .. } => EventTopic::Initiated,
            Self::Completed { .. } => EventTopic::Completed,
            Self::Refunded { .. } => EventTopic::Refunded,
        }
    }

    /// Transfer this event refers to.
    pub fn transfer_id(&self) -> &TransferId {
        match self {
            Self::Initiated { transfer_id, .. }
            | Self::Completed { transfer_id, .. }
            | Self::Refunded { transfer_id } => transfer_id,
        }
    }
}

/// An event together with the sequence number the sink assigned to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencedEvent {
    /// Monotonic position in the event stream, starting at 1.
    pub sequence: u64,
    /// The event.
    pub event: BridgeEvent,
}
