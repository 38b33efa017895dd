//! # Bridge HTLC
//!
//! Originator side of a hash time-locked bridge.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! An owner locks funds for a recipient on another ledger:
//! - `initiate` records a transfer guarded by a hash lock and a time lock
//! - `complete` reveals the pre-image before expiry
//! - `refund` returns control to the owner after expiry
//!
//! Every accepted transition emits one event to the notification sink.
//!
//! ## State Machine
//!
//! ```text
//! Initialized ──complete (now ≤ time_lock, hash ok)──▶ Completed
//!      │
//!      └──────refund (now > time_lock)───────────────▶ Refunded
//! ```
//!
//! ## Transfer Identifier
//!
//! `keccak256(originator ‖ recipient ‖ hash_lock ‖ le_u64(nonce))`. The nonce
//! is stored with the record, so identifiers re-derive after a restart.
//!
//! ## Module Structure
//!
//! ```text
//! bridge-htlc/
//! ├── domain/          # TransferRecord, TransferRegistry, PreImage, errors
//! ├── algorithms/      # Identifier derivation, hash locks
//! ├── ports/           # BridgeApi, RegistryStore, NotificationSink, TimeSource
//! ├── adapters/        # Memory/JSON stores, broadcast sink, clocks
//! ├── service.rs       # BridgeService (state-machine driver)
//! ├── events.rs        # Transition events
//! ├── config.rs        # BridgeConfig
//! └── metrics.rs       # Prometheus counters (feature = "metrics")
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{
    BroadcastEventSink, InMemoryEventLog, InMemoryRegistryStore, JsonFileRegistryStore,
    ManualClock, SystemClock, DEFAULT_EVENT_CAPACITY,
};
pub use algorithms::{
    create_hash_lock, derive_transfer_id, generate_random_pre_image, short_id, verify_pre_image,
};
pub use config::BridgeConfig;
pub use domain::{
    Address, BridgeError, BridgeResult, Hash, HashAlgorithm, PreImage, TransferId,
    TransferRecord, TransferRegistry, TransferState, PRE_IMAGE_LEN,
};
pub use events::{BridgeEvent, EventTopic, SequencedEvent};
pub use ports::{BridgeApi, NotificationSink, RegistryStore, TimeSource};
pub use service::{BridgeService, ConfiguredBridgeService};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
