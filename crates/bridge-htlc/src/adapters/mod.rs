//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits: registry stores, event sinks and clocks.

mod broadcast_sink;
mod clock;
mod event_log;
mod json_store;
mod memory_store;

pub use broadcast_sink::{BroadcastEventSink, DEFAULT_EVENT_CAPACITY};
pub use clock::{ManualClock, SystemClock};
pub use event_log::InMemoryEventLog;
pub use json_store::JsonFileRegistryStore;
pub use memory_store::InMemoryRegistryStore;
