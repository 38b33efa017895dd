//! # Outbound Ports
//!
//! Traits for external collaborators: registry persistence, the time source
//! and the notification transport.

use crate::domain::{Address, BridgeResult, TransferRegistry};
use crate::events::BridgeEvent;
use std::sync::Arc;

/// Registry persistence - outbound port.
///
/// Keyed by owner. `save` replaces the whole registry atomically; the service
/// never calls it for a registry it did not load or create.
pub trait RegistryStore: Send + Sync {
    /// Load the owner's registry, `None` if never initialized.
    fn load(&self, owner: &Address) -> BridgeResult<Option<TransferRegistry>>;

    /// Persist a registry under its owner.
    fn save(&self, registry: &TransferRegistry) -> BridgeResult<()>;

    /// Whether the owner's registry exists.
    fn contains(&self, owner: &Address) -> BridgeResult<bool> {
        Ok(self.load(owner)?.is_some())
    }
}

/// Notification sink - outbound port.
///
/// Called synchronously inside the operation that changed state, after the
/// change is persisted.
pub trait NotificationSink: Send + Sync {
    /// Append an event and return its sequence number.
    fn emit(&self, event: BridgeEvent) -> u64;
}

/// Time source - outbound port.
pub trait TimeSource: Send + Sync {
    /// Current time in seconds.
    fn now(&self) -> u64;
}

impl<T: RegistryStore + ?Sized> RegistryStore for Arc<T> {
    fn load(&self, owner: &Address) -> BridgeResult<Option<TransferRegistry>> {
        (**self).load(owner)
    }

    fn save(&self, registry: &TransferRegistry) -> BridgeResult<()> {
        (**self).save(registry)
    }

    fn contains(&self, owner: &Address) -> BridgeResult<bool> {
        (**self).contains(owner)
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    fn emit(&self, event: BridgeEvent) -> u64 {
        (**self).emit(event)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now(&self) -> u64 {
        (**self).now()
    }
}
