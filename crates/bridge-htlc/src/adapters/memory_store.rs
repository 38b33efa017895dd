//! In-Memory Registry Store
//!
//! Implements `RegistryStore` with a map guarded by a read-write lock.

use crate::domain::{Address, BridgeResult, TransferRegistry};
use crate::ports::outbound::RegistryStore;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Registry store held entirely in memory.
#[derive(Default)]
pub struct InMemoryRegistryStore {
    registries: RwLock<HashMap<Address, TransferRegistry>>,
}

impl InMemoryRegistryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of owners with a registry.
    pub fn owner_count(&self) -> usize {
        self.registries.read().len()
    }
}

impl RegistryStore for InMemoryRegistryStore {
    fn load(&self, owner: &Address) -> BridgeResult<Option<TransferRegistry>> {
        Ok(self.registries.read().get(owner).cloned())
    }

    fn save(&self, registry: &TransferRegistry) -> BridgeResult<()> {
        self.registries
            .write()
            .insert(*registry.owner(), registry.clone());
        Ok(())
    }

    fn contains(&self, owner: &Address) -> BridgeResult<bool> {
        Ok(self.registries.read().contains_key(owner))
    }
}
