//! Bridge Service
//!
//! State-machine driver implementing `BridgeApi`.
//!
//! Every mutating operation runs under the owner's lock:
//! 1. Load the owner's registry
//! 2. Validate preconditions and mutate a working copy
//! 3. Persist the copy
//! 4. Emit the transition event
//!
//! A failure in steps 1-3 leaves the stored registry untouched and emits
//! nothing.

use crate::adapters::{BroadcastEventSink, InMemoryRegistryStore, JsonFileRegistryStore, SystemClock};
use crate::algorithms::{derive_transfer_id, short_id};
use crate::config::BridgeConfig;
use crate::domain::{
    Address, BridgeError, BridgeResult, Hash, TransferId, TransferParams, TransferRecord,
    TransferRegistry,
};
use crate::events::BridgeEvent;
use crate::metrics;
use crate::ports::inbound::BridgeApi;
use crate::ports::outbound::{NotificationSink, RegistryStore, TimeSource};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Bridge service over a registry store, a notification sink and a clock.
pub struct BridgeService<S, N, C> {
    config: BridgeConfig,
    store: S,
    sink: N,
    clock: C,
    /// Single-writer lock per owner.
    owner_locks: RwLock<HashMap<Address, Arc<Mutex<()>>>>,
}

/// Service wired from configuration.
pub type ConfiguredBridgeService =
    BridgeService<Arc<dyn RegistryStore>, Arc<BroadcastEventSink>, SystemClock>;

impl<S, N, C> BridgeService<S, N, C>
where
    S: RegistryStore,
    N: NotificationSink,
    C: TimeSource,
{
    /// Create a new service with default config.
    pub fn new(store: S, sink: N, clock: C) -> Self {
        Self::with_config(BridgeConfig::default(), store, sink, clock)
    }

    /// Create a new service with custom config.
    pub fn with_config(config: BridgeConfig, store: S, sink: N, clock: C) -> Self {
        Self {
            config,
            store,
            sink,
            clock,
            owner_locks: RwLock::new(HashMap::new()),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Notification sink.
    pub fn sink(&self) -> &N {
        &self.sink
    }

    /// Time source.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Lock for an owner whose registry exists.
    ///
    /// Entries are only created for initialized owners, so rejected calls for
    /// unknown owners leave the map unchanged.
    fn owner_lock(&self, owner: &Address) -> BridgeResult<Arc<Mutex<()>>> {
        if let Some(lock) = self.owner_locks.read().get(owner) {
            return Ok(lock.clone());
        }
        if !self.store.contains(owner)? {
            return Err(BridgeError::RegistryNotInitialized(*owner));
        }
        Ok(self.insert_owner_lock(owner))
    }

    fn insert_owner_lock(&self, owner: &Address) -> Arc<Mutex<()>> {
        self.owner_locks.write().entry(*owner).or_default().clone()
    }

    fn load_registry(&self, owner: &Address) -> BridgeResult<TransferRegistry> {
        self.store
            .load(owner)?
            .ok_or(BridgeError::RegistryNotInitialized(*owner))
    }

    fn rejected(&self, operation: &'static str, owner: &Address, err: BridgeError) -> BridgeError {
        warn!(
            operation,
            owner = %hex::encode(owner),
            error_kind = err.kind(),
            error = %err,
            "Bridge operation rejected"
        );
        metrics::record_rejected(err.kind());
        err
    }

    fn do_initialize(&self, owner: &Address) -> BridgeResult<()> {
        if self.store.contains(owner)? {
            debug!(owner = %hex::encode(owner), "Registry already initialized");
            return Ok(());
        }
        self.store.save(&TransferRegistry::new(*owner))?;
        info!(owner = %hex::encode(owner), "Registry initialized");
        Ok(())
    }

    fn do_initiate(
        &self,
        owner: &Address,
        recipient: Vec<u8>,
        hash_lock: Hash,
        duration: u64,
        amount: u64,
    ) -> BridgeResult<TransferId> {
        let mut registry = self.load_registry(owner)?;

        let now = self.clock.now();
        let time_lock = now
            .checked_add(duration)
            .ok_or(BridgeError::TimeLockOverflow { now, duration })?;

        let nonce = registry.next_nonce()?;
        let transfer_id = derive_transfer_id(owner, &recipient, &hash_lock, nonce);

        registry.append(TransferRecord::new(TransferParams {
            amount,
            originator: *owner,
            recipient: recipient.clone(),
            hash_lock,
            time_lock,
            nonce,
            created_at: now,
        }));
        self.store.save(&registry)?;

        let sequence = self.sink.emit(BridgeEvent::Initiated {
            transfer_id,
            originator: *owner,
            recipient,
            amount,
            hash_lock,
            time_lock,
        });

        info!(
            owner = %hex::encode(owner),
            transfer_id = %short_id(&transfer_id),
            amount,
            time_lock,
            nonce,
            sequence,
            "Bridge transfer initiated"
        );
        metrics::record_initiated();
        Ok(transfer_id)
    }

    fn do_complete(
        &self,
        owner: &Address,
        transfer_id: TransferId,
        pre_image: &[u8],
    ) -> BridgeResult<()> {
        let mut registry = self.load_registry(owner)?;
        let index = registry.find_index(&transfer_id)?;
        debug!(transfer_id = %short_id(&transfer_id), index, "Transfer located");

        let now = self.clock.now();
        registry.complete_at(index, pre_image, self.config.pre_image_hash, now)?;
        self.store.save(&registry)?;

        let sequence = self.sink.emit(BridgeEvent::Completed {
            transfer_id,
            pre_image: pre_image.to_vec(),
        });

        info!(
            owner = %hex::encode(owner),
            transfer_id = %short_id(&transfer_id),
            now,
            sequence,
            "Bridge transfer completed"
        );
        metrics::record_completed();
        Ok(())
    }

    fn do_refund(&self, owner: &Address, transfer_id: TransferId) -> BridgeResult<()> {
        let mut registry = self.load_registry(owner)?;
        let index = registry.find_index(&transfer_id)?;
        debug!(transfer_id = %short_id(&transfer_id), index, "Transfer located");

        let now = self.clock.now();
        registry.refund_at(index, now)?;
        self.store.save(&registry)?;

        let sequence = self.sink.emit(BridgeEvent::Refunded { transfer_id });

        info!(
            owner = %hex::encode(owner),
            transfer_id = %short_id(&transfer_id),
            now,
            sequence,
            "Bridge transfer refunded"
        );
        metrics::record_refunded();
        Ok(())
    }
}

impl ConfiguredBridgeService {
    /// Wire a service from configuration: JSON store when `data_dir` is set,
    /// in-memory otherwise; broadcast sink; system clock.
    pub fn from_config(config: BridgeConfig) -> BridgeResult<Self> {
        let store: Arc<dyn RegistryStore> = match &config.data_dir {
            Some(dir) => Arc::new(JsonFileRegistryStore::open(dir)?),
            None => Arc::new(InMemoryRegistryStore::new()),
        };
        let sink = Arc::new(BroadcastEventSink::with_capacity(
            config.event_channel_capacity,
        ));

        info!(
            pre_image_hash = %config.pre_image_hash,
            persistent = config.data_dir.is_some(),
            "Bridge service configured"
        );
        Ok(Self::with_config(config, store, sink, SystemClock))
    }
}

impl<S, N, C> BridgeApi for BridgeService<S, N, C>
where
    S: RegistryStore,
    N: NotificationSink,
    C: TimeSource,
{
    fn initialize(&self, owner: Address) -> BridgeResult<()> {
        let lock = self.insert_owner_lock(&owner);
        let _guard = lock.lock();
        self.do_initialize(&owner)
            .map_err(|e| self.rejected("initialize", &owner, e))
    }

    fn initiate(
        &self,
        owner: Address,
        recipient: Vec<u8>,
        hash_lock: Hash,
        time_lock_duration: u64,
        amount: u64,
    ) -> BridgeResult<TransferId> {
        let lock = self
            .owner_lock(&owner)
            .map_err(|e| self.rejected("initiate", &owner, e))?;
        let _guard = lock.lock();
        self.do_initiate(&owner, recipient, hash_lock, time_lock_duration, amount)
            .map_err(|e| self.rejected("initiate", &owner, e))
    }

    fn complete(
        &self,
        owner: Address,
        transfer_id: TransferId,
        pre_image: &[u8],
    ) -> BridgeResult<()> {
        let lock = self
            .owner_lock(&owner)
            .map_err(|e| self.rejected("complete", &owner, e))?;
        let _guard = lock.lock();
        self.do_complete(&owner, transfer_id, pre_image)
            .map_err(|e| self.rejected("complete", &owner, e))
    }

    fn refund(&self, owner: Address, transfer_id: TransferId) -> BridgeResult<()> {
        let lock = self
            .owner_lock(&owner)
            .map_err(|e| self.rejected("refund", &owner, e))?;
        let _guard = lock.lock();
        self.do_refund(&owner, transfer_id)
            .map_err(|e| self.rejected("refund", &owner, e))
    }

    fn get_transfer(
        &self,
        owner: &Address,
        transfer_id: &TransferId,
    ) -> BridgeResult<TransferRecord> {
        let registry = self.load_registry(owner)?;
        let index = registry.find_index(transfer_id)?;
        registry
            .get(index)
            .cloned()
            .ok_or(BridgeError::NotFound(*transfer_id))
    }

    fn transfers(&self, owner: &Address) -> BridgeResult<Vec<TransferRecord>> {
        Ok(self.load_registry(owner)?.records().to_vec())
    }

    fn is_initialized(&self, owner: &Address) -> BridgeResult<bool> {
        self.store.contains(owner)
    }
}
