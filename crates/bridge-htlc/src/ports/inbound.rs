//! # Inbound Ports
//!
//! API trait defining what the bridge originator can do.

use crate::domain::{Address, BridgeResult, Hash, TransferId, TransferRecord};

/// Bridge API - inbound port.
///
/// All operations are synchronous and all-or-nothing: an `Err` means no
/// record changed and no event was emitted.
pub trait BridgeApi: Send + Sync {
    /// Create the owner's registry. A no-op if it already exists.
    fn initialize(&self, owner: Address) -> BridgeResult<()>;

    /// Lock `amount` under `hash_lock` until `now + time_lock_duration`.
    ///
    /// Returns the derived transfer identifier, which must be relayed to the
    /// counterparty.
    fn initiate(
        &self,
        owner: Address,
        recipient: Vec<u8>,
        hash_lock: Hash,
        time_lock_duration: u64,
        amount: u64,
    ) -> BridgeResult<TransferId>;

    /// Complete a transfer by revealing the pre-image.
    fn complete(&self, owner: Address, transfer_id: TransferId, pre_image: &[u8])
        -> BridgeResult<()>;

    /// Refund an expired transfer to the originator.
    fn refund(&self, owner: Address, transfer_id: TransferId) -> BridgeResult<()>;

    /// Get a transfer by identifier.
    fn get_transfer(&self, owner: &Address, transfer_id: &TransferId)
        -> BridgeResult<TransferRecord>;

    /// All transfers of an owner in creation order.
    fn transfers(&self, owner: &Address) -> BridgeResult<Vec<TransferRecord>>;

    /// Whether the owner's registry exists.
    fn is_initialized(&self, owner: &Address) -> BridgeResult<bool>;
}
