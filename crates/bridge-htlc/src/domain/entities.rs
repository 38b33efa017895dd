//! # Domain Entities
//!
//! Transfer records and the per-owner registry that holds them.

use super::errors::{Address, BridgeError, BridgeResult, Hash, TransferId};
use super::value_objects::{HashAlgorithm, TransferState};
use crate::algorithms::{derive_transfer_id, verify_completion, verify_refund};
use serde::{Deserialize, Serialize};

/// A single hash-time-locked bridge transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// Amount locked.
    pub amount: u64,
    /// Locking party (owner of the registry).
    pub originator: Address,
    /// Counterparty on the destination chain, opaque bytes.
    pub recipient: Vec<u8>,
    /// Hash commitment the redeemer must satisfy.
    pub hash_lock: Hash,
    /// Absolute expiry timestamp (seconds).
    pub time_lock: u64,
    /// Current state.
    pub state: TransferState,
    /// Registry nonce consumed when this record was created.
    pub nonce: u64,
    /// Creation timestamp.
    pub created_at: u64,
}

/// Parameters for creating a transfer record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferParams {
    /// Amount locked.
    pub amount: u64,
    /// Locking party.
    pub originator: Address,
    /// Counterparty bytes.
    pub recipient: Vec<u8>,
    /// Hash commitment.
    pub hash_lock: Hash,
    /// Absolute expiry timestamp.
    pub time_lock: u64,
    /// Nonce used for identifier derivation.
    pub nonce: u64,
    /// Creation timestamp.
    pub created_at: u64,
}

impl TransferRecord {
    /// Create a new record in the `Initialized` state.
    pub fn new(params: TransferParams) -> Self {
        Self {
            amount: params.amount,
            originator: params.originator,
            recipient: params.recipient,
            hash_lock: params.hash_lock,
            time_lock: params.time_lock,
            state: TransferState::Initialized,
            nonce: params.nonce,
            created_at: params.created_at,
        }
    }

    /// Identifier derived from this record's own fields and creation nonce.
    pub fn transfer_id(&self) -> TransferId {
        derive_transfer_id(&self.originator, &self.recipient, &self.hash_lock, self.nonce)
    }

    /// Check if the time lock has passed.
    pub fn is_expired(&self, now: u64) -> bool {
        now > self.time_lock
    }

    /// Check if completion is currently allowed (ignores the pre-image).
    pub fn can_complete(&self, now: u64) -> bool {
        self.state == TransferState::Initialized && !self.is_expired(now)
    }

    /// Check if refund is currently allowed.
    pub fn can_refund(&self, now: u64) -> bool {
        self.state == TransferState::Initialized && self.is_expired(now)
    }

    /// Complete with a pre-image.
    ///
    /// Checks state, then hash, then expiry. Nothing is mutated on failure.
    pub fn complete(
        &mut self,
        pre_image: &[u8],
        algorithm: HashAlgorithm,
        now: u64,
    ) -> BridgeResult<()> {
        verify_completion(&self.transfer_id(), self, pre_image, algorithm, now)?;
        self.state = TransferState::Completed;
        Ok(())
    }

    /// Refund to the originator.
    pub fn refund(&mut self, now: u64) -> BridgeResult<()> {
        verify_refund(&self.transfer_id(), self, now)?;

        self.state = TransferState::Refunded;
        Ok(())
    }
}

/// Append-only collection of transfer records for one owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRegistry {
    owner: Address,
    records: Vec<TransferRecord>,
    nonce: u64,
}

impl TransferRegistry {
    /// Create an empty registry.
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            records: Vec::new(),
            nonce: 0,
        }
    }

    /// Owner identity.
    pub fn owner(&self) -> &Address {
        &self.owner
    }

    /// Current nonce (last value handed out, 0 if none).
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// All records in creation order.
    pub fn records(&self) -> &[TransferRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at position.
    pub fn get(&self, index: usize) -> Option<&TransferRecord> {
        self.records.get(index)
    }

    /// Increment and return the sequence counter.
    ///
    /// Call exactly once per new record, before deriving its identifier.
    /// The counter is left untouched when exhausted.
    pub fn next_nonce(&mut self) -> BridgeResult<u64> {
        self.nonce = self
            .nonce
            .checked_add(1)
            .ok_or(BridgeError::NonceExhausted(self.owner))?;
        Ok(self.nonce)
    }

    /// Append a record at the end of the sequence.
    pub fn append(&mut self, record: TransferRecord) {
        self.records.push(record);
    }

    /// Position of the first record whose derived identifier matches.
    ///
    /// Linear scan; every candidate is re-derived from its stored nonce.
    pub fn find_index(&self, transfer_id: &TransferId) -> BridgeResult<usize> {
        find_index(&self.records, transfer_id)
    }

    /// Complete the record at `index`.
    pub fn complete_at(
        &mut self,
        index: usize,
        pre_image: &[u8],
        algorithm: HashAlgorithm,
        now: u64,
    ) -> BridgeResult<&TransferRecord> {
        let record = self.record_mut(index)?;
        record.complete(pre_image, algorithm, now)?;
        Ok(&*record)
    }

    /// Refund the record at `index`.
    pub fn refund_at(&mut self, index: usize, now: u64) -> BridgeResult<&TransferRecord> {
        let record = self.record_mut(index)?;
        record.refund(now)?;
        Ok(&*record)
    }

    fn record_mut(&mut self, index: usize) -> BridgeResult<&mut TransferRecord> {
        let len = self.records.len();
        self.records
            .get_mut(index)
            .ok_or_else(|| BridgeError::Storage(format!("record index {index} out of {len}")))
    }
}

/// Scan `records` in order for the first one deriving to `transfer_id`.
pub fn find_index(records: &[TransferRecord], transfer_id: &TransferId) -> BridgeResult<usize> {
    records
        .iter()
        .position(|record| record.transfer_id() == *transfer_id)
        .ok_or(BridgeError::NotFound(*transfer_id))
}
