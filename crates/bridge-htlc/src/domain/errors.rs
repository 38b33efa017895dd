//! # Domain Errors
//!
//! Error taxonomy for the bridge originator. Every variant is a caller-input
//! or timing error except `Storage`, which wraps persistence failures.

use super::value_objects::TransferState;
use thiserror::Error;

/// Hash type (32-byte Keccak-256 / SHA-256 digest).
pub type Hash = [u8; 32];

/// Account address of an originator (32-byte).
pub type Address = [u8; 32];

/// Identifier of a bridge transfer.
pub type TransferId = Hash;

/// Result alias used throughout the crate.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Bridge error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// No record in the owner's registry derives to this identifier.
    #[error("Transfer not found: {}", hex::encode(.0))]
    NotFound(TransferId),

    /// Operation attempted on a record that is no longer `Initialized`.
    #[error("Invalid transfer state for {}: {state:?}", hex::encode(.transfer_id))]
    InvalidState {
        /// Transfer identifier
        transfer_id: TransferId,
        /// State the record is in
        state: TransferState,
    },

    /// Pre-image does not hash to the stored hash lock.
    #[error("Pre-image does not match hash lock of {}", hex::encode(.transfer_id))]
    HashMismatch {
        /// Transfer identifier
        transfer_id: TransferId,
    },

    /// Completion attempted after the time lock.
    #[error("Transfer expired: now={now}, time_lock={time_lock}")]
    Expired {
        /// Current time
        now: u64,
        /// Expiry timestamp
        time_lock: u64,
    },

    /// Refund attempted at or before the time lock.
    #[error("Transfer not expired: now={now}, time_lock={time_lock}")]
    NotExpired {
        /// Current time
        now: u64,
        /// Expiry timestamp
        time_lock: u64,
    },

    /// Owner has no registry yet.
    #[error("Registry not initialized for owner {}", hex::encode(.0))]
    RegistryNotInitialized(Address),

    /// `now + duration` does not fit in a u64 timestamp.
    #[error("Time lock overflow: now={now}, duration={duration}")]
    TimeLockOverflow {
        /// Current time
        now: u64,
        /// Requested duration
        duration: u64,
    },

    /// Owner's nonce counter is at `u64::MAX`.
    #[error("Nonce exhausted for owner {}", hex::encode(.0))]
    NonceExhausted(Address),

    /// Registry store failure.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BridgeError {
    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::InvalidState { .. } => "invalid_state",
            Self::HashMismatch { .. } => "hash_mismatch",
            Self::Expired { .. } => "expired",
            Self::NotExpired { .. } => "not_expired",
            Self::RegistryNotInitialized(_) => "registry_not_initialized",
            Self::TimeLockOverflow { .. } => "time_lock_overflow",
            Self::NonceExhausted(_) => "nonce_exhausted",
            Self::Storage(_) => "storage",
        }
    }
}
