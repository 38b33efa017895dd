//! # Domain Invariants
//!
//! Preconditions guarding every state transition. Each check either passes
//! or yields the specific error kind a relayer needs to react to.

use super::errors::{BridgeError, Hash, TransferId};
use super::value_objects::{HashAlgorithm, TransferState};
use crate::algorithms::create_hash_lock;

/// Invariant: only `Initialized` records may transition.
pub fn invariant_initialized(
    transfer_id: &TransferId,
    state: TransferState,
) -> Result<(), BridgeError> {
    if state != TransferState::Initialized {
        return Err(BridgeError::InvalidState {
            transfer_id: *transfer_id,
            state,
        });
    }
    Ok(())
}

/// Invariant: `hash(pre_image)` equals the stored hash lock.
pub fn invariant_pre_image_matches(
    pre_image: &[u8],
    hash_lock: &Hash,
    algorithm: HashAlgorithm,
) -> bool {
    create_hash_lock(pre_image, algorithm) == *hash_lock
}

/// Invariant: completion is allowed up to and including the expiry second.
pub fn invariant_within_time_lock(now: u64, time_lock: u64) -> Result<(), BridgeError> {
    if now > time_lock {
        return Err(BridgeError::Expired { now, time_lock });
    }
    Ok(())
}

/// Invariant: refund requires the time lock to be strictly in the past.
pub fn invariant_time_lock_passed(now: u64, time_lock: u64) -> Result<(), BridgeError> {
    if now <= time_lock {
        return Err(BridgeError::NotExpired { now, time_lock });
    }
    Ok(())
}
