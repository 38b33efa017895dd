//! # Transfer Identifier Derivation
//!
//! `id = keccak256(originator ‖ recipient ‖ hash_lock ‖ le_u64(sequence))`
//!
//! The originator is a fixed 32-byte prefix and `hash_lock ‖ sequence` a
//! fixed 40-byte suffix, so the variable-length recipient cannot make two
//! distinct tuples share an encoding.

use crate::domain::{Address, Hash, TransferId};
use sha3::{Digest, Keccak256};

/// Canonical byte encoding of the identifier inputs.
pub fn encode_identifier_input(
    originator: &Address,
    recipient: &[u8],
    hash_lock: &Hash,
    sequence: u64,
) -> Vec<u8> {
    let mut data = Vec::with_capacity(originator.len() + recipient.len() + hash_lock.len() + 8);
    data.extend_from_slice(originator);
    data.extend_from_slice(recipient);
    data.extend_from_slice(hash_lock);
    data.extend_from_slice(&sequence.to_le_bytes());
    data
}

/// Derive the transfer identifier.
#[must_use]
pub fn derive_transfer_id(
    originator: &Address,
    recipient: &[u8],
    hash_lock: &Hash,
    sequence: u64,
) -> TransferId {
    let mut hasher = Keccak256::new();
    hasher.update(originator);
    hasher.update(recipient);
    hasher.update(hash_lock);
    hasher.update(sequence.to_le_bytes());
    hasher.finalize().into()
}

/// Short hex prefix of an identifier for log lines.
pub fn short_id(id: &TransferId) -> String {
    hex::encode(&id[..4])
}
