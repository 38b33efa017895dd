//! # Hash Lock Creation and Verification
//!
//! Pre-image hashing for HTLC commitments, plus the full precondition checks
//! for completion and refund.

use crate::domain::{
    invariant_initialized, invariant_pre_image_matches, invariant_time_lock_passed,
    invariant_within_time_lock, BridgeError, Hash, HashAlgorithm, PreImage, TransferId,
    TransferRecord, PRE_IMAGE_LEN,
};
use rand::RngCore;
use sha2::Sha256;
use sha3::{Digest, Keccak256};

/// Generate a cryptographically secure random pre-image.
pub fn generate_random_pre_image() -> PreImage {
    let mut bytes = vec![0u8; PRE_IMAGE_LEN];
    rand::thread_rng().fill_bytes(&mut bytes);
    PreImage::new(bytes)
}

/// Create a hash lock from a pre-image.
pub fn create_hash_lock(pre_image: &[u8], algorithm: HashAlgorithm) -> Hash {
    match algorithm {
        HashAlgorithm::Keccak256 => Keccak256::digest(pre_image).into(),
        HashAlgorithm::Sha256 => Sha256::digest(pre_image).into(),
    }
}

/// Verify that a pre-image matches a hash lock.
pub fn verify_pre_image(pre_image: &[u8], hash_lock: &Hash, algorithm: HashAlgorithm) -> bool {
    create_hash_lock(pre_image, algorithm) == *hash_lock
}

/// Verify a completion is valid without mutating the record.
pub fn verify_completion(
    transfer_id: &TransferId,
    record: &TransferRecord,
    pre_image: &[u8],
    algorithm: HashAlgorithm,
    now: u64,
) -> Result<(), BridgeError> {
    // 1. Still open
    invariant_initialized(transfer_id, record.state)?;

    // 2. Pre-image matches
    if !invariant_pre_image_matches(pre_image, &record.hash_lock, algorithm) {
        return Err(BridgeError::HashMismatch {
            transfer_id: *transfer_id,
        });
    }

    // 3. Not expired
    invariant_within_time_lock(now, record.time_lock)
}

/// Verify a refund is valid without mutating the record.
pub fn verify_refund(
    transfer_id: &TransferId,
    record: &TransferRecord,
    now: u64,
) -> Result<(), BridgeError> {
    invariant_initialized(transfer_id, record.state)?;
    invariant_time_lock_passed(now, record.time_lock)
}
