//! # Algorithms Module
//!
//! Identifier derivation and hash-lock cryptography.

pub mod hash_lock;
pub mod identifier;

pub use hash_lock::{
    create_hash_lock, generate_random_pre_image, verify_completion, verify_pre_image,
    verify_refund,
};
pub use identifier::{derive_transfer_id, encode_identifier_input, short_id};
