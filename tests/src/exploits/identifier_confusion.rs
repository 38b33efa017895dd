//! # Identifier Confusion
//!
//! Identifiers are bound to the owner's registry and to the creation nonce.
//! Foreign, forged or position-derived identifiers must resolve to nothing.

#[cfg(test)]
mod tests {
    use crate::fixtures::{keccak_lock, Harness, ALICE, BOB, RECIPIENT};
    use bridge_htlc::{derive_transfer_id, BridgeApi, BridgeError, RegistryStore};

    /// BOB cannot settle ALICE's transfer through his own registry.
    #[test]
    fn test_foreign_owner_cannot_settle() {
        let h = Harness::new(0);
        let id = h.lock(b"secret", 10, 1);

        assert_eq!(
            h.bridge.complete(BOB, id, b"secret"),
            Err(BridgeError::NotFound(id))
        );
        h.clock.set_time(11);
        assert_eq!(h.bridge.refund(BOB, id), Err(BridgeError::NotFound(id)));
        h.bridge.refund(ALICE, id).unwrap();
    }

    /// Ids computed from list positions never match stored transfers.
    #[test]
    fn test_position_derived_id_not_found() {
        let h = Harness::new(0);
        let lock = keccak_lock(b"secret");
        let real = h.lock(b"secret", 10, 1);

        let by_position = derive_transfer_id(&ALICE, RECIPIENT, &lock, 0);
        assert_ne!(by_position, real);
        assert_eq!(
            h.bridge.complete(ALICE, by_position, b"secret"),
            Err(BridgeError::NotFound(by_position))
        );

        let by_nonce = derive_transfer_id(&ALICE, RECIPIENT, &lock, 1);
        assert_eq!(by_nonce, real);
    }

    /// Predicting the next id does not let anyone act on it early.
    #[test]
    fn test_predicted_id_unusable_before_creation() {
        let h = Harness::new(0);
        let lock = keccak_lock(b"secret");
        let predicted = derive_transfer_id(&ALICE, RECIPIENT, &lock, 1);

        assert_eq!(
            h.bridge.complete(ALICE, predicted, b"secret"),
            Err(BridgeError::NotFound(predicted))
        );

        let actual = h.lock(b"secret", 10, 1);
        assert_eq!(actual, predicted);
    }

    #[test]
    fn test_uninitialized_owner_rejected() {
        let h = Harness::new(0);
        let mallory = [0x66; 32];

        assert_eq!(
            h.bridge
                .initiate(mallory, RECIPIENT.to_vec(), keccak_lock(b"x"), 10, 1),
            Err(BridgeError::RegistryNotInitialized(mallory))
        );
        assert!(!h.store.contains(&mallory).unwrap());
        assert!(!h.bridge.is_initialized(&mallory).unwrap());
    }
}
