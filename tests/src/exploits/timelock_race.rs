//! # Time-Lock Races
//!
//! Attacks at the expiry boundary: completing one second late, refunding
//! at the exact expiry second, and overflowing the deadline.

#[cfg(test)]
mod tests {
    use crate::fixtures::{keccak_lock, Harness, ALICE, RECIPIENT};
    use bridge_htlc::{BridgeApi, BridgeError, TransferState};

    #[test]
    fn test_complete_one_second_late() {
        let h = Harness::new(1_000);
        let id = h.lock(b"secret", 60, 1);

        h.clock.set_time(1_061);
        assert_eq!(
            h.bridge.complete(ALICE, id, b"secret"),
            Err(BridgeError::Expired {
                now: 1_061,
                time_lock: 1_060
            })
        );
    }

    /// At exactly `time_lock` only completion is possible.
    #[test]
    fn test_expiry_second_belongs_to_recipient() {
        let h = Harness::new(1_000);
        let id = h.lock(b"secret", 60, 1);

        h.clock.set_time(1_060);
        assert!(matches!(
            h.bridge.refund(ALICE, id),
            Err(BridgeError::NotExpired { .. })
        ));
        h.bridge.complete(ALICE, id, b"secret").unwrap();
    }

    /// Wrong pre-image is reported before expiry is checked.
    #[test]
    fn test_wrong_secret_after_expiry_reports_mismatch() {
        let h = Harness::new(0);
        let id = h.lock(b"secret", 10, 1);
        h.clock.set_time(100);

        assert!(matches!(
            h.bridge.complete(ALICE, id, b"guess"),
            Err(BridgeError::HashMismatch { .. })
        ));
    }

    #[test]
    fn test_zero_duration_is_immediately_refundable_next_second() {
        let h = Harness::new(500);
        let id = h.lock(b"secret", 0, 1);

        assert!(h.bridge.refund(ALICE, id).is_err());
        h.clock.advance_time(1);
        h.bridge.refund(ALICE, id).unwrap();
    }

    /// A wrapped deadline would make the transfer instantly refundable.
    #[test]
    fn test_deadline_overflow_rejected() {
        let h = Harness::new(u64::MAX - 5);
        let result = h
            .bridge
            .initiate(ALICE, RECIPIENT.to_vec(), keccak_lock(b"x"), 10, 1);

        assert!(matches!(result, Err(BridgeError::TimeLockOverflow { .. })));
        assert!(h.bridge.transfers(&ALICE).unwrap().is_empty());
        assert!(h.events.is_empty());
    }

    #[test]
    fn test_max_deadline_accepted() {
        let h = Harness::new(u64::MAX - 5);
        let id = h.lock(b"secret", 5, 1);

        let record = h.bridge.get_transfer(&ALICE, &id).unwrap();
        assert_eq!(record.time_lock, u64::MAX);
        assert_eq!(record.state, TransferState::Initialized);
    }
}
