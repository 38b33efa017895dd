//! # Persistence
//!
//! Registries survive a restart through the JSON store, and identifiers
//! re-derive from the stored nonces.

#[cfg(test)]
mod tests {
    use crate::fixtures::{keccak_lock, ALICE, RECIPIENT};
    use bridge_htlc::{
        BridgeApi, BridgeConfig, BridgeService, ConfiguredBridgeService, InMemoryEventLog,
        JsonFileRegistryStore, ManualClock, RegistryStore, TransferState,
    };
    use std::sync::Arc;

    fn open_bridge(
        dir: &std::path::Path,
        now: u64,
    ) -> BridgeService<JsonFileRegistryStore, Arc<InMemoryEventLog>, ManualClock> {
        BridgeService::new(
            JsonFileRegistryStore::open(dir).unwrap(),
            Arc::new(InMemoryEventLog::new()),
            ManualClock::new(now),
        )
    }

    #[test]
    fn test_restart_then_complete() {
        let dir = tempfile::tempdir().unwrap();

        let (first, second) = {
            let bridge = open_bridge(dir.path(), 0);
            bridge.initialize(ALICE).unwrap();
            let first = bridge
                .initiate(ALICE, RECIPIENT.to_vec(), keccak_lock(b"one"), 100, 1)
                .unwrap();
            let second = bridge
                .initiate(ALICE, RECIPIENT.to_vec(), keccak_lock(b"two"), 100, 2)
                .unwrap();
            (first, second)
        };

        let bridge = open_bridge(dir.path(), 50);
        assert!(bridge.is_initialized(&ALICE).unwrap());
        bridge.complete(ALICE, second, b"two").unwrap();
        bridge.complete(ALICE, first, b"one").unwrap();

        // Nonce continues after restart
        let third = bridge
            .initiate(ALICE, RECIPIENT.to_vec(), keccak_lock(b"three"), 100, 3)
            .unwrap();
        assert_eq!(bridge.get_transfer(&ALICE, &third).unwrap().nonce, 3);
    }

    #[test]
    fn test_terminal_state_persisted() {
        let dir = tempfile::tempdir().unwrap();

        let id = {
            let bridge = open_bridge(dir.path(), 0);
            bridge.initialize(ALICE).unwrap();
            let id = bridge
                .initiate(ALICE, RECIPIENT.to_vec(), keccak_lock(b"x"), 10, 1)
                .unwrap();
            bridge.clock().set_time(11);
            bridge.refund(ALICE, id).unwrap();
            id
        };

        let bridge = open_bridge(dir.path(), 0);
        assert_eq!(
            bridge.get_transfer(&ALICE, &id).unwrap().state,
            TransferState::Refunded
        );
        assert!(bridge.complete(ALICE, id, b"x").is_err());
    }

    #[test]
    fn test_reinitialize_after_restart_keeps_records() {
        let dir = tempfile::tempdir().unwrap();
        {
            let bridge = open_bridge(dir.path(), 0);
            bridge.initialize(ALICE).unwrap();
            bridge
                .initiate(ALICE, RECIPIENT.to_vec(), keccak_lock(b"x"), 10, 1)
                .unwrap();
        }

        let bridge = open_bridge(dir.path(), 0);
        bridge.initialize(ALICE).unwrap();
        assert_eq!(bridge.transfers(&ALICE).unwrap().len(), 1);
    }

    #[test]
    fn test_store_file_per_owner() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileRegistryStore::open(dir.path()).unwrap();
        let bridge = BridgeService::new(
            store,
            Arc::new(InMemoryEventLog::new()),
            ManualClock::new(0),
        );
        bridge.initialize(ALICE).unwrap();

        let expected = dir.path().join(format!("{}.json", hex::encode(ALICE)));
        assert!(expected.exists());

        let reopened = JsonFileRegistryStore::open(dir.path()).unwrap();
        assert!(reopened.contains(&ALICE).unwrap());
    }

    #[test]
    fn test_configured_service_uses_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = BridgeConfig {
            data_dir: Some(dir.path().join("registries")),
            ..Default::default()
        };

        let bridge = ConfiguredBridgeService::from_config(config).unwrap();
        bridge.initialize(ALICE).unwrap();

        assert!(dir
            .path()
            .join("registries")
            .join(format!("{}.json", hex::encode(ALICE)))
            .exists());
    }
}
