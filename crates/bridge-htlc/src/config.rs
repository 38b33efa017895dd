//! Configuration for the bridge service

use crate::adapters::DEFAULT_EVENT_CAPACITY;
use crate::domain::HashAlgorithm;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Bridge configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Hash function applied to pre-images.
    pub pre_image_hash: HashAlgorithm,
    /// Broadcast buffer per subscriber.
    pub event_channel_capacity: usize,
    /// Directory for the JSON registry store; in-memory when unset.
    pub data_dir: Option<PathBuf>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            pre_image_hash: HashAlgorithm::Keccak256,
            event_channel_capacity: DEFAULT_EVENT_CAPACITY,
            data_dir: None,
        }
    }
}

impl BridgeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BRIDGE_PRE_IMAGE_HASH`: `keccak256` or `sha256` (default: keccak256)
    /// - `BRIDGE_EVENT_CAPACITY`: broadcast buffer size (default: 1024)
    /// - `BRIDGE_DATA_DIR`: registry directory (default: unset, in-memory)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            pre_image_hash: lookup("BRIDGE_PRE_IMAGE_HASH")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.pre_image_hash),

            event_channel_capacity: lookup("BRIDGE_EVENT_CAPACITY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.event_channel_capacity),

            data_dir: lookup("BRIDGE_DATA_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}
