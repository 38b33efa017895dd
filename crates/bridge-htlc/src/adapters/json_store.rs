//! JSON File Registry Store
//!
//! Implements `RegistryStore` with one JSON document per owner under a data
//! directory. Writes go to a temporary file that is renamed over the target.

use crate::domain::{Address, BridgeError, BridgeResult, TransferRegistry};
use crate::ports::outbound::RegistryStore;
use parking_lot::Mutex;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed registry store.
pub struct JsonFileRegistryStore {
    dir: PathBuf,
    /// Serializes writers so temp files never collide.
    write_lock: Mutex<()>,
}

impl JsonFileRegistryStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> BridgeResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| storage_error(&dir, e))?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    /// Root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, owner: &Address) -> PathBuf {
        self.dir.join(format!("{}.json", hex::encode(owner)))
    }
}

/// Write and flush to disk before the file becomes visible under its final name.
fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn storage_error(path: &Path, err: impl std::fmt::Display) -> BridgeError {
    BridgeError::Storage(format!("{}: {}", path.display(), err))
}

impl RegistryStore for JsonFileRegistryStore {
    fn load(&self, owner: &Address) -> BridgeResult<Option<TransferRegistry>> {
        let path = self.path_for(owner);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(storage_error(&path, e)),
        };

        let registry: TransferRegistry =
            serde_json::from_str(&contents).map_err(|e| storage_error(&path, e))?;

        if registry.owner() != owner {
            return Err(storage_error(&path, "owner mismatch"));
        }

        debug!(
            owner = %hex::encode(owner),
            records = registry.len(),
            "Loaded registry from disk"
        );
        Ok(Some(registry))
    }

    fn save(&self, registry: &TransferRegistry) -> BridgeResult<()> {
        let path = self.path_for(registry.owner());
        let tmp = path.with_extension("json.tmp");
        let contents =
            serde_json::to_string_pretty(registry).map_err(|e| storage_error(&path, e))?;

        let _guard = self.write_lock.lock();
        write_synced(&tmp, contents.as_bytes()).map_err(|e| storage_error(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| storage_error(&path, e))?;

        debug!(
            owner = %hex::encode(registry.owner()),
            records = registry.len(),
            "Saved registry to disk"
        );
        Ok(())
    }

    fn contains(&self, owner: &Address) -> BridgeResult<bool> {
        Ok(self.path_for(owner).exists())
    }
}
