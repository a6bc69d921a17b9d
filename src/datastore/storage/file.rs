use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::StorageError;
use super::SlotStorage;
use crate::config::StorageConfig;

/// File-backed slot storage: each slot is one JSON file under a base
/// directory, `<dir>/<slot>.json`. The directory is created on first write.
pub struct FileSlotStorage {
    dir: PathBuf,
}

impl FileSlotStorage {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_owned(),
        }
    }

    /// Storage rooted at the configured data directory.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.dir)
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }
}

#[async_trait::async_trait]
impl SlotStorage for FileSlotStorage {
    async fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.slot_path(slot)).await {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(slot.to_string(), err)),
        }
    }

    async fn write(&self, slot: &str, payload: &str) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|err| StorageError::Io(slot.to_string(), err))?;
        tokio::fs::write(self.slot_path(slot), payload)
            .await
            .map_err(|err| StorageError::Io(slot.to_string(), err))
    }
}
