use std::collections::HashMap;

use parking_lot::Mutex;

use super::error::StorageError;
use super::SlotStorage;

/// In-memory slot map, mainly for tests.
#[derive(Default)]
pub struct MemorySlotStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SlotStorage for MemorySlotStorage {
    async fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock();
        Ok(slots.get(slot).cloned())
    }

    async fn write(&self, slot: &str, payload: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock();
        slots.insert(slot.to_string(), payload.to_string());
        Ok(())
    }
}
