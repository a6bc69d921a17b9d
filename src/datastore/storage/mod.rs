mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileSlotStorage;
pub use memory::MemorySlotStorage;

/// Host key-value persistence: one named slot per collection, holding
/// the serialized JSON array.
#[async_trait::async_trait]
pub trait SlotStorage: Sync + Send + 'static {
    /// Raw payload of the slot, `None` when the slot has never been written.
    async fn read(&self, slot: &str) -> Result<Option<String>, StorageError>;
    async fn write(&self, slot: &str, payload: &str) -> Result<(), StorageError>;
}
