mod categories;
mod collection;
mod error;
mod storage;
mod tasks;

pub use categories::CategoryStore;
pub use collection::CollectionStore;
pub use error::DataStoreError;
pub use storage::FileSlotStorage;
pub use storage::MemorySlotStorage;
pub use storage::SlotStorage;
pub use storage::StorageError;
pub use tasks::TaskStore;
