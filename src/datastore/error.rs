use thiserror::*;

use super::storage::StorageError;

#[derive(Debug, Error)]
pub enum DataStoreError {
    /// Lookup by numeric id or slug failed. Carries the entity label so
    /// the message renders as "Task not found" / "Category not found".
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("storage returned error: {0}")]
    Storage(#[from] StorageError),

    #[error("corrupt collection payload: {0}")]
    Payload(#[from] serde_json::Error),
}
