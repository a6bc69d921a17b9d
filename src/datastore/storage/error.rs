use thiserror::*;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error on slot {0}: {1}")]
    Io(String, #[source] std::io::Error),
}
