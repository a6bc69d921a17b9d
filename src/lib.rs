//! Local CRUD data layer for a task-management application.
//!
//! Tasks and categories share one generic [`CollectionStore`] over named,
//! JSON-persisted collections. Storage backends and simulated latency are
//! both injected.

pub mod config;
pub mod datastore;
pub mod latency;
pub mod log;
pub mod model;
pub mod seed;

pub use config::{Config, ConfigError, LatencyProfile, StorageConfig};
pub use datastore::{
    CategoryStore, CollectionStore, DataStoreError, FileSlotStorage, MemorySlotStorage,
    SlotStorage, StorageError, TaskStore,
};
pub use latency::{Latency, NoLatency, SimulatedLatency};
pub use model::{
    Category, CategoryPatch, NewCategory, NewTask, Priority, Record, Task, TaskPatch,
};

#[cfg(test)]
mod e2e_tests;
