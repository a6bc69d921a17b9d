use std::sync::Arc;

use crate::config::LatencyProfile;
use crate::latency::Latency;
use crate::model::Task;
use crate::seed;

use super::collection::CollectionStore;
use super::error::DataStoreError;
use super::storage::SlotStorage;

/// The task collection; adds the category-scoped query on top of the
/// generic contract.
pub type TaskStore<S> = CollectionStore<Task, S>;

impl<S: SlotStorage> CollectionStore<Task, S> {
    /// Opens the task store, seeding the slot on first use.
    pub async fn open(
        namespace: &str,
        storage: S,
        latency: Arc<dyn Latency>,
    ) -> Result<Self, DataStoreError> {
        let store = Self::new(
            namespace,
            storage,
            latency,
            LatencyProfile::tasks(),
            seed::default_tasks(),
        );
        store.initialize().await?;
        Ok(store)
    }

    /// Tasks whose `category_id` matches exactly, in stored order.
    /// Unknown categories just yield an empty result.
    pub async fn get_by_category(&self, category_id: &str) -> Result<Vec<Task>, DataStoreError> {
        self.get_filtered(|task| task.category_id == category_id).await
    }
}
