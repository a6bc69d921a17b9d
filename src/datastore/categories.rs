use std::sync::Arc;

use crate::config::LatencyProfile;
use crate::latency::Latency;
use crate::model::Category;
use crate::seed;

use super::collection::CollectionStore;
use super::error::DataStoreError;
use super::storage::SlotStorage;

/// The category collection. No queries beyond the generic contract.
pub type CategoryStore<S> = CollectionStore<Category, S>;

impl<S: SlotStorage> CollectionStore<Category, S> {
    /// Opens the category store, seeding the slot on first use.
    pub async fn open(
        namespace: &str,
        storage: S,
        latency: Arc<dyn Latency>,
    ) -> Result<Self, DataStoreError> {
        let store = Self::new(
            namespace,
            storage,
            latency,
            LatencyProfile::categories(),
            seed::default_categories(),
        );
        store.initialize().await?;
        Ok(store)
    }
}
