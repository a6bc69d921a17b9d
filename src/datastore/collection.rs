use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::config::LatencyProfile;
use crate::latency::Latency;
use crate::model::Record;

use super::error::DataStoreError;
use super::storage::SlotStorage;

/// CRUD over one named, JSON-persisted collection of records.
///
/// Every operation is a full read-modify-write of the slot, so interleaved
/// mutations are last-writer-wins on the whole collection. Records are
/// value-copied in and out.
pub struct CollectionStore<R, S> {
    slot: String,
    storage: S,
    latency: Arc<dyn Latency>,
    profile: LatencyProfile,
    seed: Vec<R>,
}

impl<R, S> CollectionStore<R, S>
where
    R: Record,
    S: SlotStorage,
{
    pub fn new(
        namespace: &str,
        storage: S,
        latency: Arc<dyn Latency>,
        profile: LatencyProfile,
        seed: Vec<R>,
    ) -> Self {
        Self {
            slot: format!("{}_{}", namespace, R::SLOT_SUFFIX),
            storage,
            latency,
            profile,
            seed,
        }
    }

    /// Storage slot this store owns, e.g. `taskflow_tasks`.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Seeds the slot on first use. Idempotent; a collection that was
    /// explicitly emptied to `[]` is not re-seeded.
    pub async fn initialize(&self) -> Result<(), DataStoreError> {
        let existing = self.storage.read(&self.slot).await?;
        if existing.map_or(true, |payload| payload.trim().is_empty()) {
            info!(
                slot = %self.slot,
                records = self.seed.len(),
                "seeding empty collection slot"
            );
            self.persist(&self.seed).await?;
        }
        Ok(())
    }

    /// Full copy of the collection in stored order. An unseeded slot
    /// reads as empty, not as an error.
    pub async fn get_all(&self) -> Result<Vec<R>, DataStoreError> {
        self.latency.wait(self.profile.get_all).await;
        self.load().await
    }

    pub async fn get_by_id(&self, numeric_id: u32) -> Result<R, DataStoreError> {
        self.latency.wait(self.profile.get_by_id).await;
        let items = self.load().await?;
        items
            .into_iter()
            .find(|item| item.numeric_id() == numeric_id)
            .ok_or(DataStoreError::NotFound(R::ENTITY))
    }

    /// Next id is `max(existing, 0) + 1`, so ids restart at 1 after a
    /// full deletion.
    pub async fn create(&self, draft: R::Draft) -> Result<R, DataStoreError> {
        self.latency.wait(self.profile.create).await;
        let mut items = self.load().await?;
        let max_id = items.iter().map(Record::numeric_id).max().unwrap_or(0);
        let numeric_id = max_id + 1;
        let record = R::build(numeric_id, R::slug_for(numeric_id), draft, Utc::now());
        items.push(record.clone());
        self.persist(&items).await?;
        debug!(slot = %self.slot, slug = record.slug_id(), "record created");
        Ok(record)
    }

    /// Lookup is by slug, not numeric id. Shallow merge; the slot is only
    /// written after a successful match.
    pub async fn update(&self, slug_id: &str, patch: R::Patch) -> Result<R, DataStoreError> {
        self.latency.wait(self.profile.update).await;
        let mut items = self.load().await?;
        let item = items
            .iter_mut()
            .find(|item| item.slug_id() == slug_id)
            .ok_or(DataStoreError::NotFound(R::ENTITY))?;
        item.apply(patch);
        let updated = item.clone();
        self.persist(&items).await?;
        debug!(slot = %self.slot, slug = slug_id, "record updated");
        Ok(updated)
    }

    /// Removes by slug and returns the removed record.
    pub async fn delete(&self, slug_id: &str) -> Result<R, DataStoreError> {
        self.latency.wait(self.profile.delete).await;
        let mut items = self.load().await?;
        let index = items
            .iter()
            .position(|item| item.slug_id() == slug_id)
            .ok_or(DataStoreError::NotFound(R::ENTITY))?;
        let removed = items.remove(index);
        self.persist(&items).await?;
        debug!(slot = %self.slot, slug = slug_id, "record deleted");
        Ok(removed)
    }

    // shares the get_all latency class
    pub(crate) async fn get_filtered<F>(&self, keep: F) -> Result<Vec<R>, DataStoreError>
    where
        F: Fn(&R) -> bool,
    {
        self.latency.wait(self.profile.get_all).await;
        let items = self.load().await?;
        Ok(items.into_iter().filter(|item| keep(item)).collect())
    }

    pub(crate) async fn load(&self) -> Result<Vec<R>, DataStoreError> {
        match self.storage.read(&self.slot).await? {
            Some(payload) if !payload.trim().is_empty() => {
                Ok(serde_json::from_str(&payload)?)
            }
            _ => Ok(Vec::new()),
        }
    }

    async fn persist(&self, items: &[R]) -> Result<(), DataStoreError> {
        let payload = serde_json::to_string(items)?;
        self.storage.write(&self.slot, &payload).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datastore::storage::MemorySlotStorage;
    use crate::latency::NoLatency;
    use crate::model::{NewTask, Task};

    fn empty_store() -> CollectionStore<Task, MemorySlotStorage> {
        CollectionStore::new(
            "taskflow",
            MemorySlotStorage::new(),
            Arc::new(NoLatency),
            LatencyProfile::zero(),
            Vec::new(),
        )
    }

    fn draft(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            ..NewTask::default()
        }
    }

    #[tokio::test]
    async fn test_slot_name_from_namespace() {
        let store = empty_store();
        assert_eq!(store.slot(), "taskflow_tasks");
    }

    #[tokio::test]
    async fn test_get_all_on_unseeded_slot_is_empty() {
        // GIVEN
        let store = empty_store();

        // WHEN
        let items = store.get_all().await.unwrap();

        // THEN
        assert!(items.is_empty(), "empty storage yields empty sequence");
    }

    #[tokio::test]
    async fn test_create_assigns_monotonic_ids() {
        // GIVEN
        let store = empty_store();

        // WHEN
        let first = store.create(draft("A")).await.unwrap();
        let second = store.create(draft("B")).await.unwrap();

        // THEN
        assert_eq!(first.numeric_id, 1);
        assert_eq!(first.slug_id, "task-1");
        assert_eq!(second.numeric_id, 2);
        assert_eq!(second.slug_id, "task-2");
    }

    #[tokio::test]
    async fn test_id_derives_from_max_of_remaining_records() {
        // GIVEN
        let store = empty_store();
        store.create(draft("A")).await.unwrap();
        let b = store.create(draft("B")).await.unwrap();

        // WHEN the record with the max id is removed
        store.delete(&b.slug_id).await.unwrap();
        let c = store.create(draft("C")).await.unwrap();

        // THEN its id is reused
        assert_eq!(c.numeric_id, 2);

        // WHEN every record is deleted
        store.delete("task-1").await.unwrap();
        store.delete("task-2").await.unwrap();
        let restart = store.create(draft("D")).await.unwrap();

        // THEN ids restart at 1
        assert_eq!(restart.numeric_id, 1);
        assert_eq!(restart.slug_id, "task-1");
    }

    #[tokio::test]
    async fn test_create_then_get_by_id_roundtrip() {
        // GIVEN
        let store = empty_store();

        // WHEN
        let created = store.create(draft("roundtrip")).await.unwrap();
        let fetched = store.get_by_id(created.numeric_id).await.unwrap();

        // THEN
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_not_found() {
        let store = empty_store();
        let err = store.get_by_id(42).await.unwrap_err();
        assert_eq!(err.to_string(), "Task not found");
    }

    #[tokio::test]
    async fn test_update_missing_slug_leaves_collection_unchanged() {
        // GIVEN
        let store = empty_store();
        store.create(draft("A")).await.unwrap();
        let before = store.get_all().await.unwrap();

        // WHEN
        let err = store
            .update("task-99", Default::default())
            .await
            .unwrap_err();

        // THEN
        assert!(matches!(err, DataStoreError::NotFound("Task")));
        assert_eq!(store.get_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        // GIVEN
        let store = empty_store();
        store.create(draft("A")).await.unwrap();
        let b = store.create(draft("B")).await.unwrap();
        store.create(draft("C")).await.unwrap();

        // WHEN
        let removed = store.delete("task-2").await.unwrap();

        // THEN
        assert_eq!(removed, b);
        let remaining = store.get_all().await.unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|t| t.slug_id != "task-2"));

        // WHEN deleting again
        let err = store.delete("task-2").await.unwrap_err();

        // THEN
        assert!(matches!(err, DataStoreError::NotFound("Task")));
    }

    #[tokio::test]
    async fn test_initialize_seeds_once() {
        // GIVEN a store with a one-record seed
        let seeded = Task::build(1, Task::slug_for(1), draft("seeded"), Utc::now());
        let store = CollectionStore::new(
            "taskflow",
            MemorySlotStorage::new(),
            Arc::new(NoLatency),
            LatencyProfile::zero(),
            vec![seeded],
        );

        // WHEN
        store.initialize().await.unwrap();
        store.create(draft("mine")).await.unwrap();
        store.initialize().await.unwrap();

        // THEN the second initialize neither duplicates nor resets
        let items = store.get_all().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "seeded");
        assert_eq!(items[1].title, "mine");
    }

    #[tokio::test]
    async fn test_initialize_does_not_resurrect_emptied_collection() {
        // GIVEN
        let seeded = Task::build(1, Task::slug_for(1), draft("seeded"), Utc::now());
        let store = CollectionStore::new(
            "taskflow",
            MemorySlotStorage::new(),
            Arc::new(NoLatency),
            LatencyProfile::zero(),
            vec![seeded],
        );
        store.initialize().await.unwrap();

        // WHEN the only record is deleted and initialize runs again
        store.delete("task-1").await.unwrap();
        store.initialize().await.unwrap();

        // THEN the explicit empty collection stays empty
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_all_preserves_insertion_order() {
        // GIVEN
        let store = empty_store();
        for title in ["first", "second", "third"] {
            store.create(draft(title)).await.unwrap();
        }

        // WHEN
        let items = store.get_all().await.unwrap();

        // THEN
        let titles: Vec<_> = items.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_corrupt_payload_is_reported() {
        // GIVEN
        let storage = MemorySlotStorage::new();
        storage.write("taskflow_tasks", "not json").await.unwrap();
        let store = CollectionStore::<Task, _>::new(
            "taskflow",
            storage,
            Arc::new(NoLatency),
            LatencyProfile::zero(),
            Vec::new(),
        );

        // WHEN
        let err = store.get_all().await.unwrap_err();

        // THEN
        assert!(matches!(err, DataStoreError::Payload(_)));
    }
}
