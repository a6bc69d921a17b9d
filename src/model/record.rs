use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

/// Identity scheme shared by every persisted collection: a numeric id
/// for ordering and lookup-by-id, and a slug (`"<prefix>-<numeric>"`)
/// used as the mutation key.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Entity label as it appears in error messages ("Task not found").
    const ENTITY: &'static str;
    /// Slug prefix; prefix "task" yields slugs like "task-7".
    const SLUG_PREFIX: &'static str;
    /// Suffix of the storage slot name, e.g. "tasks" in "taskflow_tasks".
    const SLOT_SUFFIX: &'static str;

    type Draft: Send;
    type Patch: Send;

    fn numeric_id(&self) -> u32;
    fn slug_id(&self) -> &str;

    /// Assemble a record from assigned identity plus draft fields.
    fn build(numeric_id: u32, slug_id: String, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Shallow merge: set the fields present in the patch, leave the rest.
    fn apply(&mut self, patch: Self::Patch);

    fn slug_for(numeric_id: u32) -> String {
        format!("{}-{}", Self::SLUG_PREFIX, numeric_id)
    }
}
