use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

use super::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// A single to-do item. Wire field names (`Id` / `id` / camelCase) match
/// the persisted collection layout.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Task {
    #[serde(rename = "Id")]
    pub numeric_id: u32,
    #[serde(rename = "id")]
    pub slug_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(rename = "dueDate", default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(rename = "categoryId", default)]
    pub category_id: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Fields accepted on create. Identity and completion state are assigned
/// by the store.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
    pub category_id: String,
}

/// Partial update. `None` leaves a field untouched; the nested options
/// can clear the nullable fields. Flipping `completed` does NOT touch
/// `completed_at`, that pairing is the caller's responsibility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub category_id: Option<String>,
    pub completed: Option<bool>,
    pub completed_at: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    pub fn completed(value: bool) -> Self {
        Self {
            completed: Some(value),
            ..Self::default()
        }
    }
}

impl Record for Task {
    const ENTITY: &'static str = "Task";
    const SLUG_PREFIX: &'static str = "task";
    const SLOT_SUFFIX: &'static str = "tasks";

    type Draft = NewTask;
    type Patch = TaskPatch;

    fn numeric_id(&self) -> u32 {
        self.numeric_id
    }

    fn slug_id(&self) -> &str {
        &self.slug_id
    }

    fn build(numeric_id: u32, slug_id: String, draft: NewTask, now: DateTime<Utc>) -> Self {
        Self {
            numeric_id,
            slug_id,
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            due_date: draft.due_date,
            category_id: draft.category_id,
            completed: false,
            created_at: now,
            completed_at: None,
        }
    }

    fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(completed_at) = patch.completed_at {
            self.completed_at = completed_at;
        }
    }
}
