#[cfg(test)]
mod tests {

    use std::sync::Arc;

    use chrono::Utc;

    use crate::config::{testdata, StorageConfig};
    use crate::datastore::{CategoryStore, FileSlotStorage, TaskStore};
    use crate::latency::NoLatency;
    use crate::model::{NewCategory, NewTask, Priority, TaskPatch};

    #[tokio::test]
    async fn test_e2e_task_lifecycle_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            dir: dir.path().to_owned(),
            namespace: testdata::test_config().storage.namespace,
        };
        let namespace = config.namespace.as_str();

        // first open seeds both collections
        let tasks = TaskStore::open(
            namespace,
            FileSlotStorage::from_config(&config),
            Arc::new(NoLatency),
        )
        .await
        .unwrap();
        let categories = CategoryStore::open(
            namespace,
            FileSlotStorage::from_config(&config),
            Arc::new(NoLatency),
        )
        .await
        .unwrap();

        let seeded = tasks.get_all().await.unwrap().len();
        assert!(seeded > 0);

        // create a category, file a task under it, complete the task the
        // way a caller is expected to: flag and timestamp together
        let inbox = categories
            .create(NewCategory {
                name: "Inbox".into(),
                color: "#3B82F6".into(),
                icon: "Inbox".into(),
            })
            .await
            .unwrap();

        let task = tasks
            .create(NewTask {
                title: "triage the inbox".into(),
                priority: Priority::High,
                category_id: inbox.slug_id.clone(),
                ..NewTask::default()
            })
            .await
            .unwrap();

        let done_at = Utc::now();
        tasks
            .update(
                &task.slug_id,
                TaskPatch {
                    completed: Some(true),
                    completed_at: Some(Some(done_at)),
                    ..TaskPatch::default()
                },
            )
            .await
            .unwrap();

        // a fresh store over the same directory sees the persisted state,
        // and its initialize is a no-op against the populated slot
        let reopened = TaskStore::open(
            namespace,
            FileSlotStorage::from_config(&config),
            Arc::new(NoLatency),
        )
        .await
        .unwrap();

        let all = reopened.get_all().await.unwrap();
        assert_eq!(all.len(), seeded + 1);

        let fetched = reopened.get_by_id(task.numeric_id).await.unwrap();
        assert!(fetched.completed);
        assert_eq!(fetched.completed_at, Some(done_at));

        let in_inbox = reopened.get_by_category(&inbox.slug_id).await.unwrap();
        assert_eq!(in_inbox.len(), 1);
        assert_eq!(in_inbox[0].slug_id, task.slug_id);

        // deleting the category leaves the task dangling, by contract
        categories.delete(&inbox.slug_id).await.unwrap();
        let orphan = reopened.get_by_id(task.numeric_id).await.unwrap();
        assert_eq!(orphan.category_id, inbox.slug_id);
    }
}
