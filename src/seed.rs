//! Bundled default datasets used to populate a collection slot the first
//! time a store is opened.

use chrono::{Duration, Utc};

use crate::model::{Category, Priority, Task};

pub fn default_categories() -> Vec<Category> {
    let now = Utc::now();
    let category = |numeric_id: u32, name: &str, color: &str, icon: &str| Category {
        numeric_id,
        slug_id: format!("category-{}", numeric_id),
        name: name.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
        created_at: now,
    };

    vec![
        category(1, "Work", "#5B21B6", "Briefcase"),
        category(2, "Personal", "#10B981", "User"),
        category(3, "Shopping", "#F59E0B", "ShoppingCart"),
        category(4, "Health", "#EF4444", "Heart"),
    ]
}

pub fn default_tasks() -> Vec<Task> {
    let now = Utc::now();
    let task = |numeric_id: u32, title: &str, priority: Priority, category_id: &str| Task {
        numeric_id,
        slug_id: format!("task-{}", numeric_id),
        title: title.to_string(),
        description: None,
        priority,
        due_date: None,
        category_id: category_id.to_string(),
        completed: false,
        created_at: now,
        completed_at: None,
    };

    let mut tasks = vec![
        task(1, "Review quarterly report", Priority::High, "category-1"),
        task(2, "Prepare slides for Monday standup", Priority::Medium, "category-1"),
        task(3, "Book dentist appointment", Priority::Medium, "category-4"),
        task(4, "Buy groceries for the week", Priority::Low, "category-3"),
        task(5, "Call the bank about the new card", Priority::High, "category-2"),
        task(6, "Water the plants", Priority::Low, "category-2"),
    ];

    tasks[0].due_date = Some(now + Duration::days(2));
    tasks[1].due_date = Some(now + Duration::days(4));
    tasks[3].due_date = Some(now + Duration::days(1));
    tasks[1].description = Some("Three slides max, focus on the blockers.".to_string());

    // one item arrives already done so the completed view is never empty
    tasks[5].completed = true;
    tasks[5].completed_at = Some(now);

    tasks
}
