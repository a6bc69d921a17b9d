use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

use super::record::Record;

/// A task category. `color` is a CSS color string and `icon` an icon
/// identifier; both are opaque to the store.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Category {
    #[serde(rename = "Id")]
    pub numeric_id: u32,
    #[serde(rename = "id")]
    pub slug_id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

impl Record for Category {
    const ENTITY: &'static str = "Category";
    const SLUG_PREFIX: &'static str = "category";
    const SLOT_SUFFIX: &'static str = "categories";

    type Draft = NewCategory;
    type Patch = CategoryPatch;

    fn numeric_id(&self) -> u32 {
        self.numeric_id
    }

    fn slug_id(&self) -> &str {
        &self.slug_id
    }

    fn build(numeric_id: u32, slug_id: String, draft: NewCategory, now: DateTime<Utc>) -> Self {
        Self {
            numeric_id,
            slug_id,
            name: draft.name,
            color: draft.color,
            icon: draft.icon,
            created_at: now,
        }
    }

    fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
    }
}
