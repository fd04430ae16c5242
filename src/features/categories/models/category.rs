use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::categories::dtos::CategoryResponseDto;
use crate::shared::lifecycle::Lifecycle;

/// Database model for category
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Weak reference to another category; never checked for existence or cycles
    pub parent_category_id: Option<i64>,
    #[sqlx(rename = "is_active", try_from = "bool")]
    pub lifecycle: Lifecycle,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when inserting a category; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub parent_category_id: Option<i64>,
}

impl Category {
    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    pub fn deactivate(&mut self) {
        self.lifecycle = self.lifecycle.deactivate();
    }
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            is_active: c.is_active(),
            name: c.name,
            description: c.description,
            parent_category_id: c.parent_category_id,
        }
    }
}
