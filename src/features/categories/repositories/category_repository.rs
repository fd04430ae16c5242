use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, NewCategory};

/// Data access for categories.
///
/// Listings are ordered by id, i.e. insertion order. `insert` and `update`
/// report a duplicate name as `AppError::AlreadyExists`.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> Result<Category>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>>;

    async fn exists_by_name(&self, name: &str) -> Result<bool>;

    async fn list_all(&self) -> Result<Vec<Category>>;

    async fn list_active(&self) -> Result<Vec<Category>>;

    /// Active categories without a parent
    async fn list_roots(&self) -> Result<Vec<Category>>;

    /// Active categories whose parent is `parent_id`
    async fn list_children(&self, parent_id: i64) -> Result<Vec<Category>>;

    /// Persist every mutable column of `category`, returns `None` if the row is gone
    async fn update(&self, category: &Category) -> Result<Option<Category>>;
}

const CATEGORY_COLUMNS: &str =
    "id, name, description, parent_category_id, is_active, created_at, updated_at";

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_list(&self, filter: &str, parent_id: Option<i64>) -> Result<Vec<Category>> {
        let query = format!(
            "SELECT {} FROM categories {} ORDER BY id",
            CATEGORY_COLUMNS, filter
        );

        let mut statement = sqlx::query_as::<_, Category>(&query);
        if let Some(parent_id) = parent_id {
            statement = statement.bind(parent_id);
        }

        statement.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn insert(&self, category: NewCategory) -> Result<Category> {
        let query = format!(
            r#"
            INSERT INTO categories (name, description, parent_category_id)
            VALUES ($1, $2, $3)
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );

        sqlx::query_as::<_, Category>(&query)
            .bind(&category.name)
            .bind(&category.description)
            .bind(category.parent_category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                map_db_error(e, || {
                    format!("Category with name {} already exists", category.name)
                })
            })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        let query = format!("SELECT {} FROM categories WHERE id = $1", CATEGORY_COLUMNS);

        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category by id: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        let query = format!("SELECT {} FROM categories WHERE name = $1", CATEGORY_COLUMNS);

        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category by name: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<Category>> {
        self.fetch_list("", None).await
    }

    async fn list_active(&self) -> Result<Vec<Category>> {
        self.fetch_list("WHERE is_active = TRUE", None).await
    }

    async fn list_roots(&self) -> Result<Vec<Category>> {
        self.fetch_list("WHERE parent_category_id IS NULL AND is_active = TRUE", None)
            .await
    }

    async fn list_children(&self, parent_id: i64) -> Result<Vec<Category>> {
        self.fetch_list(
            "WHERE parent_category_id = $1 AND is_active = TRUE",
            Some(parent_id),
        )
        .await
    }

    async fn update(&self, category: &Category) -> Result<Option<Category>> {
        let query = format!(
            r#"
            UPDATE categories
            SET name = $1,
                description = $2,
                parent_category_id = $3,
                is_active = $4,
                updated_at = NOW()
            WHERE id = $5
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );

        sqlx::query_as::<_, Category>(&query)
            .bind(&category.name)
            .bind(&category.description)
            .bind(category.parent_category_id)
            .bind(category.is_active())
            .bind(category.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                map_db_error(e, || {
                    format!("Category with name {} already exists", category.name)
                })
            })
    }
}
