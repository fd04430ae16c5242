use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::users::models::{NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `AppError::AlreadyExists` on a taken email
    async fn insert(&self, user: NewUser) -> Result<User>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    /// Active users only
    async fn find_active_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn exists_by_email(&self, email: &str) -> Result<bool>;

    /// Active users ordered by id
    async fn list_active(&self) -> Result<Vec<User>>;

    async fn update(&self, user: &User) -> Result<Option<User>>;
}

const USER_COLUMNS: &str = "id, first_name, last_name, email, phone_number, password_hash, \
     is_active, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User> {
        let query = format!(
            r#"
            INSERT INTO users (first_name, last_name, email, phone_number, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&query)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(&user.phone_number)
            .bind(&user.password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, || format!("User with email {} already exists", user.email)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);

        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get user by id: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<User>> {
        let query = format!(
            "SELECT {} FROM users WHERE email = $1 AND is_active = TRUE",
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get user by email: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_active(&self) -> Result<Vec<User>> {
        let query = format!(
            "SELECT {} FROM users WHERE is_active = TRUE ORDER BY id",
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list users: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn update(&self, user: &User) -> Result<Option<User>> {
        let query = format!(
            r#"
            UPDATE users
            SET first_name = $1,
                last_name = $2,
                phone_number = $3,
                is_active = $4,
                updated_at = NOW()
            WHERE id = $5
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&query)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.phone_number)
            .bind(user.is_active())
            .bind(user.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update user: {:?}", e);
                AppError::Database(e)
            })
    }
}
