use crate::core::config::DatabaseConfig;
use crate::core::error::AppError;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Convert a database error, turning unique constraint violations (SQLSTATE 23505)
/// into `AppError::AlreadyExists` built by `on_unique`
pub fn map_db_error<F>(e: sqlx::Error, on_unique: F) -> AppError
where
    F: FnOnce() -> String,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::AlreadyExists(on_unique());
        }
    }

    tracing::error!("Database error: {:?}", e);
    AppError::Database(e)
}
