use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::users::dtos::UserResponseDto;
use crate::shared::lifecycle::Lifecycle;

/// Database model for user
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    /// Argon2id PHC string, never the raw password
    pub password_hash: String,
    #[sqlx(rename = "is_active", try_from = "bool")]
    pub lifecycle: Lifecycle,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub password_hash: String,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    pub fn deactivate(&mut self) {
        self.lifecycle = self.lifecycle.deactivate();
    }
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            is_active: u.is_active(),
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            phone_number: u.phone_number,
        }
    }
}
