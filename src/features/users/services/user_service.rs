use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserResponseDto};
use crate::features::users::models::{NewUser, User};
use crate::features::users::repositories::UserRepository;
use crate::shared::password::PasswordHasher;

/// Service for user accounts
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self { repository, hasher }
    }

    /// Register a user. The email must not belong to any user, active or not.
    pub async fn create(&self, dto: CreateUserDto) -> Result<UserResponseDto> {
        if self.repository.exists_by_email(&dto.email).await? {
            return Err(AppError::AlreadyExists(format!(
                "User with email {} already exists",
                dto.email
            )));
        }

        let password_hash = self.hasher.hash(&dto.password)?;

        let user = self
            .repository
            .insert(NewUser {
                first_name: dto.first_name,
                last_name: dto.last_name,
                email: dto.email,
                phone_number: dto.phone_number,
                password_hash,
            })
            .await?;

        tracing::info!("User created: id={}", user.id);

        Ok(user.into())
    }

    /// Lookup by id, inactive users included
    pub async fn get_by_id(&self, id: i64) -> Result<UserResponseDto> {
        self.find(id).await.map(Into::into)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<UserResponseDto> {
        self.repository
            .find_active_by_email(email)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("User not found with email: {}", email)))
    }

    pub async fn list_active(&self) -> Result<Vec<UserResponseDto>> {
        let users = self.repository.list_active().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    pub async fn update(&self, id: i64, dto: UpdateUserDto) -> Result<UserResponseDto> {
        let mut user = self.find(id).await?;

        user.first_name = dto.first_name;
        user.last_name = dto.last_name;
        user.phone_number = dto.phone_number;

        let updated = self.save(user).await?;
        tracing::info!("User updated: id={}", updated.id);

        Ok(updated.into())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut user = self.find(id).await?;
        user.deactivate();
        self.save(user).await?;

        tracing::info!("User deactivated: id={}", id);
        Ok(())
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool> {
        self.repository.exists_by_email(email).await
    }

    async fn find(&self, id: i64) -> Result<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn save(&self, user: User) -> Result<User> {
        let id = user.id;
        self.repository
            .update(&user)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("User not found with id: {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::shared::test_helpers::{user_dto, InMemoryUserRepository};

    fn setup() -> (Arc<InMemoryUserRepository>, UserService) {
        let repository = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repository.clone(), PasswordHasher::new());
        (repository, service)
    }

    fn update_dto(first_name: &str, last_name: &str, phone: Option<&str>) -> UpdateUserDto {
        UpdateUserDto {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone_number: phone.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let (repository, service) = setup();
        let dto = user_dto("john.doe@example.com");
        let raw_password = dto.password.clone();

        let created = service.create(dto).await.unwrap();
        assert_eq!(created.email, "john.doe@example.com");
        assert!(created.is_active);

        let stored = repository.find_by_id(created.id).await.unwrap().unwrap();
        assert_ne!(stored.password_hash, raw_password);
        assert!(stored.password_hash.starts_with("$argon2id$"));
        assert!(PasswordHasher::new()
            .verify(&raw_password, &stored.password_hash)
            .unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_fails() {
        let (_, service) = setup();
        service.create(user_dto("jane@example.com")).await.unwrap();

        let result = service.create(user_dto("jane@example.com")).await;
        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_email_of_inactive_user_stays_taken() {
        let (_, service) = setup();
        let created = service.create(user_dto("gone@example.com")).await.unwrap();
        service.delete(created.id).await.unwrap();

        assert!(service.exists_by_email("gone@example.com").await.unwrap());
        let result = service.create(user_dto("gone@example.com")).await;
        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_get_by_email_is_active_only() {
        let (_, service) = setup();
        let created = service.create(user_dto("active@example.com")).await.unwrap();

        let found = service.get_by_email("active@example.com").await.unwrap();
        assert_eq!(found.id, created.id);

        service.delete(created.id).await.unwrap();
        assert!(matches!(
            service.get_by_email("active@example.com").await,
            Err(AppError::NotFound(_))
        ));

        let by_id = service.get_by_id(created.id).await.unwrap();
        assert!(!by_id.is_active);
    }

    #[tokio::test]
    async fn test_list_excludes_inactive_users() {
        let (_, service) = setup();
        let first = service.create(user_dto("a@example.com")).await.unwrap();
        let second = service.create(user_dto("b@example.com")).await.unwrap();
        service.delete(first.id).await.unwrap();

        let users = service.list_active().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, second.id);
    }

    #[tokio::test]
    async fn test_update_keeps_email() {
        let (_, service) = setup();
        let created = service.create(user_dto("keep@example.com")).await.unwrap();

        let updated = service
            .update(created.id, update_dto("Johnny", "Doe", Some("+15550100")))
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Johnny");
        assert_eq!(updated.phone_number.as_deref(), Some("+15550100"));
        assert_eq!(updated.email, "keep@example.com");
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let (_, service) = setup();

        assert!(matches!(service.get_by_id(1).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.update(1, update_dto("A", "B", None)).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(service.delete(1).await, Err(AppError::NotFound(_))));
    }
}
