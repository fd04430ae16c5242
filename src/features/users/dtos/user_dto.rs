use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::validate_not_blank;

/// Request DTO for registering a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(
        length(max = 50, message = "First name must not exceed 50 characters"),
        custom(function = "validate_not_blank", message = "First name is required")
    )]
    pub first_name: String,

    #[validate(
        length(max = 50, message = "Last name must not exceed 50 characters"),
        custom(function = "validate_not_blank", message = "Last name is required")
    )]
    pub last_name: String,

    #[validate(
        email(message = "Please provide a valid email"),
        length(max = 255, message = "Email must not exceed 255 characters")
    )]
    pub email: String,

    #[validate(length(max = 15, message = "Phone number must not exceed 15 characters"))]
    pub phone_number: Option<String>,

    /// Hashed before storage, never returned
    #[validate(length(
        min = 8,
        max = 128,
        message = "Password must be between 8 and 128 characters"
    ))]
    #[schema(format = Password, example = "s3cret-pass")]
    pub password: String,
}

/// Request DTO for updating a user. Email and password cannot be changed here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(
        length(max = 50, message = "First name must not exceed 50 characters"),
        custom(function = "validate_not_blank", message = "First name is required")
    )]
    pub first_name: String,

    #[validate(
        length(max = 50, message = "Last name must not exceed 50 characters"),
        custom(function = "validate_not_blank", message = "Last name is required")
    )]
    pub last_name: String,

    #[validate(length(max = 15, message = "Phone number must not exceed 15 characters"))]
    pub phone_number: Option<String>,
}

/// Response DTO for user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub is_active: bool,
}
