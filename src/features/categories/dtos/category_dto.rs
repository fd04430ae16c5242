use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::validate_not_blank;

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    #[validate(
        length(max = 100, message = "Category name must not exceed 100 characters"),
        custom(function = "validate_not_blank", message = "Category name is required")
    )]
    pub name: String,

    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,

    /// Parent category id; not checked for existence
    pub parent_category_id: Option<i64>,
}

/// Request DTO for updating a category.
///
/// All mutable fields are replaced: omitting `description` or
/// `parentCategoryId` clears them.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    #[validate(
        length(max = 100, message = "Category name must not exceed 100 characters"),
        custom(function = "validate_not_blank", message = "Category name is required")
    )]
    pub name: String,

    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,

    pub parent_category_id: Option<i64>,
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub parent_category_id: Option<i64>,
    pub is_active: bool,
}
