use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::{Category, NewCategory};
use crate::features::categories::repositories::CategoryRepository;

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// Create a category; the name must not be used by any category, active or not
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        if self.repository.exists_by_name(&dto.name).await? {
            return Err(AppError::AlreadyExists(format!(
                "Category with name {} already exists",
                dto.name
            )));
        }

        let category = self
            .repository
            .insert(NewCategory {
                name: dto.name,
                description: dto.description,
                parent_category_id: dto.parent_category_id,
            })
            .await?;

        tracing::info!(
            "Category created: id={}, name={}, parent={:?}",
            category.id,
            category.name,
            category.parent_category_id
        );

        Ok(category.into())
    }

    /// Get category by id, including inactive ones
    pub async fn get_by_id(&self, id: i64) -> Result<CategoryResponseDto> {
        self.find(id).await.map(Into::into)
    }

    /// Get category by exact name, including inactive ones
    pub async fn get_by_name(&self, name: &str) -> Result<CategoryResponseDto> {
        self.repository
            .find_by_name(name)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Category not found with name: {}", name)))
    }

    pub async fn list_all(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.list_all().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn list_active(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.list_active().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Active categories without a parent
    pub async fn list_roots(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.list_roots().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Active direct children of `parent_id`. The parent itself may be inactive
    /// or missing, in which case this is just an empty or orphaned listing.
    pub async fn list_subcategories(&self, parent_id: i64) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.list_children(parent_id).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Replace name, description and parent.
    ///
    /// Renaming onto a name held by another category is rejected with
    /// `AlreadyExists`. Parent assignment is not checked for cycles.
    pub async fn update(&self, id: i64, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let mut category = self.find(id).await?;

        if category.name != dto.name && self.repository.exists_by_name(&dto.name).await? {
            return Err(AppError::AlreadyExists(format!(
                "Category with name {} already exists",
                dto.name
            )));
        }

        category.name = dto.name;
        category.description = dto.description;
        category.parent_category_id = dto.parent_category_id;

        let updated = self.save(category).await?;
        tracing::info!("Category updated: id={}", updated.id);

        Ok(updated.into())
    }

    /// Soft delete. Children are left untouched.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut category = self.find(id).await?;
        category.deactivate();
        self.save(category).await?;

        tracing::info!("Category deactivated: id={}", id);
        Ok(())
    }

    pub async fn exists_by_name(&self, name: &str) -> Result<bool> {
        self.repository.exists_by_name(name).await
    }

    async fn find(&self, id: i64) -> Result<Category> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn save(&self, category: Category) -> Result<Category> {
        let id = category.id;
        self.repository
            .update(&category)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Category not found with id: {}", id))
}
