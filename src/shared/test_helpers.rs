//! In-memory repositories and DTO builders for service and handler tests.
//!
//! The repositories keep rows in insertion order and enforce the same unique
//! keys as the database schema, so services see identical error behavior.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CreateCategoryDto;
use crate::features::categories::models::{Category, NewCategory};
use crate::features::categories::repositories::CategoryRepository;
use crate::features::products::dtos::{CreateProductDto, UpdateProductDto};
use crate::features::products::models::{NewProduct, Product};
use crate::features::products::repositories::ProductRepository;
use crate::features::users::dtos::CreateUserDto;
use crate::features::users::models::{NewUser, User};
use crate::features::users::repositories::UserRepository;
use crate::shared::lifecycle::Lifecycle;

struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn select<T: Clone>(rows: &[T], predicate: impl Fn(&T) -> bool) -> Vec<T> {
    rows.iter().filter(|row| predicate(row)).cloned().collect()
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    table: RwLock<Table<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn insert(&self, category: NewCategory) -> Result<Category> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|c| c.name == category.name) {
            return Err(AppError::AlreadyExists(format!(
                "Category with name {} already exists",
                category.name
            )));
        }

        let now = Utc::now();
        let row = Category {
            id: table.allocate_id(),
            name: category.name,
            description: category.description,
            parent_category_id: category.parent_category_id,
            lifecycle: Lifecycle::Active,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|c| c.name == name).cloned())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        let table = self.table.read().await;
        Ok(table.rows.iter().any(|c| c.name == name))
    }

    async fn list_all(&self) -> Result<Vec<Category>> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn list_active(&self) -> Result<Vec<Category>> {
        let table = self.table.read().await;
        Ok(select(&table.rows, |c| c.is_active()))
    }

    async fn list_roots(&self) -> Result<Vec<Category>> {
        let table = self.table.read().await;
        Ok(select(&table.rows, |c| {
            c.parent_category_id.is_none() && c.is_active()
        }))
    }

    async fn list_children(&self, parent_id: i64) -> Result<Vec<Category>> {
        let table = self.table.read().await;
        Ok(select(&table.rows, |c| {
            c.parent_category_id == Some(parent_id) && c.is_active()
        }))
    }

    async fn update(&self, category: &Category) -> Result<Option<Category>> {
        let mut table = self.table.write().await;
        if table
            .rows
            .iter()
            .any(|c| c.id != category.id && c.name == category.name)
        {
            return Err(AppError::AlreadyExists(format!(
                "Category with name {} already exists",
                category.name
            )));
        }

        let Some(row) = table.rows.iter_mut().find(|c| c.id == category.id) else {
            return Ok(None);
        };
        *row = Category {
            updated_at: Utc::now(),
            ..category.clone()
        };
        Ok(Some(row.clone()))
    }
}

pub fn category_dto(name: &str, parent_category_id: Option<i64>) -> CreateCategoryDto {
    CreateCategoryDto {
        name: name.to_string(),
        description: None,
        parent_category_id,
    }
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryProductRepository {
    table: RwLock<Table<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn active_where(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Product> {
        let table = self.table.read().await;
        select(&table.rows, |p| p.is_active() && predicate(p))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: NewProduct) -> Result<Product> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|p| p.sku == product.sku) {
            return Err(AppError::AlreadyExists(format!(
                "Product with SKU {} already exists",
                product.sku
            )));
        }

        let now = Utc::now();
        let row = Product {
            id: table.allocate_id(),
            name: product.name,
            description: product.description,
            price: product.price,
            sku: product.sku,
            category_id: product.category_id,
            brand: product.brand,
            stock_quantity: product.stock_quantity,
            weight: product.weight,
            dimensions: product.dimensions,
            color: product.color,
            size: product.size,
            lifecycle: Lifecycle::Active,
            is_featured: false,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|p| p.sku == sku).cloned())
    }

    async fn exists_by_sku(&self, sku: &str) -> Result<bool> {
        let table = self.table.read().await;
        Ok(table.rows.iter().any(|p| p.sku == sku))
    }

    async fn list_all(&self) -> Result<Vec<Product>> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn list_active(&self) -> Result<Vec<Product>> {
        Ok(self.active_where(|_| true).await)
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Product>> {
        Ok(self
            .active_where(|p| p.category_id == Some(category_id))
            .await)
    }

    async fn list_featured(&self) -> Result<Vec<Product>> {
        Ok(self.active_where(|p| p.is_featured).await)
    }

    async fn list_by_brand(&self, brand: &str) -> Result<Vec<Product>> {
        Ok(self
            .active_where(|p| p.brand.as_deref() == Some(brand))
            .await)
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Product>> {
        let needle = fragment.to_lowercase();
        Ok(self
            .active_where(|p| p.name.to_lowercase().contains(&needle))
            .await)
    }

    async fn list_by_price_range(&self, min: Decimal, max: Decimal) -> Result<Vec<Product>> {
        Ok(self
            .active_where(|p| p.price >= min && p.price <= max)
            .await)
    }

    async fn list_in_stock(&self) -> Result<Vec<Product>> {
        Ok(self.active_where(|p| p.stock_quantity > 0).await)
    }

    async fn list_out_of_stock(&self) -> Result<Vec<Product>> {
        Ok(self.active_where(|p| p.stock_quantity == 0).await)
    }

    async fn update(&self, product: &Product) -> Result<Option<Product>> {
        let mut table = self.table.write().await;
        let Some(row) = table.rows.iter_mut().find(|p| p.id == product.id) else {
            return Ok(None);
        };
        // sku is immutable once stored
        *row = Product {
            sku: row.sku.clone(),
            updated_at: Utc::now(),
            ..product.clone()
        };
        Ok(Some(row.clone()))
    }
}

pub fn product_dto(name: &str, price: Decimal, sku: &str) -> CreateProductDto {
    CreateProductDto {
        name: name.to_string(),
        description: None,
        price,
        sku: sku.to_string(),
        category_id: None,
        brand: None,
        stock_quantity: None,
        weight: None,
        dimensions: None,
        color: None,
        size: None,
    }
}

/// Update body carrying the same values as a create body, not featured
pub fn update_from(dto: &CreateProductDto) -> UpdateProductDto {
    UpdateProductDto {
        name: dto.name.clone(),
        description: dto.description.clone(),
        price: dto.price,
        category_id: dto.category_id,
        brand: dto.brand.clone(),
        stock_quantity: dto.stock_quantity,
        weight: dto.weight,
        dimensions: dto.dimensions.clone(),
        color: dto.color.clone(),
        size: dto.size.clone(),
        is_featured: None,
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|u| u.email == user.email) {
            return Err(AppError::AlreadyExists(format!(
                "User with email {} already exists",
                user.email
            )));
        }

        let now = Utc::now();
        let row = User {
            id: table.allocate_id(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone_number: user.phone_number,
            password_hash: user.password_hash,
            lifecycle: Lifecycle::Active,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.id == id).cloned())
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<User>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .find(|u| u.email == email && u.is_active())
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        let table = self.table.read().await;
        Ok(table.rows.iter().any(|u| u.email == email))
    }

    async fn list_active(&self) -> Result<Vec<User>> {
        let table = self.table.read().await;
        Ok(select(&table.rows, |u| u.is_active()))
    }

    async fn update(&self, user: &User) -> Result<Option<User>> {
        let mut table = self.table.write().await;
        let Some(row) = table.rows.iter_mut().find(|u| u.id == user.id) else {
            return Ok(None);
        };
        row.first_name = user.first_name.clone();
        row.last_name = user.last_name.clone();
        row.phone_number = user.phone_number.clone();
        row.lifecycle = user.lifecycle;
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }
}

pub fn user_dto(email: &str) -> CreateUserDto {
    CreateUserDto {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        phone_number: None,
        password: "password123".to_string(),
    }
}
