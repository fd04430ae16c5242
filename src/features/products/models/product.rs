use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::features::products::dtos::ProductResponseDto;
use crate::shared::lifecycle::Lifecycle;

/// Database model for product
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    /// Unique and immutable once created
    pub sku: String,
    /// Weak reference to a category; never checked for existence
    pub category_id: Option<i64>,
    pub brand: Option<String>,
    pub stock_quantity: i32,
    pub weight: Option<Decimal>,
    pub dimensions: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    #[sqlx(rename = "is_active", try_from = "bool")]
    pub lifecycle: Lifecycle,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when inserting a product; the store assigns id and flags
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub sku: String,
    pub category_id: Option<i64>,
    pub brand: Option<String>,
    pub stock_quantity: i32,
    pub weight: Option<Decimal>,
    pub dimensions: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
}

impl Product {
    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    pub fn deactivate(&mut self) {
        self.lifecycle = self.lifecycle.deactivate();
    }
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            is_active: p.is_active(),
            name: p.name,
            description: p.description,
            price: p.price,
            sku: p.sku,
            category_id: p.category_id,
            brand: p.brand,
            stock_quantity: p.stock_quantity,
            weight: p.weight,
            dimensions: p.dimensions,
            color: p.color,
            size: p.size,
            is_featured: p.is_featured,
        }
    }
}
