use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::shared::validation::{validate_not_blank, validate_price, validate_weight};

/// Request DTO for creating a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[validate(
        length(max = 255, message = "Product name must not exceed 255 characters"),
        custom(function = "validate_not_blank", message = "Product name is required")
    )]
    pub name: String,

    pub description: Option<String>,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "999.99")]
    pub price: Decimal,

    #[validate(
        length(max = 100, message = "SKU must not exceed 100 characters"),
        custom(function = "validate_not_blank", message = "SKU is required")
    )]
    pub sku: String,

    /// Category id; not checked for existence
    pub category_id: Option<i64>,

    #[validate(length(max = 100, message = "Brand must not exceed 100 characters"))]
    pub brand: Option<String>,

    /// Defaults to 0 when omitted
    pub stock_quantity: Option<i32>,

    #[validate(custom(function = "validate_weight"))]
    #[schema(value_type = Option<String>, example = "0.187")]
    pub weight: Option<Decimal>,

    #[validate(length(max = 100, message = "Dimensions must not exceed 100 characters"))]
    pub dimensions: Option<String>,

    #[validate(length(max = 50, message = "Color must not exceed 50 characters"))]
    pub color: Option<String>,

    #[validate(length(max = 50, message = "Size must not exceed 50 characters"))]
    pub size: Option<String>,
}

/// Request DTO for updating a product.
///
/// Whole-record replacement of everything except `id` and `sku`; omitted
/// optional fields are cleared, `stockQuantity` falls back to 0 and
/// `isFeatured` to false.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    #[validate(
        length(max = 255, message = "Product name must not exceed 255 characters"),
        custom(function = "validate_not_blank", message = "Product name is required")
    )]
    pub name: String,

    pub description: Option<String>,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "899.99")]
    pub price: Decimal,

    pub category_id: Option<i64>,

    #[validate(length(max = 100, message = "Brand must not exceed 100 characters"))]
    pub brand: Option<String>,

    pub stock_quantity: Option<i32>,

    #[validate(custom(function = "validate_weight"))]
    #[schema(value_type = Option<String>)]
    pub weight: Option<Decimal>,

    #[validate(length(max = 100, message = "Dimensions must not exceed 100 characters"))]
    pub dimensions: Option<String>,

    #[validate(length(max = 50, message = "Color must not exceed 50 characters"))]
    pub color: Option<String>,

    #[validate(length(max = 50, message = "Size must not exceed 50 characters"))]
    pub size: Option<String>,

    pub is_featured: Option<bool>,
}

/// Request DTO for overwriting stock. Negative values are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStockDto {
    pub quantity: i32,
}

/// Response DTO for product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponseDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = String)]
    pub price: Decimal,
    pub sku: String,
    pub category_id: Option<i64>,
    pub brand: Option<String>,
    pub stock_quantity: i32,
    #[schema(value_type = Option<String>)]
    pub weight: Option<Decimal>,
    pub dimensions: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
}

/// Query params for name search
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchProductsQuery {
    /// Substring to look for in the product name (case-insensitive)
    pub name: String,
}

/// Query params for price range listing, both bounds inclusive
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PriceRangeQuery {
    #[param(value_type = String)]
    pub min_price: Decimal,
    #[param(value_type = String)]
    pub max_price: Decimal,
}
