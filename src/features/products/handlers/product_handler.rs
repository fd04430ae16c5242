use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::products::dtos::{
    CreateProductDto, PriceRangeQuery, ProductResponseDto, SearchProductsQuery, UpdateProductDto,
    UpdateStockDto,
};
use crate::features::products::services::ProductService;
use crate::shared::types::ApiResponse;

type ProductList = Result<Json<ApiResponse<Vec<ProductResponseDto>>>>;

/// Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "SKU already exists")
    ),
    tag = "products"
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<CreateProductDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(product), None, None)),
    ))
}

/// List all products, active and inactive
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn list_products(State(service): State<Arc<ProductService>>) -> ProductList {
    Ok(Json(ApiResponse::list(service.list_all().await?)))
}

/// List active products
#[utoipa::path(
    get,
    path = "/api/products/active",
    responses(
        (status = 200, description = "List of active products", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn list_active_products(State(service): State<Arc<ProductService>>) -> ProductList {
    Ok(Json(ApiResponse::list(service.list_active().await?)))
}

/// List active featured products
#[utoipa::path(
    get,
    path = "/api/products/featured",
    responses(
        (status = 200, description = "List of featured products", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn list_featured_products(State(service): State<Arc<ProductService>>) -> ProductList {
    Ok(Json(ApiResponse::list(service.list_featured().await?)))
}

/// List active products with stock above zero
#[utoipa::path(
    get,
    path = "/api/products/in-stock",
    responses(
        (status = 200, description = "List of in-stock products", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn list_in_stock_products(State(service): State<Arc<ProductService>>) -> ProductList {
    Ok(Json(ApiResponse::list(service.list_in_stock().await?)))
}

/// List active products with stock exactly zero
#[utoipa::path(
    get,
    path = "/api/products/out-of-stock",
    responses(
        (status = 200, description = "List of out-of-stock products", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn list_out_of_stock_products(State(service): State<Arc<ProductService>>) -> ProductList {
    Ok(Json(ApiResponse::list(service.list_out_of_stock().await?)))
}

/// Search active products by name
#[utoipa::path(
    get,
    path = "/api/products/search",
    params(SearchProductsQuery),
    responses(
        (status = 200, description = "Matching products", body = ApiResponse<Vec<ProductResponseDto>>),
        (status = 400, description = "Missing name parameter")
    ),
    tag = "products"
)]
pub async fn search_products(
    State(service): State<Arc<ProductService>>,
    AppQuery(query): AppQuery<SearchProductsQuery>,
) -> ProductList {
    Ok(Json(ApiResponse::list(
        service.search_by_name(&query.name).await?,
    )))
}

/// List active products priced within `[minPrice, maxPrice]`
#[utoipa::path(
    get,
    path = "/api/products/price-range",
    params(PriceRangeQuery),
    responses(
        (status = 200, description = "Products within the range", body = ApiResponse<Vec<ProductResponseDto>>),
        (status = 400, description = "Missing or malformed bounds")
    ),
    tag = "products"
)]
pub async fn list_products_by_price_range(
    State(service): State<Arc<ProductService>>,
    AppQuery(query): AppQuery<PriceRangeQuery>,
) -> ProductList {
    let products = service
        .list_by_price_range(query.min_price, query.max_price)
        .await?;
    Ok(Json(ApiResponse::list(products)))
}

/// Get product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Get product by SKU
#[utoipa::path(
    get,
    path = "/api/products/sku/{sku}",
    params(
        ("sku" = String, Path, description = "Stock keeping unit")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product_by_sku(
    State(service): State<Arc<ProductService>>,
    Path(sku): Path<String>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.get_by_sku(&sku).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// List active products in a category
#[utoipa::path(
    get,
    path = "/api/products/category/{category_id}",
    params(
        ("category_id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Products in the category", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn list_products_by_category(
    State(service): State<Arc<ProductService>>,
    Path(category_id): Path<i64>,
) -> ProductList {
    Ok(Json(ApiResponse::list(
        service.list_by_category(category_id).await?,
    )))
}

/// List active products of a brand (exact match)
#[utoipa::path(
    get,
    path = "/api/products/brand/{brand}",
    params(
        ("brand" = String, Path, description = "Brand name")
    ),
    responses(
        (status = 200, description = "Products of the brand", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn list_products_by_brand(
    State(service): State<Arc<ProductService>>,
    Path(brand): Path<String>,
) -> ProductList {
    Ok(Json(ApiResponse::list(service.list_by_brand(&brand).await?)))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn update_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateProductDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Overwrite a product's stock level
#[utoipa::path(
    patch,
    path = "/api/products/{id}/stock",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateStockDto,
    responses(
        (status = 200, description = "Stock updated", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn update_product_stock(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateStockDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.update_stock(id, dto.quantity).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Delete a product (soft delete)
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Check whether a SKU is taken
#[utoipa::path(
    get,
    path = "/api/products/exists/{sku}",
    params(
        ("sku" = String, Path, description = "Stock keeping unit")
    ),
    responses(
        (status = 200, description = "Whether the SKU exists", body = ApiResponse<bool>),
    ),
    tag = "products"
)]
pub async fn product_exists(
    State(service): State<Arc<ProductService>>,
    Path(sku): Path<String>,
) -> Result<Json<ApiResponse<bool>>> {
    let exists = service.exists_by_sku(&sku).await?;
    Ok(Json(ApiResponse::success(Some(exists), None, None)))
}
