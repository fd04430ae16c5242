use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::create_category,
        categories_handlers::list_categories,
        categories_handlers::list_active_categories,
        categories_handlers::list_root_categories,
        categories_handlers::get_category,
        categories_handlers::get_category_by_name,
        categories_handlers::list_subcategories,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        categories_handlers::category_exists,
        // Products
        products_handlers::create_product,
        products_handlers::list_products,
        products_handlers::list_active_products,
        products_handlers::list_featured_products,
        products_handlers::list_in_stock_products,
        products_handlers::list_out_of_stock_products,
        products_handlers::search_products,
        products_handlers::list_products_by_price_range,
        products_handlers::get_product,
        products_handlers::get_product_by_sku,
        products_handlers::list_products_by_category,
        products_handlers::list_products_by_brand,
        products_handlers::update_product,
        products_handlers::update_product_stock,
        products_handlers::delete_product,
        products_handlers::product_exists,
        // Users
        users_handlers::create_user,
        users_handlers::list_users,
        users_handlers::get_user,
        users_handlers::get_user_by_email,
        users_handlers::update_user,
        users_handlers::delete_user,
        users_handlers::user_exists,
    ),
    components(
        schemas(
            // Shared
            Meta,
            ApiResponse<bool>,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Products
            products_dtos::CreateProductDto,
            products_dtos::UpdateProductDto,
            products_dtos::UpdateStockDto,
            ApiResponse<Vec<products_dtos::ProductResponseDto>>,
            ApiResponse<products_dtos::ProductResponseDto>,
            // Users
            users_dtos::CreateUserDto,
            users_dtos::UpdateUserDto,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            ApiResponse<users_dtos::UserResponseDto>,
        )
    ),
    tags(
        (name = "categories", description = "Product categories and their hierarchy"),
        (name = "products", description = "Product catalog, stock and pricing"),
        (name = "users", description = "User accounts"),
    ),
    info(
        title = "Storefront Catalog API",
        version = "0.1.0",
        description = "API documentation for the storefront catalog",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
