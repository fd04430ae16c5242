use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::products::handlers;
use crate::features::products::services::ProductService;

/// Create routes for the products feature
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route(
            "/api/products",
            post(handlers::create_product).get(handlers::list_products),
        )
        .route("/api/products/active", get(handlers::list_active_products))
        .route(
            "/api/products/featured",
            get(handlers::list_featured_products),
        )
        .route(
            "/api/products/in-stock",
            get(handlers::list_in_stock_products),
        )
        .route(
            "/api/products/out-of-stock",
            get(handlers::list_out_of_stock_products),
        )
        .route("/api/products/search", get(handlers::search_products))
        .route(
            "/api/products/price-range",
            get(handlers::list_products_by_price_range),
        )
        .route("/api/products/sku/{sku}", get(handlers::get_product_by_sku))
        .route(
            "/api/products/category/{category_id}",
            get(handlers::list_products_by_category),
        )
        .route(
            "/api/products/brand/{brand}",
            get(handlers::list_products_by_brand),
        )
        .route("/api/products/exists/{sku}", get(handlers::product_exists))
        .route(
            "/api/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route(
            "/api/products/{id}/stock",
            patch(handlers::update_product_stock),
        )
        .with_state(service)
}
