use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/api/categories",
            post(handlers::create_category).get(handlers::list_categories),
        )
        .route(
            "/api/categories/active",
            get(handlers::list_active_categories),
        )
        .route("/api/categories/root", get(handlers::list_root_categories))
        .route(
            "/api/categories/name/{name}",
            get(handlers::get_category_by_name),
        )
        .route(
            "/api/categories/exists/{name}",
            get(handlers::category_exists),
        )
        .route(
            "/api/categories/{id}",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .route(
            "/api/categories/{id}/subcategories",
            get(handlers::list_subcategories),
        )
        .with_state(service)
}
