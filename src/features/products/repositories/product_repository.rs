use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{postgres::PgArguments, query::QueryAs, PgPool, Postgres};

use crate::core::database::map_db_error;
use crate::core::error::{AppError, Result};
use crate::features::products::models::{NewProduct, Product};

/// Data access for products.
///
/// Every filtered listing except `list_all` is scoped to active products.
/// Listings are ordered by id. A duplicate SKU on `insert` surfaces as
/// `AppError::AlreadyExists`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: NewProduct) -> Result<Product>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>>;

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>>;

    async fn exists_by_sku(&self, sku: &str) -> Result<bool>;

    async fn list_all(&self) -> Result<Vec<Product>>;

    async fn list_active(&self) -> Result<Vec<Product>>;

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Product>>;

    async fn list_featured(&self) -> Result<Vec<Product>>;

    async fn list_by_brand(&self, brand: &str) -> Result<Vec<Product>>;

    /// Case-insensitive substring match on the name
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Product>>;

    /// Inclusive at both bounds; an inverted range matches nothing
    async fn list_by_price_range(&self, min: Decimal, max: Decimal) -> Result<Vec<Product>>;

    /// Stock strictly above zero
    async fn list_in_stock(&self) -> Result<Vec<Product>>;

    /// Stock exactly zero; negative stock is in neither stock listing
    async fn list_out_of_stock(&self) -> Result<Vec<Product>>;

    /// Persist every mutable column (sku excluded), returns `None` if the row is gone
    async fn update(&self, product: &Product) -> Result<Option<Product>>;
}

const PRODUCT_COLUMNS: &str = "id, name, description, price, sku, category_id, brand, \
     stock_quantity, weight, dimensions, color, size, is_active, is_featured, \
     created_at, updated_at";

fn select(filter: &str) -> String {
    format!(
        "SELECT {} FROM products {} ORDER BY id",
        PRODUCT_COLUMNS, filter
    )
}

/// Escape LIKE wildcards so the fragment is matched literally
fn like_pattern(fragment: &str) -> String {
    let escaped = fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_all<'q>(
        &self,
        query: QueryAs<'q, Postgres, Product, PgArguments>,
    ) -> Result<Vec<Product>> {
        query.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to list products: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn fetch_optional<'q>(
        &self,
        query: QueryAs<'q, Postgres, Product, PgArguments>,
    ) -> Result<Option<Product>> {
        query.fetch_optional(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to get product: {:?}", e);
            AppError::Database(e)
        })
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn insert(&self, product: NewProduct) -> Result<Product> {
        let query = format!(
            r#"
            INSERT INTO products (name, description, price, sku, category_id, brand,
                                  stock_quantity, weight, dimensions, color, size)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        );

        sqlx::query_as::<_, Product>(&query)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(&product.sku)
            .bind(product.category_id)
            .bind(&product.brand)
            .bind(product.stock_quantity)
            .bind(product.weight)
            .bind(&product.dimensions)
            .bind(&product.color)
            .bind(&product.size)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error(e, || format!("Product with SKU {} already exists", product.sku)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let query = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);
        self.fetch_optional(sqlx::query_as::<_, Product>(&query).bind(id)).await
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>> {
        let query = format!("SELECT {} FROM products WHERE sku = $1", PRODUCT_COLUMNS);
        self.fetch_optional(sqlx::query_as::<_, Product>(&query).bind(sku)).await
    }

    async fn exists_by_sku(&self, sku: &str) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE sku = $1)")
            .bind(sku)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<Product>> {
        let query = select("");
        self.fetch_all(sqlx::query_as::<_, Product>(&query)).await
    }

    async fn list_active(&self) -> Result<Vec<Product>> {
        let query = select("WHERE is_active = TRUE");
        self.fetch_all(sqlx::query_as::<_, Product>(&query)).await
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Product>> {
        let query = select("WHERE category_id = $1 AND is_active = TRUE");
        self.fetch_all(sqlx::query_as::<_, Product>(&query).bind(category_id))
            .await
    }

    async fn list_featured(&self) -> Result<Vec<Product>> {
        let query = select("WHERE is_featured = TRUE AND is_active = TRUE");
        self.fetch_all(sqlx::query_as::<_, Product>(&query)).await
    }

    async fn list_by_brand(&self, brand: &str) -> Result<Vec<Product>> {
        let query = select("WHERE brand = $1 AND is_active = TRUE");
        self.fetch_all(sqlx::query_as::<_, Product>(&query).bind(brand)).await
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Product>> {
        let query = select("WHERE name ILIKE $1 AND is_active = TRUE");
        self.fetch_all(sqlx::query_as::<_, Product>(&query).bind(like_pattern(fragment)))
            .await
    }

    async fn list_by_price_range(&self, min: Decimal, max: Decimal) -> Result<Vec<Product>> {
        let query = select("WHERE price BETWEEN $1 AND $2 AND is_active = TRUE");
        self.fetch_all(sqlx::query_as::<_, Product>(&query).bind(min).bind(max))
            .await
    }

    async fn list_in_stock(&self) -> Result<Vec<Product>> {
        let query = select("WHERE stock_quantity > 0 AND is_active = TRUE");
        self.fetch_all(sqlx::query_as::<_, Product>(&query)).await
    }

    async fn list_out_of_stock(&self) -> Result<Vec<Product>> {
        let query = select("WHERE stock_quantity = 0 AND is_active = TRUE");
        self.fetch_all(sqlx::query_as::<_, Product>(&query)).await
    }

    async fn update(&self, product: &Product) -> Result<Option<Product>> {
        let query = format!(
            r#"
            UPDATE products
            SET name = $1,
                description = $2,
                price = $3,
                category_id = $4,
                brand = $5,
                stock_quantity = $6,
                weight = $7,
                dimensions = $8,
                color = $9,
                size = $10,
                is_active = $11,
                is_featured = $12,
                updated_at = NOW()
            WHERE id = $13
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        );

        let statement = sqlx::query_as::<_, Product>(&query)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.category_id)
            .bind(&product.brand)
            .bind(product.stock_quantity)
            .bind(product.weight)
            .bind(&product.dimensions)
            .bind(&product.color)
            .bind(&product.size)
            .bind(product.is_active())
            .bind(product.is_featured)
            .bind(product.id);

        self.fetch_optional(statement).await
    }
}
