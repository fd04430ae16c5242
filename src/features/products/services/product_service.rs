use std::sync::Arc;

use rust_decimal::Decimal;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{CreateProductDto, ProductResponseDto, UpdateProductDto};
use crate::features::products::models::{NewProduct, Product};
use crate::features::products::repositories::ProductRepository;

/// Service for product operations
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

fn to_dtos(products: Vec<Product>) -> Vec<ProductResponseDto> {
    products.into_iter().map(Into::into).collect()
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Create a product. The SKU must be unused; `categoryId` is stored as given.
    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductResponseDto> {
        if self.repository.exists_by_sku(&dto.sku).await? {
            return Err(AppError::AlreadyExists(format!(
                "Product with SKU {} already exists",
                dto.sku
            )));
        }

        let product = self
            .repository
            .insert(NewProduct {
                name: dto.name,
                description: dto.description,
                price: dto.price,
                sku: dto.sku,
                category_id: dto.category_id,
                brand: dto.brand,
                stock_quantity: dto.stock_quantity.unwrap_or(0),
                weight: dto.weight,
                dimensions: dto.dimensions,
                color: dto.color,
                size: dto.size,
            })
            .await?;

        tracing::info!(
            "Product created: id={}, sku={}, category={:?}",
            product.id,
            product.sku,
            product.category_id
        );

        Ok(product.into())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ProductResponseDto> {
        self.find(id).await.map(Into::into)
    }

    pub async fn get_by_sku(&self, sku: &str) -> Result<ProductResponseDto> {
        self.repository
            .find_by_sku(sku)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Product not found with SKU: {}", sku)))
    }

    pub async fn list_all(&self) -> Result<Vec<ProductResponseDto>> {
        Ok(to_dtos(self.repository.list_all().await?))
    }

    pub async fn list_active(&self) -> Result<Vec<ProductResponseDto>> {
        Ok(to_dtos(self.repository.list_active().await?))
    }

    pub async fn list_by_category(&self, category_id: i64) -> Result<Vec<ProductResponseDto>> {
        Ok(to_dtos(self.repository.list_by_category(category_id).await?))
    }

    pub async fn list_featured(&self) -> Result<Vec<ProductResponseDto>> {
        Ok(to_dtos(self.repository.list_featured().await?))
    }

    pub async fn list_by_brand(&self, brand: &str) -> Result<Vec<ProductResponseDto>> {
        Ok(to_dtos(self.repository.list_by_brand(brand).await?))
    }

    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<ProductResponseDto>> {
        Ok(to_dtos(self.repository.search_by_name(fragment).await?))
    }

    pub async fn list_by_price_range(
        &self,
        min_price: Decimal,
        max_price: Decimal,
    ) -> Result<Vec<ProductResponseDto>> {
        Ok(to_dtos(
            self.repository
                .list_by_price_range(min_price, max_price)
                .await?,
        ))
    }

    pub async fn list_in_stock(&self) -> Result<Vec<ProductResponseDto>> {
        Ok(to_dtos(self.repository.list_in_stock().await?))
    }

    pub async fn list_out_of_stock(&self) -> Result<Vec<ProductResponseDto>> {
        Ok(to_dtos(self.repository.list_out_of_stock().await?))
    }

    /// Replace every field except id and SKU
    pub async fn update(&self, id: i64, dto: UpdateProductDto) -> Result<ProductResponseDto> {
        let mut product = self.find(id).await?;

        product.name = dto.name;
        product.description = dto.description;
        product.price = dto.price;
        product.category_id = dto.category_id;
        product.brand = dto.brand;
        product.stock_quantity = dto.stock_quantity.unwrap_or(0);
        product.weight = dto.weight;
        product.dimensions = dto.dimensions;
        product.color = dto.color;
        product.size = dto.size;
        product.is_featured = dto.is_featured.unwrap_or(false);

        let updated = self.save(product).await?;
        tracing::info!("Product updated: id={}", updated.id);

        Ok(updated.into())
    }

    /// Overwrite the stock level. Last write wins; no floor at zero.
    pub async fn update_stock(&self, id: i64, quantity: i32) -> Result<ProductResponseDto> {
        let mut product = self.find(id).await?;
        let previous = product.stock_quantity;
        product.stock_quantity = quantity;

        let updated = self.save(product).await?;
        tracing::info!(
            "Product stock updated: id={}, from={}, to={}",
            id,
            previous,
            updated.stock_quantity
        );

        Ok(updated.into())
    }

    /// Soft delete
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut product = self.find(id).await?;
        product.deactivate();
        self.save(product).await?;

        tracing::info!("Product deactivated: id={}", id);
        Ok(())
    }

    pub async fn exists_by_sku(&self, sku: &str) -> Result<bool> {
        self.repository.exists_by_sku(sku).await
    }

    async fn find(&self, id: i64) -> Result<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn save(&self, product: Product) -> Result<Product> {
        let id = product.id;
        self.repository
            .update(&product)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Product not found with id: {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::shared::test_helpers::{product_dto, update_from, InMemoryProductRepository};

    fn service() -> ProductService {
        ProductService::new(Arc::new(InMemoryProductRepository::new()))
    }

    fn ids(products: &[ProductResponseDto]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[tokio::test]
    async fn test_create_product() {
        let service = service();
        let mut dto = product_dto("iPhone 15 Pro", dec!(999.99), "IPHONE15PRO001");
        dto.category_id = Some(1);
        dto.brand = Some("Apple".to_string());
        dto.stock_quantity = Some(50);
        dto.weight = Some(dec!(0.187));
        dto.color = Some("Natural Titanium".to_string());

        let created = service.create(dto).await.unwrap();

        assert_eq!(created.name, "iPhone 15 Pro");
        assert_eq!(created.price, dec!(999.99));
        assert_eq!(created.sku, "IPHONE15PRO001");
        assert_eq!(created.category_id, Some(1));
        assert_eq!(created.stock_quantity, 50);
        assert_eq!(created.weight, Some(dec!(0.187)));
        assert!(created.is_active);
        assert!(!created.is_featured);
    }

    #[tokio::test]
    async fn test_stock_defaults_to_zero() {
        let service = service();
        let dto = product_dto("Cable", dec!(9.99), "CABLE001");
        assert!(dto.stock_quantity.is_none());

        let created = service.create(dto).await.unwrap();
        assert_eq!(created.stock_quantity, 0);
    }

    #[tokio::test]
    async fn test_duplicate_sku_fails() {
        let service = service();
        service
            .create(product_dto("First", dec!(10), "SKU001"))
            .await
            .unwrap();

        let result = service
            .create(product_dto("Second", dec!(20), "SKU001"))
            .await;
        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_duplicate_sku_of_inactive_product_fails() {
        let service = service();
        let created = service
            .create(product_dto("Old", dec!(10), "SKU001"))
            .await
            .unwrap();
        service.delete(created.id).await.unwrap();

        let result = service.create(product_dto("New", dec!(10), "SKU001")).await;
        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let service = service();
        let update = update_from(&product_dto("X", dec!(1), "X"));

        assert!(matches!(service.get_by_id(7).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.update(7, update).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.update_stock(7, 3).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(service.delete(7).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.get_by_sku("NOPE").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_nonexistent_category_is_accepted() {
        let service = service();
        let mut dto = product_dto("Invalid Category Product", dec!(99.99), "INVALID001");
        dto.category_id = Some(999_999);

        let created = service.create(dto).await.unwrap();
        assert_eq!(created.category_id, Some(999_999));

        let listed = service.list_by_category(999_999).await.unwrap();
        assert_eq!(ids(&listed), vec![created.id]);
    }

    #[tokio::test]
    async fn test_soft_delete() {
        let service = service();
        let created = service
            .create(product_dto("Lamp", dec!(25), "LAMP001"))
            .await
            .unwrap();

        service.delete(created.id).await.unwrap();

        let fetched = service.get_by_id(created.id).await.unwrap();
        assert!(!fetched.is_active);
        assert!(service.get_by_sku("LAMP001").await.is_ok());
        assert!(service.list_active().await.unwrap().is_empty());
        assert_eq!(service.list_all().await.unwrap().len(), 1);

        // repeat delete on an inactive product succeeds
        service.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_stock_partition_and_update_stock() {
        let service = service();
        let mut dto = product_dto("Headphones", dec!(199), "HEAD001");
        dto.stock_quantity = Some(5);
        let stocked = service.create(dto).await.unwrap();
        let empty = service
            .create(product_dto("Speaker", dec!(99), "SPK001"))
            .await
            .unwrap();

        assert_eq!(ids(&service.list_in_stock().await.unwrap()), vec![stocked.id]);
        assert_eq!(
            ids(&service.list_out_of_stock().await.unwrap()),
            vec![empty.id]
        );

        let updated = service.update_stock(stocked.id, 0).await.unwrap();
        assert_eq!(updated.stock_quantity, 0);
        assert!(service.list_in_stock().await.unwrap().is_empty());
        assert_eq!(
            ids(&service.list_out_of_stock().await.unwrap()),
            vec![stocked.id, empty.id]
        );

        service.update_stock(empty.id, 12).await.unwrap();
        assert_eq!(ids(&service.list_in_stock().await.unwrap()), vec![empty.id]);
    }

    #[tokio::test]
    async fn test_update_stock_allows_negative() {
        let service = service();
        let created = service
            .create(product_dto("Mug", dec!(8), "MUG001"))
            .await
            .unwrap();

        let updated = service.update_stock(created.id, -3).await.unwrap();
        assert_eq!(updated.stock_quantity, -3);
        assert!(service.list_in_stock().await.unwrap().is_empty());
        assert!(service.list_out_of_stock().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_inactive_products_leave_stock_listings() {
        let service = service();
        let created = service
            .create(product_dto("Pen", dec!(1.5), "PEN001"))
            .await
            .unwrap();
        service.delete(created.id).await.unwrap();

        assert!(service.list_out_of_stock().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_price_range_is_inclusive() {
        let service = service();
        let low = service
            .create(product_dto("Low", dec!(400.00), "LOW001"))
            .await
            .unwrap();
        let high = service
            .create(product_dto("High", dec!(1000.00), "HIGH001"))
            .await
            .unwrap();
        service
            .create(product_dto("Above", dec!(1000.01), "ABOVE001"))
            .await
            .unwrap();

        let listed = service
            .list_by_price_range(dec!(400), dec!(1000))
            .await
            .unwrap();
        assert_eq!(ids(&listed), vec![low.id, high.id]);

        assert!(service
            .list_by_price_range(dec!(1000), dec!(400))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_brand_search_and_featured() {
        let service = service();
        let mut iphone = product_dto("iPhone 15 Pro", dec!(999.99), "IPHONE15PRO001");
        iphone.brand = Some("Apple".to_string());
        let iphone = service.create(iphone).await.unwrap();

        let mut galaxy = product_dto("Samsung Galaxy S24", dec!(899.99), "GALAXYS24001");
        galaxy.brand = Some("Samsung".to_string());
        let galaxy = service.create(galaxy).await.unwrap();

        assert_eq!(
            ids(&service.list_by_brand("Apple").await.unwrap()),
            vec![iphone.id]
        );
        assert!(service.list_by_brand("Nokia").await.unwrap().is_empty());

        assert_eq!(
            ids(&service.search_by_name("galaxy").await.unwrap()),
            vec![galaxy.id]
        );
        assert_eq!(service.search_by_name("").await.unwrap().len(), 2);

        let mut update = update_from(&product_dto("Samsung Galaxy S24", dec!(849.99), ""));
        update.brand = Some("Samsung".to_string());
        update.is_featured = Some(true);
        service.update(galaxy.id, update).await.unwrap();

        let featured = service.list_featured().await.unwrap();
        assert_eq!(ids(&featured), vec![galaxy.id]);
        assert_eq!(featured[0].price, dec!(849.99));
    }

    #[tokio::test]
    async fn test_update_keeps_sku_and_replaces_fields() {
        let service = service();
        let mut dto = product_dto("Laptop", dec!(1500), "LAPTOP001");
        dto.brand = Some("Acme".to_string());
        dto.stock_quantity = Some(4);
        dto.color = Some("Silver".to_string());
        let created = service.create(dto).await.unwrap();

        let mut update = update_from(&product_dto("Laptop Pro", dec!(1800), "IGNORED"));
        update.category_id = Some(999_999);
        update.stock_quantity = Some(9);

        let updated = service.update(created.id, update).await.unwrap();

        assert_eq!(updated.sku, "LAPTOP001");
        assert_eq!(updated.name, "Laptop Pro");
        assert_eq!(updated.price, dec!(1800));
        assert_eq!(updated.category_id, Some(999_999));
        assert_eq!(updated.stock_quantity, 9);
        assert_eq!(updated.brand, None);
        assert_eq!(updated.color, None);
        assert!(service.get_by_sku("LAPTOP001").await.is_ok());
        assert!(!service.exists_by_sku("IGNORED").await.unwrap());
    }
}
