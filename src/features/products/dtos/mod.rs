pub mod product_dto;

pub use product_dto::{
    CreateProductDto, PriceRangeQuery, ProductResponseDto, SearchProductsQuery, UpdateProductDto,
    UpdateStockDto,
};
