//! Products.
//!
//! A product belongs to at most one category through `categoryId`, which is
//! stored as given. SKUs are unique and cannot change after creation. Prices
//! are exact decimals and travel as strings in JSON.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/products` | Create product |
//! | GET | `/api/products` | All products |
//! | GET | `/api/products/active` | Active products |
//! | GET | `/api/products/featured` | Active featured products |
//! | GET | `/api/products/in-stock` | Stock > 0 |
//! | GET | `/api/products/out-of-stock` | Stock = 0 |
//! | GET | `/api/products/search?name=` | Name contains (case-insensitive) |
//! | GET | `/api/products/price-range?minPrice=&maxPrice=` | Inclusive price range |
//! | GET | `/api/products/{id}` | Product by id |
//! | GET | `/api/products/sku/{sku}` | Product by SKU |
//! | GET | `/api/products/category/{categoryId}` | Products in category |
//! | GET | `/api/products/brand/{brand}` | Products of brand |
//! | GET | `/api/products/exists/{sku}` | SKU taken? |
//! | PUT | `/api/products/{id}` | Update product |
//! | PATCH | `/api/products/{id}/stock` | Overwrite stock |
//! | DELETE | `/api/products/{id}` | Soft delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgProductRepository;
pub use services::ProductService;
