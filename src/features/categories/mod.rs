//! Product categories.
//!
//! Categories form a hierarchy through a nullable `parentCategoryId`. The
//! reference is weak: it is never checked for existence or cycles, and
//! deleting a parent leaves its children active.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/categories` | Create category |
//! | GET | `/api/categories` | All categories |
//! | GET | `/api/categories/active` | Active categories |
//! | GET | `/api/categories/root` | Active root categories |
//! | GET | `/api/categories/{id}` | Category by id |
//! | GET | `/api/categories/name/{name}` | Category by name |
//! | GET | `/api/categories/{id}/subcategories` | Active children |
//! | GET | `/api/categories/exists/{name}` | Name taken? |
//! | PUT | `/api/categories/{id}` | Update category |
//! | DELETE | `/api/categories/{id}` | Soft delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgCategoryRepository;
pub use services::CategoryService;
