//! User accounts.
//!
//! Passwords are accepted on registration only and stored as Argon2id hashes.
//! Email is unique across active and inactive users and cannot be changed.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/users` | Register user |
//! | GET | `/api/users` | Active users |
//! | GET | `/api/users/{id}` | User by id |
//! | GET | `/api/users/email/{email}` | Active user by email |
//! | GET | `/api/users/exists/{email}` | Email taken? |
//! | PUT | `/api/users/{id}` | Update name and phone |
//! | DELETE | `/api/users/{id}` | Soft delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgUserRepository;
pub use services::UserService;
