//! Product service: REST CRUD over a PostgreSQL `products` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServiceConfig;
pub use error::{AppError, ConfigError};
pub use model::{Product, ProductPayload};
pub use routes::{app, common_routes, product_routes, DEFAULT_BODY_LIMIT};
pub use service::{PgProductStore, ProductStore};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_products_table, reset_products};
