//! Request extractors for product routes.

mod pagination;
mod product_id;
pub use pagination::{Pagination, DEFAULT_COUNT, MAX_COUNT};
pub use product_id::ProductId;
