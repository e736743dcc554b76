//! Product store and request validation.

#[cfg(test)]
pub(crate) mod memory;
mod product;
mod validation;
pub use product::{PgProductStore, ProductStore};
pub use validation::RequestValidator;
