//! Product entity and request payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A persisted product row. `id` is assigned by the `products_id_seq` sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Body of POST and PUT requests. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
}
