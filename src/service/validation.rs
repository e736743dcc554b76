//! Field-level checks on product payloads before they reach the store.

use crate::error::AppError;
use crate::model::ProductPayload;
use rust_decimal::Decimal;

/// Scale of the `price` column (NUMERIC(10,2)).
const PRICE_SCALE: u32 = 2;
/// Exclusive upper bound for NUMERIC(10,2).
const PRICE_LIMIT: i64 = 100_000_000;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate and normalize a payload: trims the name and rounds price to the column scale.
    pub fn validate(payload: ProductPayload) -> Result<ProductPayload, AppError> {
        let name = payload.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("name must not be empty".into()));
        }
        let mut price = payload.price.round_dp(PRICE_SCALE);
        if price.is_zero() {
            price = Decimal::ZERO;
        }
        if price < Decimal::ZERO {
            return Err(AppError::Validation("price must not be negative".into()));
        }
        if price >= Decimal::from(PRICE_LIMIT) {
            return Err(AppError::Validation(format!(
                "price must be less than {}",
                PRICE_LIMIT
            )));
        }
        Ok(ProductPayload {
            name: name.to_string(),
            price,
        })
    }
}
