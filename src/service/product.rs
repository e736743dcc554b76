//! Product persistence: one parameterized statement per lifecycle operation.

use crate::error::AppError;
use crate::model::{Product, ProductPayload};
use crate::sql::{DELETE_PRODUCT, INSERT_PRODUCT, PING, SELECT_PRODUCT, SELECT_PRODUCTS, UPDATE_PRODUCT};
use async_trait::async_trait;
use sqlx::PgPool;

/// Storage operations the handlers depend on.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetch one product; `ProductNotFound` if no row has this id.
    async fn get_product(&self, id: i64) -> Result<Product, AppError>;

    /// Products ordered by id, skipping `start` rows and returning at most `count`.
    async fn list_products(&self, start: i64, count: i64) -> Result<Vec<Product>, AppError>;

    /// Insert a row and return it with the sequence-assigned id.
    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, AppError>;

    /// Overwrite name and price; `ProductNotFound` if no row has this id.
    async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<Product, AppError>;

    /// Remove a row. Returns the number of rows deleted (0 when the id did not exist).
    async fn delete_product(&self, id: i64) -> Result<u64, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

/// `ProductStore` backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn get_product(&self, id: i64) -> Result<Product, AppError> {
        tracing::debug!(sql = SELECT_PRODUCT, id, "query");
        sqlx::query_as::<_, Product>(SELECT_PRODUCT)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::ProductNotFound)
    }

    async fn list_products(&self, start: i64, count: i64) -> Result<Vec<Product>, AppError> {
        tracing::debug!(sql = SELECT_PRODUCTS, start, count, "query");
        let rows = sqlx::query_as::<_, Product>(SELECT_PRODUCTS)
            .bind(count)
            .bind(start)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, AppError> {
        tracing::debug!(sql = INSERT_PRODUCT, name = %payload.name, price = %payload.price, "query");
        let product = sqlx::query_as::<_, Product>(INSERT_PRODUCT)
            .bind(&payload.name)
            .bind(payload.price)
            .fetch_one(&self.pool)
            .await?;
        Ok(product)
    }

    async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<Product, AppError> {
        tracing::debug!(sql = UPDATE_PRODUCT, id, name = %payload.name, price = %payload.price, "query");
        sqlx::query_as::<_, Product>(UPDATE_PRODUCT)
            .bind(&payload.name)
            .bind(payload.price)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::ProductNotFound)
    }

    async fn delete_product(&self, id: i64) -> Result<u64, AppError> {
        tracing::debug!(sql = DELETE_PRODUCT, id, "query");
        let result = sqlx::query(DELETE_PRODUCT)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query(PING).fetch_optional(&self.pool).await?;
        Ok(())
    }
}
