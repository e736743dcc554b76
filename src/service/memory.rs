//! In-memory `ProductStore` used by router tests.

use crate::error::AppError;
use crate::model::{Product, ProductPayload};
use crate::service::ProductStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    pub fail: bool,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Product>,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn get_product(&self, id: i64) -> Result<Product, AppError> {
        self.check()?;
        let inner = self.inner.lock().unwrap();
        inner.rows.get(&id).cloned().ok_or(AppError::ProductNotFound)
    }

    async fn list_products(&self, start: i64, count: i64) -> Result<Vec<Product>, AppError> {
        self.check()?;
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .values()
            .skip(start as usize)
            .take(count as usize)
            .cloned()
            .collect())
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, AppError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let product = Product {
            id: inner.next_id,
            name: payload.name.clone(),
            price: payload.price,
        };
        inner.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<Product, AppError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        let row = inner.rows.get_mut(&id).ok_or(AppError::ProductNotFound)?;
        row.name = payload.name.clone();
        row.price = payload.price;
        Ok(row.clone())
    }

    async fn delete_product(&self, id: i64) -> Result<u64, AppError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.rows.remove(&id).map(|_| 1).unwrap_or(0))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}
