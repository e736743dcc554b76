//! Shared application state for all routes.

use crate::service::{PgProductStore, ProductStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self::with_store(Arc::new(PgProductStore::new(pool)))
    }

    pub fn with_store(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}
