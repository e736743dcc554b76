//! Product CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::{Pagination, ProductId};
use crate::model::ProductPayload;
use crate::response;
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

pub async fn list(
    State(state): State<AppState>,
    pagination: Pagination,
) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .store
        .list_products(pagination.start, pagination.count)
        .await?;
    Ok(response::ok(rows))
}

pub async fn read(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<impl IntoResponse, AppError> {
    let product = state.store.get_product(id).await?;
    Ok(response::ok(product))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = body?;
    let payload = RequestValidator::validate(payload)?;
    let product = state.store.create_product(&payload).await?;
    tracing::info!(id = product.id, "product created");
    Ok(response::created(product))
}

pub async fn update(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = body?;
    let payload = RequestValidator::validate(payload)?;
    let product = state.store.update_product(id, &payload).await?;
    tracing::info!(id, "product updated");
    Ok(response::ok(product))
}

/// Deleting an id that does not exist still succeeds.
pub async fn delete(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<impl IntoResponse, AppError> {
    let affected = state.store.delete_product(id).await?;
    tracing::info!(id, affected, "product deleted");
    Ok(response::deleted())
}

pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}
