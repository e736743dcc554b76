//! Success response helpers. Products are written bare, without an envelope.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct DeleteResult {
    pub result: &'static str,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn deleted() -> (StatusCode, Json<DeleteResult>) {
    ok(DeleteResult { result: "success" })
}
