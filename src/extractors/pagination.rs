//! `count` / `start` query parameters for the list endpoint.
//!
//! Never rejects: unparsable or out-of-range values fall back to defaults.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::collections::HashMap;

pub const DEFAULT_COUNT: i64 = 10;
pub const MAX_COUNT: i64 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub start: i64,
    pub count: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            start: 0,
            count: DEFAULT_COUNT,
        }
    }
}

impl Pagination {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let count = match params.get("count").and_then(|v| v.trim().parse::<i64>().ok()) {
            Some(n) if n < 1 => DEFAULT_COUNT,
            Some(n) => n.min(MAX_COUNT),
            None => DEFAULT_COUNT,
        };
        let start = params
            .get("start")
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|n| *n >= 0)
            .unwrap_or(0);
        Pagination { start, count }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pagination = match Query::<HashMap<String, String>>::try_from_uri(&parts.uri) {
            Ok(Query(params)) => Pagination::from_params(&params),
            Err(_) => Pagination::default(),
        };
        Ok(pagination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(pairs: &[(&str, &str)]) -> Pagination {
        let params = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Pagination::from_params(&params)
    }

    #[test]
    fn defaults_when_absent() {
        assert_eq!(parse(&[]), Pagination { start: 0, count: 10 });
    }

    #[test]
    fn explicit_values_are_used() {
        assert_eq!(parse(&[("count", "5"), ("start", "20")]), Pagination { start: 20, count: 5 });
    }

    #[test]
    fn non_positive_count_falls_back() {
        assert_eq!(parse(&[("count", "0")]).count, DEFAULT_COUNT);
        assert_eq!(parse(&[("count", "-3")]).count, DEFAULT_COUNT);
    }

    #[test]
    fn large_count_is_clamped() {
        assert_eq!(parse(&[("count", "5000")]).count, MAX_COUNT);
    }

    #[test]
    fn garbage_is_ignored() {
        assert_eq!(parse(&[("count", "ten"), ("start", "-1"), ("sort", "x")]), Pagination::default());
    }
}
