use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::convert::Infallible;

pub const ITEMS_PER_PAGE: i64 = 50;

/// Link rendered for a direction with no page behind it.
pub const PLACEHOLDER_LINK: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
}

impl Pagination {
    pub fn new(page: i64) -> Self {
        Self { page: page.max(1) }
    }

    /// Missing, malformed and out-of-range tokens all land on the first page.
    pub fn from_raw(raw: Option<&str>) -> Self {
        Self::new(raw.and_then(|raw| raw.parse::<i64>().ok()).unwrap_or(1))
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(ITEMS_PER_PAGE)
    }

    pub fn limit(&self) -> i64 {
        ITEMS_PER_PAGE
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Pagination {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Repeated parameters resolve to the first occurrence.
        let params = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(params)| params)
            .unwrap_or_default();
        let raw = params
            .iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.as_str());

        Ok(Self::from_raw(raw))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    pub prev: String,
    pub next: String,
}

impl PageLinks {
    /// A full page is taken to mean there may be more; no total count is consulted.
    pub fn plan(pagination: &Pagination, fetched: usize) -> Self {
        let prev = match pagination.page {
            page if page > 1 => page_link(page - 1),
            _ => PLACEHOLDER_LINK.to_string(),
        };

        let next = match pagination.page.checked_add(1) {
            Some(page) if fetched as i64 == ITEMS_PER_PAGE => page_link(page),
            _ => PLACEHOLDER_LINK.to_string(),
        };

        Self { prev, next }
    }
}

fn page_link(page: i64) -> String {
    format!("?page={}", page)
}
