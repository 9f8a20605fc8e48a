//! Shared query parameter types for API handlers.
//!
//! Values arrive here already normalized by the validation middleware
//! (pagination strings parsed into integers, flags into booleans).

use serde::Deserialize;

/// Page served when `?page=` is omitted.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size served when `?limit=` is omitted.
pub const DEFAULT_LIMIT: i64 = 20;

/// Generic pagination parameters (`?page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// `GET /packages` filters.
#[derive(Debug, Deserialize)]
pub struct PackageListParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    pub category: Option<String>,
    pub featured: Option<bool>,
}

/// `GET /bookings` filters.
#[derive(Debug, Deserialize)]
pub struct BookingListParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    pub status: Option<String>,
}

/// `GET /events` filters.
#[derive(Debug, Deserialize)]
pub struct EventListParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    pub category: Option<String>,
}

/// A single `{id}` path segment.
#[derive(Debug, Deserialize)]
pub struct IdPath {
    pub id: String,
}
