//! Handlers for the `/events` portfolio resource.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::validate::{ValidatedBody, ValidatedQuery};
use crate::query::EventListParams;
use crate::response::{DataResponse, Page};

/// A past shoot shown in the portfolio.
#[derive(Debug, Deserialize, Serialize)]
pub struct PortfolioEvent {
    pub title: String,
    pub category: String,
    pub event_date: String,
    pub description: Option<String>,
}

/// GET /api/v1/events
pub async fn list_events(
    ValidatedQuery(params): ValidatedQuery<EventListParams>,
) -> AppResult<Json<DataResponse<Page<PortfolioEvent>>>> {
    tracing::debug!(
        page = params.pagination.page(),
        limit = params.pagination.limit(),
        category = ?params.category,
        "Listing portfolio events"
    );
    Ok(Json(DataResponse::new(Page {
        items: Vec::new(),
        page: params.pagination.page(),
        limit: params.pagination.limit(),
        total: 0,
    })))
}

/// POST /api/v1/events
pub async fn create_event(
    ValidatedBody(input): ValidatedBody<PortfolioEvent>,
) -> AppResult<(StatusCode, Json<DataResponse<PortfolioEvent>>)> {
    tracing::info!(title = %input.title, category = %input.category, "Portfolio event accepted");
    Ok((StatusCode::CREATED, Json(DataResponse::new(input))))
}
