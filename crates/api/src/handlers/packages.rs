//! Handlers for the `/packages` resource.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use shutterbook_core::error::CoreError;

use crate::error::AppResult;
use crate::middleware::validate::{ValidatedBody, ValidatedPath, ValidatedQuery};
use crate::query::{IdPath, PackageListParams};
use crate::response::{DataResponse, Page};

/// A photography package as offered to customers.
#[derive(Debug, Deserialize, Serialize)]
pub struct PackageInput {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub duration_hours: Option<i64>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Partial update for `PUT /packages/{id}`; absent fields stay unchanged.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PackageUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub duration_hours: Option<i64>,
    pub features: Option<Vec<String>>,
}

/// GET /api/v1/packages
///
/// List packages, optionally filtered by category and featured flag.
pub async fn list_packages(
    ValidatedQuery(params): ValidatedQuery<PackageListParams>,
) -> AppResult<Json<DataResponse<Page<PackageInput>>>> {
    tracing::debug!(
        page = params.pagination.page(),
        limit = params.pagination.limit(),
        category = ?params.category,
        featured = ?params.featured,
        "Listing packages"
    );
    Ok(Json(DataResponse::new(Page {
        items: Vec::new(),
        page: params.pagination.page(),
        limit: params.pagination.limit(),
        total: 0,
    })))
}

/// POST /api/v1/packages
pub async fn create_package(
    ValidatedBody(input): ValidatedBody<PackageInput>,
) -> AppResult<(StatusCode, Json<DataResponse<PackageInput>>)> {
    tracing::info!(name = %input.name, category = %input.category, "Package accepted");
    Ok((StatusCode::CREATED, Json(DataResponse::new(input))))
}

/// GET /api/v1/packages/{id}
pub async fn get_package(
    ValidatedPath(path): ValidatedPath<IdPath>,
) -> AppResult<Json<DataResponse<PackageInput>>> {
    Err(CoreError::NotFound {
        entity: "Package",
        id: path.id,
    }
    .into())
}

/// PUT /api/v1/packages/{id}
pub async fn update_package(
    ValidatedPath(path): ValidatedPath<IdPath>,
    ValidatedBody(changes): ValidatedBody<PackageUpdate>,
) -> AppResult<Json<DataResponse<PackageInput>>> {
    tracing::debug!(id = %path.id, ?changes, "Package update requested");
    Err(CoreError::NotFound {
        entity: "Package",
        id: path.id,
    }
    .into())
}
