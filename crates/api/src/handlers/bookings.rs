//! Handlers for the `/bookings` resource.
//!
//! New bookings always start out `PENDING`; the status endpoint moves them
//! through the rest of [`shutterbook_core::types::BOOKING_STATUSES`].

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use shutterbook_core::error::CoreError;
use shutterbook_core::types::{Cuid, INITIAL_BOOKING_STATUS};

use crate::error::AppResult;
use crate::middleware::validate::{ValidatedBody, ValidatedPath, ValidatedQuery};
use crate::query::{BookingListParams, IdPath};
use crate::response::{DataResponse, Page};

/// Request body for `POST /bookings`.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub package_id: Cuid,
    pub event_date: String,
    pub event_location: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub notes: Option<String>,
}

/// A booking as returned to the client.
#[derive(Debug, Serialize)]
pub struct Booking {
    pub package_id: Cuid,
    pub event_date: String,
    pub event_location: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub notes: Option<String>,
    pub status: &'static str,
}

impl From<CreateBookingRequest> for Booking {
    fn from(input: CreateBookingRequest) -> Self {
        Self {
            package_id: input.package_id,
            event_date: input.event_date,
            event_location: input.event_location,
            customer_name: input.customer_name,
            customer_email: input.customer_email,
            customer_phone: input.customer_phone,
            notes: input.notes,
            status: INITIAL_BOOKING_STATUS,
        }
    }
}

/// Request body for `PATCH /bookings/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// POST /api/v1/bookings
pub async fn create_booking(
    ValidatedBody(input): ValidatedBody<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Booking>>)> {
    tracing::info!(
        package_id = %input.package_id,
        event_date = %input.event_date,
        "Booking request accepted"
    );
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(Booking::from(input))),
    ))
}

/// GET /api/v1/bookings
///
/// List bookings, optionally filtered by status.
pub async fn list_bookings(
    ValidatedQuery(params): ValidatedQuery<BookingListParams>,
) -> AppResult<Json<DataResponse<Page<Booking>>>> {
    tracing::debug!(
        page = params.pagination.page(),
        limit = params.pagination.limit(),
        status = ?params.status,
        "Listing bookings"
    );
    Ok(Json(DataResponse::new(Page {
        items: Vec::new(),
        page: params.pagination.page(),
        limit: params.pagination.limit(),
        total: 0,
    })))
}

/// GET /api/v1/bookings/{id}
pub async fn get_booking(
    ValidatedPath(path): ValidatedPath<IdPath>,
) -> AppResult<Json<DataResponse<Booking>>> {
    Err(CoreError::NotFound {
        entity: "Booking",
        id: path.id,
    }
    .into())
}

/// PATCH /api/v1/bookings/{id}/status
pub async fn update_booking_status(
    ValidatedPath(path): ValidatedPath<IdPath>,
    ValidatedBody(input): ValidatedBody<UpdateStatusRequest>,
) -> AppResult<Json<DataResponse<Booking>>> {
    tracing::debug!(id = %path.id, status = %input.status, "Booking status change requested");
    Err(CoreError::NotFound {
        entity: "Booking",
        id: path.id,
    }
    .into())
}
