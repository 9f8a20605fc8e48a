//! Route definitions for the `/bookings` resource.

use axum::routing::{get, patch, post};
use axum::Router;
use shutterbook_core::validation::catalogue;

use super::validated;
use crate::handlers::bookings;

/// Routes mounted at `/bookings`.
///
/// ```text
/// GET    /              -> list_bookings  (?page, limit, status)
/// POST   /              -> create_booking
/// GET    /{id}          -> get_booking
/// PATCH  /{id}/status   -> update_booking_status
/// ```
pub fn router() -> Router {
    Router::new()
        .route(
            "/",
            validated(get(bookings::list_bookings), &catalogue::LIST_BOOKINGS)
                .merge(validated(post(bookings::create_booking), &catalogue::CREATE_BOOKING)),
        )
        .route(
            "/{id}",
            validated(get(bookings::get_booking), &catalogue::GET_BOOKING),
        )
        .route(
            "/{id}/status",
            validated(
                patch(bookings::update_booking_status),
                &catalogue::UPDATE_BOOKING_STATUS,
            ),
        )
}
