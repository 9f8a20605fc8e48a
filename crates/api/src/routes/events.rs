//! Route definitions for the `/events` portfolio resource.

use axum::routing::{get, post};
use axum::Router;
use shutterbook_core::validation::catalogue;

use super::validated;
use crate::handlers::events;

/// Routes mounted at `/events`.
///
/// ```text
/// GET    /   -> list_events  (?page, limit, category)
/// POST   /   -> create_event
/// ```
pub fn router() -> Router {
    Router::new().route(
        "/",
        validated(get(events::list_events), &catalogue::LIST_EVENTS)
            .merge(validated(post(events::create_event), &catalogue::CREATE_EVENT)),
    )
}
