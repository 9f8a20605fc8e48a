//! Route definitions for the `/auth` resource.

use axum::routing::post;
use axum::Router;
use shutterbook_core::validation::catalogue;

use super::validated;
use crate::handlers::auth;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /register    -> register
/// ```
pub fn router() -> Router {
    Router::new().route(
        "/register",
        validated(post(auth::register), &catalogue::REGISTER),
    )
}
