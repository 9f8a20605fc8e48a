//! Route definitions for the `/packages` resource.

use axum::routing::{get, post, put};
use axum::Router;
use shutterbook_core::validation::catalogue;

use super::validated;
use crate::handlers::packages;

/// Routes mounted at `/packages`.
///
/// ```text
/// GET    /       -> list_packages  (?page, limit, category, featured)
/// POST   /       -> create_package
/// GET    /{id}   -> get_package
/// PUT    /{id}   -> update_package
/// ```
pub fn router() -> Router {
    Router::new()
        .route(
            "/",
            validated(get(packages::list_packages), &catalogue::LIST_PACKAGES)
                .merge(validated(post(packages::create_package), &catalogue::CREATE_PACKAGE)),
        )
        .route(
            "/{id}",
            validated(get(packages::get_package), &catalogue::GET_PACKAGE)
                .merge(validated(put(packages::update_package), &catalogue::UPDATE_PACKAGE)),
        )
}
