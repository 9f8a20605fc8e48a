use axum::routing::post;
use axum::Router;
use shutterbook_core::validation::catalogue;

use super::validated;
use crate::handlers::contact;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST /   -> submit_contact
/// ```
pub fn router() -> Router {
    Router::new().route("/", validated(post(contact::submit_contact), &catalogue::CONTACT))
}
