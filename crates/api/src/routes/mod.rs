pub mod auth;
pub mod bookings;
pub mod contact;
pub mod events;
pub mod health;
pub mod packages;

use axum::routing::MethodRouter;
use axum::Router;
use shutterbook_core::validation::RuleChain;

use crate::middleware::validate::validate_request;

/// Build the `/api/v1` route tree.
///
/// Every endpoint runs its rule chain before the handler; a rejected
/// request never reaches it.
///
/// ```text
/// /auth/register                                   register (POST)
///
/// /packages                                        list, create
/// /packages/{id}                                   get, update (PUT)
///
/// /bookings                                        list, create
/// /bookings/{id}                                   get
/// /bookings/{id}/status                            update status (PATCH)
///
/// /events                                          list, create
///
/// /contact                                         submit (POST)
/// ```
pub fn api_routes() -> Router {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/packages", packages::router())
        .nest("/bookings", bookings::router())
        .nest("/events", events::router())
        .nest("/contact", contact::router())
}

/// Guard a method router with a rule chain.
///
/// Uses `route_layer` so the chain only runs for matched routes and path
/// captures are available to it.
pub(crate) fn validated(method: MethodRouter, chain: &'static RuleChain) -> MethodRouter {
    method.route_layer(axum::middleware::from_fn_with_state(chain, validate_request))
}
