//! HTTP handlers, one module per resource.
//!
//! Handlers only run after the route's rule chain accepted the request, so
//! every value they read through the `Validated*` extractors is already
//! checked and normalized.

pub mod auth;
pub mod bookings;
pub mod contact;
pub mod events;
pub mod packages;
