//! Request middleware and the extractors that pair with it.
//!
//! - [`validate::validate_request`] -- Runs a route's rule chain before its handler.
//! - [`validate::ValidatedBody`] -- Normalized body fields.
//! - [`validate::ValidatedQuery`] -- Normalized query parameters.
//! - [`validate::ValidatedPath`] -- Normalized path parameters.

pub mod validate;
