//! Result aggregator: turns a [`ValidationOutcome`] into a terminal decision.
//!
//! A rejection is always the caller's fault, so the HTTP layer maps it to a
//! 400-class response and never to a server error.

use serde::Serialize;

use super::rules::{FieldFailure, ValidationOutcome};

/// Summary message carried by every rejection.
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

/// Wire shape of a rejection:
/// `{ "success": false, "message": "Validation failed", "errors": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectionPayload {
    pub success: bool,
    pub message: String,
    pub errors: Vec<FieldFailure>,
}

/// The one validation error kind: a non-empty list of field failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed: {} field error(s)", .errors.len())]
pub struct ValidationFailure {
    errors: Vec<FieldFailure>,
}

impl ValidationFailure {
    /// Returns `None` for an empty list; a failure always names a field.
    pub fn new(errors: Vec<FieldFailure>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[FieldFailure] {
        &self.errors
    }

    pub fn payload(&self) -> RejectionPayload {
        RejectionPayload {
            success: false,
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            errors: self.errors.clone(),
        }
    }
}

/// Whether the request may reach its handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Reject(ValidationFailure),
}

/// Decide on an outcome. Performs no I/O; the same outcome always yields the
/// same decision.
pub fn decide(outcome: &ValidationOutcome) -> Decision {
    match ValidationFailure::new(outcome.failures().to_vec()) {
        Some(failure) => Decision::Reject(failure),
        None => Decision::Proceed,
    }
}

impl ValidationOutcome {
    /// Consuming form of [`decide`] for `?`-style callers.
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        match ValidationFailure::new(self.into_failures()) {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}
