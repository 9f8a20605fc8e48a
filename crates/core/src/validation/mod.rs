//! Request validation pipeline.
//!
//! A request is run through a static [`RuleChain`](rules::RuleChain): every
//! [`FieldRule`](rules::FieldRule) is evaluated in declaration order, rules
//! that normalize (trim, case-fold, parse) rewrite the request in place, and
//! every failure is collected. The [`aggregator`] then turns the collected
//! outcome into a proceed/reject decision.

pub mod aggregator;
pub mod catalogue;
pub mod checks;
pub mod evaluator;
pub mod request;
pub mod rules;

pub use aggregator::{decide, Decision, RejectionPayload, ValidationFailure};
pub use checks::{Check, Verdict};
pub use evaluator::evaluate_rules;
pub use request::{FieldRef, Location, RequestData};
pub use rules::{FieldFailure, FieldRule, RuleChain, ValidationOutcome};
