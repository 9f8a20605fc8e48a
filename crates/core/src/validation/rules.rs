//! Field rule, rule chain and outcome types.

use serde::Serialize;

use super::checks::Check;
use super::evaluator::evaluate_rules;
use super::request::{FieldRef, RequestData};

/// One declared constraint on one field.
///
/// Rules are plain immutable data, so whole chains can live in `static`s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub field: FieldRef,
    pub check: Check,
    pub message: &'static str,
    /// Skip the rule when the field is absent or blank.
    pub optional: bool,
}

impl FieldRule {
    pub const fn new(field: FieldRef, check: Check, message: &'static str) -> Self {
        Self {
            field,
            check,
            message,
            optional: false,
        }
    }

    pub const fn body(name: &'static str, check: Check, message: &'static str) -> Self {
        Self::new(FieldRef::body(name), check, message)
    }

    pub const fn query(name: &'static str, check: Check, message: &'static str) -> Self {
        Self::new(FieldRef::query(name), check, message)
    }

    pub const fn path(name: &'static str, check: Check, message: &'static str) -> Self {
        Self::new(FieldRef::path(name), check, message)
    }

    pub const fn optional(self) -> Self {
        Self {
            optional: true,
            ..self
        }
    }
}

/// An endpoint's ordered rule list. The name only labels log output.
#[derive(Debug)]
pub struct RuleChain {
    pub name: &'static str,
    pub rules: &'static [FieldRule],
}

impl RuleChain {
    /// Run every rule against `request`, normalizing it in place.
    pub fn run(&self, request: &mut RequestData) -> ValidationOutcome {
        evaluate_rules(self.rules, request)
    }
}

/// A single rule failure as reported to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    pub field: String,
    pub message: String,
}

impl FieldFailure {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<&FieldRule> for FieldFailure {
    fn from(rule: &FieldRule) -> Self {
        Self::new(rule.field.to_string(), rule.message)
    }
}

/// Failures from one chain run, in rule-declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    failures: Vec<FieldFailure>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }

    pub fn into_failures(self) -> Vec<FieldFailure> {
        self.failures
    }

    pub(crate) fn record(&mut self, rule: &FieldRule) {
        self.failures.push(FieldFailure::from(rule));
    }
}
