//! Rule-chain evaluator. Pure logic, no I/O.

use super::checks::Verdict;
use super::request::{is_absent, RequestData};
use super::rules::{FieldRule, ValidationOutcome};

/// Evaluate every rule, in order, against the current state of `request`.
///
/// There is no short-circuit: a failing rule is recorded and evaluation
/// continues, so the caller sees every violation at once. Normalized values
/// are written back before the next rule runs, and remain in `request` for
/// the handler.
pub fn evaluate_rules(rules: &[FieldRule], request: &mut RequestData) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    for rule in rules {
        let value = request.get(&rule.field);
        if rule.optional && is_absent(value) {
            continue;
        }

        match rule.check.apply(value) {
            Verdict::Pass => {}
            Verdict::Replace(normalized) => {
                request.replace(&rule.field, normalized);
            }
            Verdict::Fail => outcome.record(rule),
        }
    }

    outcome
}
