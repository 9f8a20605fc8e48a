//! Shutterbook domain core.
//!
//! Pure logic shared by the API server: the request validation pipeline
//! (field rules, the rule-chain evaluator and the result aggregator), the
//! declared rule catalogue for every endpoint family, and the core error type.
//! Nothing in this crate performs I/O.

pub mod error;
pub mod types;
pub mod validation;
