pub mod types;
pub mod guardrails;
pub mod pricing;
pub mod ref_golden;
pub mod render;
pub mod session;

// Errors of the input/config glue; the calculation itself is total.
pub mod error_catalog;
pub mod error;
