//! Gold purchase pricing: turns a rate, making charges, GST rates and the
//! weight split between a savings scheme and a regular purchase into a
//! payable breakdown.

pub mod config;
pub mod gold;
pub mod telemetry;

pub use gold::pricing::calculate;
pub use gold::types::{PricingField, PricingInput, PricingOutput, RawInput};
