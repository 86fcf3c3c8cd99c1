//! Loan decision engine and the HTTP surface that serves it.
//!
//! The [`decision`] module owns the business rules: the policy constants, the credit
//! score search, personal code handling and the request-level service. The remaining
//! modules carry the process plumbing shared with the API binary.

pub mod config;
pub mod decision;
pub mod error;
pub mod telemetry;
