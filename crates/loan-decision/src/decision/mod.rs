//! Loan decisioning: policy constants, the credit score search, personal code handling,
//! and the service and router that put them in front of customers.

pub mod batch;
pub mod domain;
pub mod engine;
pub mod identity;
pub mod policy;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use batch::{BatchImportError, BatchRequestImporter};
pub use domain::{DecisionRequest, LoanDecision, SearchOutcome};
pub use engine::{credit_score, DecisionEngine};
pub use identity::{PersonalCode, PersonalCodeError};
pub use policy::DecisionPolicy;
pub use router::{decision_router, DecisionResponse};
pub use service::{DecisionError, LoanDecisionService};
