use serde::{Deserialize, Serialize};

/// Inbound request for a loan decision, as submitted by the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    pub personal_code: String,
    pub loan_amount: i64,
    pub loan_period: i32,
}

impl DecisionRequest {
    pub fn new(personal_code: impl Into<String>, loan_amount: i64, loan_period: i32) -> Self {
        Self {
            personal_code: personal_code.into(),
            loan_amount,
            loan_period,
        }
    }
}

/// Approved loan amount and period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDecision {
    pub loan_amount: i32,
    pub loan_period: i32,
}

/// Result of the approval search. Running out of candidates is an ordinary outcome,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Approved(LoanDecision),
    NotFound,
}
