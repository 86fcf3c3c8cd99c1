use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use super::domain::{DecisionRequest, LoanDecision, SearchOutcome};
use super::engine::DecisionEngine;
use super::identity::{PersonalCode, PersonalCodeError};
use super::policy::DecisionPolicy;

/// Service composing input validation, age and segment checks, and the decision engine.
#[derive(Debug, Clone)]
pub struct LoanDecisionService {
    policy: Arc<DecisionPolicy>,
    engine: Arc<DecisionEngine>,
}

impl LoanDecisionService {
    pub fn new(policy: DecisionPolicy) -> Self {
        let policy = Arc::new(policy);
        let engine = Arc::new(DecisionEngine::new(policy.clone()));
        Self { policy, engine }
    }

    /// Decide a request using today's local date for the age check.
    pub fn decide(&self, request: &DecisionRequest) -> Result<LoanDecision, DecisionError> {
        self.decide_on(request, Local::now().date_naive())
    }

    /// Decide a request, computing the applicant's age as of `today`.
    pub fn decide_on(
        &self,
        request: &DecisionRequest,
        today: NaiveDate,
    ) -> Result<LoanDecision, DecisionError> {
        let code = PersonalCode::parse(&request.personal_code)?;

        if !self.policy.amount_in_bounds(request.loan_amount) {
            return Err(DecisionError::InvalidLoanAmount(request.loan_amount));
        }
        if !self.policy.period_in_bounds(request.loan_period) {
            return Err(DecisionError::InvalidLoanPeriod(request.loan_period));
        }

        let age = code.age_on(today);
        if !age.is_some_and(|age| self.policy.age_in_bounds(age)) {
            return Err(DecisionError::InvalidAge(age));
        }

        let segment = code.segment();
        let modifier = self
            .policy
            .credit_modifier(segment)
            .ok_or(DecisionError::NoValidLoan)?;
        debug!(segment, modifier, "resolved credit modifier");

        match self
            .engine
            .decide(modifier, request.loan_amount, request.loan_period)
        {
            SearchOutcome::Approved(decision) => {
                info!(
                    requested_amount = request.loan_amount,
                    requested_period = request.loan_period,
                    approved_amount = decision.loan_amount,
                    approved_period = decision.loan_period,
                    "loan approved"
                );
                Ok(decision)
            }
            SearchOutcome::NotFound => {
                debug!(segment, modifier, "no qualifying amount or period");
                Err(DecisionError::NoValidLoan)
            }
        }
    }
}

/// Error raised while deciding a loan request.
#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    #[error("invalid personal code: {0}")]
    InvalidPersonalCode(#[from] PersonalCodeError),
    #[error("loan amount {0} is outside the allowed range")]
    InvalidLoanAmount(i64),
    #[error("loan period {0} is outside the allowed range")]
    InvalidLoanPeriod(i32),
    #[error("applicant age {0:?} is outside the allowed range")]
    InvalidAge(Option<u32>),
    #[error("no valid loan found")]
    NoValidLoan,
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl DecisionError {
    pub fn status(&self) -> StatusCode {
        match self {
            DecisionError::InvalidPersonalCode(_)
            | DecisionError::InvalidLoanAmount(_)
            | DecisionError::InvalidLoanPeriod(_)
            | DecisionError::InvalidAge(_) => StatusCode::BAD_REQUEST,
            DecisionError::NoValidLoan => StatusCode::NOT_FOUND,
            DecisionError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the customer. Internal detail stays in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            DecisionError::InvalidPersonalCode(_) => "Invalid personal ID code!",
            DecisionError::InvalidLoanAmount(_) => "Invalid loan amount!",
            DecisionError::InvalidLoanPeriod(_) => "Invalid loan period!",
            DecisionError::InvalidAge(_) => "Invalid age for loan.",
            DecisionError::NoValidLoan => "No valid loan found!",
            DecisionError::Unexpected(_) => "An unexpected error occurred",
        }
    }
}
