use std::sync::Arc;

use super::domain::{LoanDecision, SearchOutcome};
use super::policy::DecisionPolicy;

/// Credit score for a modifier, amount and period.
///
/// Strictly increasing in `modifier` and `period`, strictly decreasing in `amount`; the
/// search below depends on that ordering.
pub fn credit_score(modifier: i32, amount: i64, period: i32) -> f64 {
    (f64::from(modifier) / amount as f64) * f64::from(period) / 10.0
}

/// Stateless search for the largest approvable amount and shortest acceptable period.
///
/// The modifier is passed per call and never stored, so one engine can serve any number
/// of concurrent requests.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    policy: Arc<DecisionPolicy>,
}

impl DecisionEngine {
    pub fn new(policy: Arc<DecisionPolicy>) -> Self {
        Self { policy }
    }

    pub fn decide(&self, modifier: i32, amount: i64, period: i32) -> SearchOutcome {
        if modifier <= 0 {
            return SearchOutcome::NotFound;
        }

        if credit_score(modifier, amount, period) >= self.policy.minimum_credit_score {
            self.raise_amount(modifier, amount, period)
        } else {
            self.lower_amount_or_extend(modifier, amount, period)
        }
    }

    /// Grows the amount while the score stays strictly above the threshold. The amount
    /// returned is the first one that no longer clears it, clamped to the maximum.
    fn raise_amount(&self, modifier: i32, mut amount: i64, period: i32) -> SearchOutcome {
        let policy = &*self.policy;

        while amount < policy.maximum_amount
            && credit_score(modifier, amount, period) > policy.minimum_credit_score
        {
            amount += policy.amount_step;
        }

        SearchOutcome::Approved(LoanDecision {
            loan_amount: narrow(amount.min(policy.maximum_amount)),
            loan_period: period,
        })
    }

    /// Period ascending, amount descending from the requested figure. First hit wins.
    ///
    /// Each step is clamped to the minimum amount, and the sweep for a period ends once
    /// the minimum has been scored.
    fn lower_amount_or_extend(
        &self,
        modifier: i32,
        requested_amount: i64,
        requested_period: i32,
    ) -> SearchOutcome {
        let policy = &*self.policy;

        for period in requested_period..=policy.maximum_period {
            let mut amount = requested_amount;
            loop {
                amount = (amount - policy.amount_step).max(policy.minimum_amount);
                if credit_score(modifier, amount, period) >= policy.minimum_credit_score {
                    return SearchOutcome::Approved(LoanDecision {
                        loan_amount: narrow(amount),
                        loan_period: period,
                    });
                }
                if amount == policy.minimum_amount {
                    break;
                }
            }
        }

        SearchOutcome::NotFound
    }
}

fn narrow(amount: i64) -> i32 {
    i32::try_from(amount).unwrap_or(i32::MAX)
}
