use std::collections::BTreeMap;

pub const MINIMUM_LOAN_AMOUNT: i64 = 2000;
pub const MAXIMUM_LOAN_AMOUNT: i64 = 10000;
pub const MINIMUM_LOAN_PERIOD: i32 = 12;
pub const MAXIMUM_LOAN_PERIOD: i32 = 48;
pub const MINIMUM_CREDIT_SCORE: f64 = 0.1;
pub const MINIMUM_AGE: u32 = 18;
/// Exclusive upper bound on applicant age.
pub const EXPECTED_LIFESPAN: u32 = 78;
pub const AMOUNT_STEP: i64 = 5;

/// Bounds and segment table every decision is evaluated against.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionPolicy {
    pub minimum_amount: i64,
    pub maximum_amount: i64,
    pub minimum_period: i32,
    pub maximum_period: i32,
    pub minimum_credit_score: f64,
    pub minimum_age: u32,
    pub expected_lifespan: u32,
    pub amount_step: i64,
    credit_modifiers: BTreeMap<u16, i32>,
}

impl DecisionPolicy {
    /// Production constants and the segment table they were tuned for.
    pub fn standard() -> Self {
        let credit_modifiers = [(965, 0), (976, 100), (987, 300), (998, 1000), (115, 100)]
            .into_iter()
            .collect();

        Self {
            minimum_amount: MINIMUM_LOAN_AMOUNT,
            maximum_amount: MAXIMUM_LOAN_AMOUNT,
            minimum_period: MINIMUM_LOAN_PERIOD,
            maximum_period: MAXIMUM_LOAN_PERIOD,
            minimum_credit_score: MINIMUM_CREDIT_SCORE,
            minimum_age: MINIMUM_AGE,
            expected_lifespan: EXPECTED_LIFESPAN,
            amount_step: AMOUNT_STEP,
            credit_modifiers,
        }
    }

    /// Replace the segment table, keeping every bound.
    pub fn with_credit_modifiers<I>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = (u16, i32)>,
    {
        self.credit_modifiers = modifiers.into_iter().collect();
        self
    }

    /// Modifier for a segment, or `None` when the segment carries no loan offer.
    pub fn credit_modifier(&self, segment: u16) -> Option<i32> {
        self.credit_modifiers.get(&segment).copied()
    }

    pub fn amount_in_bounds(&self, amount: i64) -> bool {
        (self.minimum_amount..=self.maximum_amount).contains(&amount)
    }

    pub fn period_in_bounds(&self, period: i32) -> bool {
        (self.minimum_period..=self.maximum_period).contains(&period)
    }

    pub fn age_in_bounds(&self, age: u32) -> bool {
        age >= self.minimum_age && age < self.expected_lifespan
    }
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
