use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use chrono::NaiveDate;

use crate::decision::router::DecisionResponse;
use crate::decision::{DecisionPolicy, DecisionRequest, LoanDecisionService};

/// Segment 0965, modifier 0.
pub(super) const DEBT_CODE: &str = "49002010965";
/// Segment 0976, modifier 100.
pub(super) const SEGMENT_ONE_CODE: &str = "49002010976";
/// Segment 0987, modifier 300.
pub(super) const SEGMENT_TWO_CODE: &str = "49002010987";
/// Segment 0998, modifier 1000.
pub(super) const SEGMENT_THREE_CODE: &str = "49002010998";
/// Segment 0000, absent from the table.
pub(super) const UNMAPPED_CODE: &str = "49001040000";
/// Born 2010-01-16.
pub(super) const MINOR_CODE: &str = "61001160998";
/// Born 2024-01-08.
pub(super) const INFANT_CODE: &str = "62401080998";
/// Born 1948-01-03.
pub(super) const SENIOR_CODE: &str = "34801030998";

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

pub(super) fn service() -> LoanDecisionService {
    LoanDecisionService::new(DecisionPolicy::standard())
}

pub(super) fn shared_service() -> Arc<LoanDecisionService> {
    Arc::new(service())
}

pub(super) fn request(code: &str, amount: i64, period: i32) -> DecisionRequest {
    DecisionRequest::new(code, amount, period)
}

pub(super) async fn response_body(response: Response) -> DecisionResponse {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("decision response json")
}
