use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use super::domain::{DecisionRequest, LoanDecision};
use super::service::{DecisionError, LoanDecisionService};

/// Response body for the decision endpoint. Exactly one of the decision fields or
/// `error_message` is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResponse {
    pub loan_amount: Option<i32>,
    pub loan_period: Option<i32>,
    pub error_message: Option<String>,
}

impl From<LoanDecision> for DecisionResponse {
    fn from(decision: LoanDecision) -> Self {
        Self {
            loan_amount: Some(decision.loan_amount),
            loan_period: Some(decision.loan_period),
            error_message: None,
        }
    }
}

impl From<&DecisionError> for DecisionResponse {
    fn from(error: &DecisionError) -> Self {
        Self {
            loan_amount: None,
            loan_period: None,
            error_message: Some(error.public_message().to_string()),
        }
    }
}

impl IntoResponse for DecisionError {
    fn into_response(self) -> Response {
        if let DecisionError::Unexpected(detail) = &self {
            error!(%detail, "loan decision failed unexpectedly");
        }
        (self.status(), Json(DecisionResponse::from(&self))).into_response()
    }
}

/// Router builder exposing the loan decision endpoint to browser clients on any origin.
pub fn decision_router(service: Arc<LoanDecisionService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/loan/decision", post(decision_handler))
        .layer(cors)
        .with_state(service)
}

pub(crate) async fn decision_handler(
    State(service): State<Arc<LoanDecisionService>>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return DecisionError::Unexpected(rejection.body_text()).into_response();
        }
    };

    match service.decide(&request) {
        Ok(decision) => (StatusCode::OK, Json(DecisionResponse::from(decision))).into_response(),
        Err(error) => error.into_response(),
    }
}
