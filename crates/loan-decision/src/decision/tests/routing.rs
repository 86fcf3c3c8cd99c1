use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::json;
use tower::ServiceExt;

use crate::decision::router::{decision_handler, DecisionResponse};
use crate::decision::decision_router;

fn post_decision(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/loan/decision")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request builds")
}

#[tokio::test]
async fn decision_endpoint_returns_approved_amount_and_period() {
    let body = json!({
        "personalCode": SEGMENT_THREE_CODE,
        "loanAmount": 4000,
        "loanPeriod": 12,
    });

    let response = decision_router(shared_service())
        .oneshot(post_decision(body.to_string()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_body(response).await,
        DecisionResponse {
            loan_amount: Some(10000),
            loan_period: Some(12),
            error_message: None,
        }
    );
}

#[tokio::test]
async fn decision_endpoint_returns_not_found_for_debt_segment() {
    let body = json!({
        "personalCode": DEBT_CODE,
        "loanAmount": 4000,
        "loanPeriod": 12,
    });

    let response = decision_router(shared_service())
        .oneshot(post_decision(body.to_string()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_body(response).await;
    assert_eq!(body.error_message.as_deref(), Some("No valid loan found!"));
    assert!(body.loan_amount.is_none());
    assert!(body.loan_period.is_none());
}

#[tokio::test]
async fn decision_handler_maps_validation_failures_to_bad_request() {
    let cases = [
        (request("12345", 4000, 12), "Invalid personal ID code!"),
        (request(SEGMENT_THREE_CODE, 1000, 12), "Invalid loan amount!"),
        (request(SEGMENT_THREE_CODE, 4000, 60), "Invalid loan period!"),
        (request(INFANT_CODE, 4000, 12), "Invalid age for loan."),
    ];

    for (request, message) in cases {
        let response = decision_handler(State(shared_service()), Ok(Json(request))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{message}");
        let body = response_body(response).await;
        assert_eq!(body.error_message.as_deref(), Some(message));
    }
}

#[tokio::test]
async fn unreadable_body_is_reported_without_detail() {
    let response = decision_router(shared_service())
        .oneshot(post_decision("{\"personalCode\": 4900".to_string()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_body(response).await;
    assert_eq!(
        body.error_message.as_deref(),
        Some("An unexpected error occurred")
    );
}

#[tokio::test]
async fn missing_fields_are_reported_without_detail() {
    let body = json!({ "personalCode": SEGMENT_THREE_CODE });

    let response = decision_router(shared_service())
        .oneshot(post_decision(body.to_string()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn preflight_allows_cross_origin_callers() {
    let preflight = Request::builder()
        .method("OPTIONS")
        .uri("/loan/decision")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .expect("request builds");

    let response = decision_router(shared_service())
        .oneshot(preflight)
        .await
        .expect("router responds");

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn decision_responses_carry_cors_headers() {
    let mut request = post_decision(
        json!({
            "personalCode": SEGMENT_THREE_CODE,
            "loanAmount": 4000,
            "loanPeriod": 12,
        })
        .to_string(),
    );
    request.headers_mut().insert(
        header::ORIGIN,
        header::HeaderValue::from_static("http://localhost:5173"),
    );

    let response = decision_router(shared_service())
        .oneshot(request)
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
