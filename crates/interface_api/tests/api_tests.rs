//! HTTP API tests
//!
//! Drive the router in-process with `oneshot` over mock collaborators.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use core_kernel::{CaseId, HealthCheckable};
use interface_api::{create_router, error::ErrorResponse, AppState};
use test_utils::{CaseFixtures, FulfilmentHarness, IdFixtures, ProductFixtures, StringFixtures};

fn app(harness: &FulfilmentHarness) -> Router {
    create_router(AppState {
        fulfilment_service: harness.fulfilment_service.clone(),
        case_service: harness.case_service.clone(),
        health_checks: vec![
            harness.case_reader.clone() as Arc<dyn HealthCheckable>,
            harness.catalog.clone() as Arc<dyn HealthCheckable>,
            harness.publisher.clone() as Arc<dyn HealthCheckable>,
        ],
    })
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

fn standard_harness() -> (FulfilmentHarness, CaseId) {
    let case = CaseFixtures::household_in_england();
    let id = case.id;
    let harness = FulfilmentHarness::new(
        vec![case, CaseFixtures::establishment()],
        vec![ProductFixtures::household_sms("UACHHT1")],
    );
    (harness, id)
}

mod fulfilment {
    use super::*;

    #[tokio::test]
    async fn test_sms_request_publishes_and_returns_empty_ok() {
        let (harness, case_id) = standard_harness();

        let response = app(&harness)
            .oneshot(post_json(
                "/fulfilment-request/sms",
                json!({
                    "caseId": case_id.to_string(),
                    "fulfilmentCode": "UACHHT1",
                    "telNo": StringFixtures::tel_no(),
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_bytes(response).await.is_empty());

        let published = harness.published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].fulfilment_request().case_id, case_id);
    }

    #[tokio::test]
    async fn test_case_path_route_accepts_telephone_number_alias() {
        let (harness, case_id) = standard_harness();

        let response = app(&harness)
            .oneshot(post_json(
                &format!("/cases/{case_id}/fulfilments/sms"),
                json!({
                    "fulfilmentCode": "UACHHT1",
                    "telephoneNumber": "+447700900000",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let published = harness.published();
        assert_eq!(
            published[0].fulfilment_request().contact.tel_no.as_deref(),
            Some("+447700900000")
        );
    }

    #[tokio::test]
    async fn test_unknown_case_is_404() {
        let (harness, _) = standard_harness();

        let response = app(&harness)
            .oneshot(post_json(
                "/fulfilment-request/sms",
                json!({
                    "caseId": CaseId::new().to_string(),
                    "fulfilmentCode": "UACHHT1",
                    "telNo": StringFixtures::tel_no(),
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body.error, "not_found");
        assert!(body.message.contains("Case not found"));
        assert!(harness.published().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_product_is_400() {
        let (harness, case_id) = standard_harness();

        let response = app(&harness)
            .oneshot(post_json(
                "/fulfilment-request/sms",
                json!({
                    "caseId": case_id.to_string(),
                    "fulfilmentCode": "NOPE",
                    "telNo": StringFixtures::tel_no(),
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body.error, "bad_request");
        assert!(body.message.contains("Compatible product cannot be found"));
    }

    #[tokio::test]
    async fn test_publish_failure_is_500() {
        let (harness, case_id) = standard_harness();
        harness.publisher.set_failing(true);

        let response = app(&harness)
            .oneshot(post_json(
                "/fulfilment-request/sms",
                json!({
                    "caseId": case_id.to_string(),
                    "fulfilmentCode": "UACHHT1",
                    "telNo": StringFixtures::tel_no(),
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_invalid_body_is_422_with_field_details() {
        let (harness, case_id) = standard_harness();

        let response = app(&harness)
            .oneshot(post_json(
                "/fulfilment-request/sms",
                json!({
                    "caseId": case_id.to_string(),
                    "fulfilmentCode": "",
                    "telNo": "not a number",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body.error, "validation_error");
        let details = body.details.unwrap();
        assert!(details.iter().any(|d| d.starts_with("fulfilment_code")));
        assert!(details.iter().any(|d| d.starts_with("tel_no")));
        assert!(harness.catalog.searches().is_empty());
        assert!(harness.published().is_empty());
    }
}

mod cases {
    use super::*;

    #[tokio::test]
    async fn test_household_cases_by_uprn() {
        let (harness, case_id) = standard_harness();

        let response = app(&harness)
            .oneshot(get(&format!(
                "/cases/by-property-reference/{}",
                IdFixtures::uprn()
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        let cases = body.as_array().unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0]["caseId"], case_id.to_string());
        assert_eq!(cases[0]["addressType"], "HH");
    }

    #[tokio::test]
    async fn test_unknown_uprn_is_empty_list() {
        let (harness, _) = standard_harness();

        let response = app(&harness)
            .oneshot(get("/cases/by-property-reference/1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_uprn_is_400() {
        let (harness, _) = standard_harness();

        for uprn in ["abc", "99999999999999"] {
            let response = app(&harness)
                .oneshot(get(&format!("/cases/by-property-reference/{uprn}")))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let (harness, _) = standard_harness();

        let response = app(&harness).oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_readiness_reflects_adapters() {
        let (harness, _) = standard_harness();

        let response = app(&harness).oneshot(get("/health/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        harness.case_reader.set_unavailable(true);
        let response = app(&harness).oneshot(get("/health/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["status"], "not_ready");
        assert_eq!(body["adapters"].as_array().unwrap().len(), 3);
    }
}
