//! End-to-end integration tests for the leaddesk HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! LeadQuery -> HTTP response. Each test builds a fresh router over the
//! built-in seed and uses `tower::ServiceExt::oneshot` to send requests
//! without starting a network server.

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use leaddesk_server::router::build_router;
use leaddesk_server::state::{AppState, DEFAULT_ALLOWED_ORIGIN};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Creates a fresh router over the built-in 33-lead seed.
fn test_app() -> Router {
    build_router(AppState::seeded())
}

/// Sends a bodyless request with the given method and returns the response.
async fn send(app: &Router, method: &str, path: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Sends a GET request and returns (status, json).
async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let response = send(app, "GET", path).await;
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

/// Extracts the lead ids from a `/api/leads` response body.
fn lead_ids(body: &serde_json::Value) -> Vec<u64> {
    body["leads"]
        .as_array()
        .expect("response has a leads array")
        .iter()
        .map(|lead| lead["id"].as_u64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// GET /api/leads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn default_listing_returns_first_ten_leads() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/leads").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(lead_ids(&body), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(
        body["meta"],
        json!({ "totalRecords": 33, "currentPage": 1, "totalPages": 4 })
    );
}

#[tokio::test]
async fn leads_use_camel_case_wire_fields() {
    let app = test_app();
    let (_, body) = get_json(&app, "/api/leads?limit=1").await;

    assert_eq!(
        body["leads"][0],
        json!({
            "id": 1,
            "name": "Srinivas Ram",
            "location": "Hyderabad",
            "assignedOn": 1705410720,
            "leadType": "Hot",
            "tab": "New Leads",
        })
    );
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/leads?search=SRINIVAS").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(lead_ids(&body), vec![1, 7, 13, 19, 25, 31]);
    assert_eq!(body["meta"]["totalRecords"], json!(6));
}

#[tokio::test]
async fn filtered_set_paginates_with_correct_meta() {
    let app = test_app();
    let (status, body) =
        get_json(&app, "/api/leads?search=srinivas&leadType=Hot&page=2&limit=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(lead_ids(&body), vec![13, 19]);
    assert_eq!(
        body["meta"],
        json!({ "totalRecords": 6, "currentPage": 2, "totalPages": 3 })
    );
}

#[tokio::test]
async fn location_filter_is_substring_match() {
    let app = test_app();
    let (_, body) = get_json(&app, "/api/leads?location=chen&limit=100").await;

    assert_eq!(lead_ids(&body), vec![6, 12, 18, 24, 30]);
}

#[tokio::test]
async fn all_leads_tab_matches_every_record() {
    let app = test_app();
    let (_, body) = get_json(&app, "/api/leads?activeTab=All%20Leads").await;
    assert_eq!(body["meta"]["totalRecords"], json!(33));

    let (_, body) = get_json(&app, "/api/leads?activeTab=New%20Leads&limit=100").await;
    assert_eq!(body["meta"]["totalRecords"], json!(11));
    assert!(body["leads"]
        .as_array()
        .unwrap()
        .iter()
        .all(|lead| lead["tab"] == json!("New Leads")));
}

#[tokio::test]
async fn date_range_filter_is_inclusive() {
    let app = test_app();
    let (_, body) =
        get_json(&app, "/api/leads?startDate=1705000000&endDate=1706082720").await;

    assert_eq!(lead_ids(&body), vec![1, 2, 3]);
}

#[tokio::test]
async fn single_date_bound_does_not_filter() {
    let app = test_app();
    let (_, body) = get_json(&app, "/api/leads?startDate=1705000000").await;
    assert_eq!(body["meta"]["totalRecords"], json!(33));

    let (_, body) =
        get_json(&app, "/api/leads?startDate=1705000000&endDate=soon").await;
    assert_eq!(body["meta"]["totalRecords"], json!(33));
}

#[tokio::test]
async fn malformed_pagination_degrades_to_defaults() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/leads?page=abc&limit=-5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["leads"].as_array().unwrap().len(), 10);
    assert_eq!(body["meta"]["currentPage"], json!(1));
    assert_eq!(body["meta"]["totalPages"], json!(4));
}

#[tokio::test]
async fn out_of_range_page_is_empty_but_meta_is_correct() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/leads?page=99&limit=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["leads"], json!([]));
    assert_eq!(
        body["meta"],
        json!({ "totalRecords": 33, "currentPage": 99, "totalPages": 4 })
    );
}

// ---------------------------------------------------------------------------
// Methods, preflight, CORS
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_get_methods_are_rejected_with_allow_header() {
    let app = test_app();

    for method in ["POST", "PUT", "DELETE", "PATCH"] {
        let response = send(&app, method, "/api/leads").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers().get(header::ALLOW).unwrap(),
            "GET, OPTIONS"
        );

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"]["code"], json!("METHOD_NOT_ALLOWED"));
    }
}

#[tokio::test]
async fn options_preflight_returns_204_with_cors_headers() {
    let app = test_app();
    let response = send(&app, "OPTIONS", "/api/leads").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        DEFAULT_ALLOWED_ORIGIN
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
        "GET, OPTIONS"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
        "Content-Type"
    );
}

#[tokio::test]
async fn get_responses_carry_the_allowed_origin() {
    let app = test_app();
    let response = send(&app, "GET", "/api/leads").await;

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        DEFAULT_ALLOWED_ORIGIN
    );
}

#[tokio::test]
async fn configured_origin_overrides_the_default() {
    let state = AppState::new(
        leaddesk_core::seed::builtin(),
        axum::http::HeaderValue::from_static("https://leads.example.com"),
    );
    let app = build_router(state);

    let response = send(&app, "OPTIONS", "/api/leads").await;
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://leads.example.com"
    );
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_snapshot_size() {
    let app = test_app();
    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "leads": 33 }));
}
