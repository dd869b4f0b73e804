// ABOUTME: Integration tests for the assembled server middleware stack
// ABOUTME: Tests request id handling, security headers, CORS, and route wiring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physique Labs

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::create_test_router;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use std::error::Error;
use tower::ServiceExt;
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[tokio::test]
async fn test_every_response_carries_a_request_id() -> Result<(), Box<dyn Error>> {
    let app = create_test_router();

    let request = Request::builder().uri("/health").body(Body::empty())?;
    let response = app.oneshot(request).await?;

    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .expect("request id header not present")
        .to_str()?;
    assert!(
        Uuid::parse_str(request_id).is_ok(),
        "request id is not a valid UUID: {request_id}"
    );

    Ok(())
}

#[tokio::test]
async fn test_supplied_request_id_is_propagated() -> Result<(), Box<dyn Error>> {
    let app = create_test_router();

    let request = Request::builder()
        .uri("/health")
        .header(REQUEST_ID_HEADER, "caller-chosen-id")
        .body(Body::empty())?;
    let response = app.oneshot(request).await?;

    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .expect("request id header not present");
    assert_eq!(request_id, "caller-chosen-id");

    Ok(())
}

#[tokio::test]
async fn test_nosniff_header_is_set_on_every_response() -> Result<(), Box<dyn Error>> {
    let app = create_test_router();

    // Even a 404 for an unrouted path passes through the header layer
    let request = Request::builder()
        .uri("/no/such/route")
        .body(Body::empty())?;
    let response = app.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );

    Ok(())
}

#[tokio::test]
async fn test_wildcard_cors_allows_any_origin() -> Result<(), Box<dyn Error>> {
    let app = create_test_router();

    let request = Request::builder()
        .uri("/health")
        .header("origin", "https://app.example.com")
        .body(Body::empty())?;
    let response = app.oneshot(request).await?;

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("CORS header not present"),
        "*"
    );

    Ok(())
}

#[tokio::test]
async fn test_preflight_accepts_configured_methods() -> Result<(), Box<dyn Error>> {
    let app = create_test_router();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/report")
        .header("origin", "https://app.example.com")
        .header("access-control-request-method", "POST")
        .body(Body::empty())?;
    let response = app.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);

    let allowed = response
        .headers()
        .get("access-control-allow-methods")
        .expect("preflight response lacks allowed methods")
        .to_str()?;
    assert!(allowed.contains("POST"), "unexpected methods: {allowed}");
    assert!(allowed.contains("DELETE"), "unexpected methods: {allowed}");

    Ok(())
}

#[tokio::test]
async fn test_router_merges_every_route_group() -> Result<(), Box<dyn Error>> {
    let app = create_test_router();

    let health = Request::builder().uri("/health").body(Body::empty())?;
    assert_eq!(app.clone().oneshot(health).await?.status(), StatusCode::OK);

    let create = Request::builder()
        .method(Method::POST)
        .uri("/api/sessions")
        .body(Body::empty())?;
    assert_eq!(
        app.clone().oneshot(create).await?.status(),
        StatusCode::CREATED
    );

    let report = Request::builder()
        .method(Method::POST)
        .uri("/api/report")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({
                "gender": "male",
                "survey": {
                    "goal": "balance",
                    "experience": "novice",
                    "frequencyPerWeek": "low",
                    "weakParts": [],
                    "trainingStyle": "machine",
                    "resultPreference": "silhouette"
                }
            })
            .to_string(),
        ))?;
    assert_eq!(app.clone().oneshot(report).await?.status(), StatusCode::OK);

    let analyze = Request::builder()
        .method(Method::POST)
        .uri("/api/analyze")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({
                "gender": "male",
                "goal": "balance",
                "images": {
                    "frontUpper": "data:image/jpeg;base64,a",
                    "backUpper": "data:image/jpeg;base64,b",
                    "lowerBody": "data:image/jpeg;base64,c"
                }
            })
            .to_string(),
        ))?;
    assert_eq!(app.oneshot(analyze).await?.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_oversized_body_is_rejected() -> Result<(), Box<dyn Error>> {
    let app = create_test_router();

    // The test config caps bodies at 1 MiB
    let oversized = "x".repeat(2 * 1024 * 1024);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/report")
        .header("content-type", "application/json")
        .body(Body::from(oversized))?;
    let response = app.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    Ok(())
}
