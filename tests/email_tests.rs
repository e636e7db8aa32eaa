// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Contact email endpoint tests.
//!
//! The endpoint is fire-and-forget: the caller always gets 201 even when
//! the mail transport is down, which is exactly what the offline mock
//! mailer simulates.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_email_returns_201_even_when_transport_fails() {
    let (app, _) = common::create_test_app();

    let body = serde_json::json!({
        "senderName": "Ada Lovelace",
        "senderEmail": "ada@example.com",
        "subject": "Question about goals",
        "message": "How do I set a target date?"
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/email")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    // The mock transport fails every send; the caller never learns.
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_email_with_missing_fields_is_rejected() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/email")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"senderName": "Ada"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    // Shape validation happens in the JSON extractor, before the handler.
    assert!(response.status().is_client_error());
}
