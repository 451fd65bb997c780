// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wayfarer::chat::TripPlanner;
use wayfarer::client::{ChatBackend, HttpChatClient};
use wayfarer::error::{ApiError, WayfarerError};
use wayfarer::history::HISTORY_KEY;
use wayfarer::storage::{MemoryStorage, SessionStorage};

async fn mount_chat_reply(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_planner_over_http_records_success() {
    let server = MockServer::start().await;
    mount_chat_reply(
        &server,
        200,
        serde_json::json!({ "response": "## 📋 Summary\nTotal: 2,600 AED" }),
    )
    .await;

    let backend = HttpChatClient::new(server.uri(), Duration::from_secs(5)).unwrap();
    let mut planner = TripPlanner::new(backend, MemoryStorage::new());
    planner.start();

    let reply = planner.submit("3 days in Dubai").await.unwrap();

    assert!(reply.contains("2,600 AED"));
    assert_eq!(planner.history().len(), 1);
    assert_eq!(planner.history()[0].query, "3 days in Dubai");
    assert!(planner.storage().get(HISTORY_KEY).unwrap().is_some());
}

#[tokio::test]
async fn test_planner_over_http_rejection_not_recorded() {
    let server = MockServer::start().await;
    mount_chat_reply(
        &server,
        400,
        serde_json::json!({ "error": "Please enter your travel query!" }),
    )
    .await;

    let backend = HttpChatClient::new(server.uri(), Duration::from_secs(5)).unwrap();
    let mut planner = TripPlanner::new(backend, MemoryStorage::new());

    let err = planner.submit("Goa").await.unwrap_err();

    assert!(matches!(
        err,
        WayfarerError::Api(ApiError::ServerError { status: 400, .. })
    ));
    assert!(planner.history().is_empty());
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on the discard port locally
    let backend = HttpChatClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();

    let err = backend.chat("Goa").await.unwrap_err();

    match err {
        WayfarerError::Api(api @ (ApiError::Network(_) | ApiError::Timeout)) => {
            assert!(api.user_message().starts_with("Network error."));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_status_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let backend = HttpChatClient::new(server.uri(), Duration::from_secs(5)).unwrap();
    let err = backend.status().await.unwrap_err();

    assert!(matches!(
        err,
        WayfarerError::Api(ApiError::ServerError { status: 503, .. })
    ));
}
