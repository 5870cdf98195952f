// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP client behavior against a live mock server.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::*;
use serde_json::json;
use tbrs::api::{ApiClient, ApiError, AuthState, TransportError};
use tbrs::session::{FileSession, MemorySession, Session};
use tbrs::{Priority, TicketDraft, TicketId, TicketPatch};
use tempfile::TempDir;

#[tokio::test]
async fn sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([ticket(1, "A")])))
        .expect(1)
        .mount(&server)
        .await;

    let tickets = signed_in(&server).list_tickets().await.unwrap();

    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].title, "A");
    assert!(tickets[0].created_at.is_some());
}

#[tokio::test]
async fn omits_authorization_when_signed_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_with(&server, Arc::new(MemorySession::new()));
    client.check_backend().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn unauthorized_response_removes_stored_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tickets/7"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let token_path = dir.path().join("token");
    std::fs::write(&token_path, "stale\n").unwrap();
    let session = Arc::new(FileSession::open(&token_path).unwrap());
    let client = client_with(&server, session.clone());
    assert_eq!(client.auth_state(), AuthState::Authenticated);

    let err = client.get_ticket(&TicketId::from(7u64)).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(client.auth_state(), AuthState::Unauthenticated);
    assert!(session.token().is_none());
    assert!(!token_path.exists());
}

#[tokio::test]
async fn error_body_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tickets"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "title too long"})),
        )
        .mount(&server)
        .await;

    let draft = TicketDraft::new("x", "", Priority::Low).unwrap();
    let err = signed_in(&server).create_ticket(&draft).await.unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(err.message_or("fallback"), "title too long");
}

#[tokio::test]
async fn create_sends_draft_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tickets"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "title": "VPN down",
            "description": "From home",
            "priority": "HIGH",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(ticket(12, "VPN down")))
        .expect(1)
        .mount(&server)
        .await;

    let draft = TicketDraft::new("VPN down", "From home", Priority::High).unwrap();
    let created = signed_in(&server).create_ticket(&draft).await.unwrap();

    assert_eq!(created.id, TicketId::from(12u64));
}

#[tokio::test]
async fn update_sends_only_changed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/tickets/12"))
        .and(body_json(json!({"priority": "LOW"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticket(12, "VPN down")))
        .expect(1)
        .mount(&server)
        .await;

    let patch = TicketPatch::new().priority(Priority::Low);
    signed_in(&server)
        .update_ticket(&TicketId::from(12u64), &patch)
        .await
        .unwrap();
}

#[tokio::test]
async fn search_passes_query_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tickets/search"))
        .and(query_param("q", "printer jam"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let found = signed_in(&server).search_tickets("printer jam").await.unwrap();

    assert!(found.is_empty());
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/desk/api/tickets/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let session: Arc<dyn Session> = Arc::new(MemorySession::with_token("secret"));
    let client =
        ApiClient::new(&format!("{}/desk/", server.uri()), TIMEOUT, session).unwrap();

    client.delete_ticket(&TicketId::from(3u64)).await.unwrap();
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let session: Arc<dyn Session> = Arc::new(MemorySession::new());
    let client = ApiClient::new(&server.uri(), Duration::from_millis(100), session).unwrap();

    let err = client.check_backend().await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(TransportError::Timeout(_))));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let session: Arc<dyn Session> = Arc::new(MemorySession::new());
    let client = ApiClient::new(&uri, TIMEOUT, session).unwrap();

    let err = client.check_backend().await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}
