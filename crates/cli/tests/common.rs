// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tbrs::api::ApiClient;
use tbrs::session::{MemorySession, Session};

pub use wiremock::matchers::{body_json, header, method, path, query_param};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TIMEOUT: Duration = Duration::from_secs(5);

/// Client for `server` with a token already stored.
pub fn signed_in(server: &MockServer) -> Arc<ApiClient> {
    client_with(server, Arc::new(MemorySession::with_token("secret")))
}

pub fn client_with(server: &MockServer, session: Arc<dyn Session>) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(&server.uri(), TIMEOUT, session).unwrap())
}

/// Ticket body as the backend sends it.
pub fn ticket(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "",
        "priority": "MEDIUM",
        "status": "OPEN",
        "createdAt": "2026-03-01T09:30:00Z",
    })
}

/// Respond to `GET /api/tickets` with the given tickets, once.
pub async fn serve_list(server: &MockServer, tickets: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/api/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(tickets)))
        .up_to_n_times(1)
        .mount(server)
        .await;
}
