// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for API, cache and health tests.

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};
use tb_core::{Status, Ticket};

use super::client::ApiClient;
use super::transport_tests::MockTransport;
use crate::session::{MemorySession, Session};

pub const BASE_URL: &str = "http://tickets.test";

/// Session that counts how often it is cleared.
#[derive(Default)]
pub struct CountingSession {
    inner: MemorySession,
    clears: AtomicUsize,
}

impl CountingSession {
    pub fn with_token(token: &str) -> Self {
        CountingSession {
            inner: MemorySession::with_token(token),
            clears: AtomicUsize::new(0),
        }
    }

    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl Session for CountingSession {
    fn token(&self) -> Option<String> {
        self.inner.token()
    }

    fn set_token(&self, token: String) {
        self.inner.set_token(token);
    }

    fn clear_token(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.inner.clear_token();
    }
}

/// Create a client over `mock` with a session holding `token`.
pub fn make_client(mock: &MockTransport, session: Arc<dyn Session>) -> Arc<ApiClient<MockTransport>> {
    Arc::new(ApiClient::with_transport(BASE_URL, mock.clone(), session).unwrap())
}

/// Create a client over `mock` with an authenticated in-memory session.
pub fn make_authed_client(mock: &MockTransport) -> Arc<ApiClient<MockTransport>> {
    make_client(mock, Arc::new(MemorySession::with_token("test-token")))
}

/// Create a ticket with the given id and title.
pub fn make_ticket(id: u64, title: &str) -> Ticket {
    Ticket::new(id, title)
}

/// JSON form of a ticket as the backend would send it.
pub fn ticket_json(id: u64, title: &str, status: Status) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "",
        "priority": "MEDIUM",
        "status": status.as_str(),
    })
}
