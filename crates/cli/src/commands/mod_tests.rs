// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Test infrastructure for command testing without a backend.
//!
//! This module provides a `TestContext` that wraps a scripted
//! [`MockTransport`], a counting session and a captured output buffer, so
//! commands run end to end without sockets or files.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::commands::testing::TestContext;
//!
//! #[tokio::test]
//! async fn test_some_command() {
//!     let mut t = TestContext::new();
//!     t.serve_tickets(&[(1, "A", Status::Open)]);
//!
//!     list::run(&t.ctx, None, OutputFormat::Text, &mut t.out).await.unwrap();
//!     assert!(t.output().contains("1: A"));
//! }
//! ```

use std::sync::Arc;

use serde_json::{json, Value};
use tb_core::Status;

use super::Context;
use crate::api::test_helpers::{make_client, ticket_json, CountingSession};
use crate::api::transport_tests::MockTransport;
use crate::api::{Method, TICKETS_PATH};
use crate::config::Config;

/// Test context with a scripted backend and captured output.
pub struct TestContext {
    pub mock: MockTransport,
    pub session: Arc<CountingSession>,
    pub ctx: Context<MockTransport>,
    pub out: Vec<u8>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Create a context with a signed-in session.
    pub fn new() -> Self {
        Self::with_session(CountingSession::with_token("test-token"))
    }

    /// Create a context with no stored token.
    pub fn signed_out() -> Self {
        Self::with_session(CountingSession::default())
    }

    fn with_session(session: CountingSession) -> Self {
        let mock = MockTransport::new();
        let session = Arc::new(session);
        let client = make_client(&mock, session.clone());
        TestContext {
            ctx: Context::new(Config::default(), client),
            mock,
            session,
            out: Vec::new(),
        }
    }

    /// Script one `GET /api/tickets` returning the given tickets.
    pub fn serve_tickets(&self, tickets: &[(u64, &str, Status)]) -> &Self {
        let body: Vec<Value> = tickets
            .iter()
            .map(|(id, title, status)| ticket_json(*id, title, *status))
            .collect();
        self.mock
            .reply_json(Method::Get, TICKETS_PATH, 200, json!(body));
        self
    }

    /// Everything written so far.
    pub fn output(&self) -> String {
        String::from_utf8(self.out.clone()).unwrap()
    }

    /// Output parsed as JSON.
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.out).unwrap()
    }
}
