// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::api::test_helpers::ticket_json;
use crate::api::Method;
use crate::commands::testing::TestContext;
use crate::error::Error;
use tb_core::Status;

#[tokio::test]
async fn test_show_text() {
    let mut t = TestContext::new();
    t.mock.reply_json(
        Method::Get,
        "/api/tickets/9",
        200,
        ticket_json(9, "Projector", Status::InProgress),
    );

    run(&t.ctx, &TicketId::from(9u64), OutputFormat::Text, &mut t.out)
        .await
        .unwrap();

    assert_eq!(
        t.output(),
        "[MEDIUM] 9\nTitle: Projector\nStatus: in progress\n"
    );
}

#[tokio::test]
async fn test_show_json() {
    let mut t = TestContext::new();
    t.mock.reply_json(
        Method::Get,
        "/api/tickets/9",
        200,
        ticket_json(9, "Projector", Status::Open),
    );

    run(&t.ctx, &TicketId::from(9u64), OutputFormat::Json, &mut t.out)
        .await
        .unwrap();

    assert_eq!(t.json()["title"], "Projector");
}

#[tokio::test]
async fn test_show_missing_ticket() {
    let mut t = TestContext::new();
    t.mock.reply(Method::Get, "/api/tickets/404", 404, "");

    let err = run(&t.ctx, &TicketId::from(404u64), OutputFormat::Text, &mut t.out)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Operation(_)));
    assert_eq!(err.to_string(), "failed to load ticket");
}
