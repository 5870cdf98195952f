// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Tests for command routing through `execute()`.
//!
//! Each command has its own tests next to its implementation; these only
//! check that parsed commands reach the right one.

use clap::Parser;

use super::*;
use crate::api::{Method, PROFILE_PATH, TICKETS_PATH};
use crate::commands::testing::TestContext;

async fn execute_args(t: &mut TestContext, args: &[&str]) -> Result<()> {
    let cli = Cli::try_parse_from(std::iter::once("tb").chain(args.iter().copied())).unwrap();
    execute(&t.ctx, cli.command, &mut "".as_bytes(), &mut t.out).await
}

#[tokio::test]
async fn test_routes_list() {
    let mut t = TestContext::new();
    t.serve_tickets(&[(1, "A", Status::Open)]);

    execute_args(&mut t, &["list", "-o", "id"]).await.unwrap();

    assert_eq!(t.output(), "1\n");
    assert_eq!(t.mock.count(Method::Get, TICKETS_PATH), 1);
}

#[tokio::test]
async fn test_routes_stats() {
    let mut t = TestContext::new();
    t.serve_tickets(&[]);

    execute_args(&mut t, &["stats"]).await.unwrap();

    assert!(t.output().starts_with("Total: 0\n"));
}

#[tokio::test]
async fn test_routes_delete_with_prompt_input() {
    let mut t = TestContext::new();

    let cli = Cli::try_parse_from(["tb", "delete", "3"]).unwrap();
    let err = execute(&t.ctx, cli.command, &mut "no\n".as_bytes(), &mut t.out)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Cancelled));
}

#[tokio::test]
async fn test_routes_logout() {
    let mut t = TestContext::new();

    execute_args(&mut t, &["logout"]).await.unwrap();

    assert_eq!(t.output(), "Logged out\n");
    assert_eq!(t.session.clears(), 1);
}

#[tokio::test]
async fn test_routes_profile_update() {
    let mut t = TestContext::new();
    t.mock.reply_json(
        Method::Put,
        PROFILE_PATH,
        200,
        serde_json::json!({"email": "ana@example.com"}),
    );

    execute_args(&mut t, &["profile", "--email", "ana@example.com"])
        .await
        .unwrap();

    assert_eq!(t.output(), "Updated profile\nemail: ana@example.com\n");
    assert_eq!(t.mock.count(Method::Put, PROFILE_PATH), 1);
}

#[tokio::test]
async fn test_completion_needs_no_backend() {
    let mut t = TestContext::signed_out();

    execute_args(&mut t, &["completion", "bash"]).await.unwrap();

    assert!(t.output().contains("_tb()"));
    assert!(t.mock.requests().is_empty());
}
