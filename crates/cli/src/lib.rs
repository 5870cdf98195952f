// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tbrs - Terminal client library for the ticketboard help desk.
//!
//! This crate provides the functionality behind the `tb` CLI: an HTTP client
//! for the ticketboard backend, a local ticket cache and a health monitor.
//!
//! # Main Components
//!
//! - [`ApiClient`](api::ApiClient) - Authenticated requests with global logout on 401
//! - [`TicketCache`] - In-memory ticket list kept consistent with mutations
//! - [`HealthMonitor`] - Backend and database liveness, polled on a schedule
//! - [`Config`] - Backend URL, timeouts and token location
//! - [`Error`] - Error types for all operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tbrs::api::ApiClient;
//! use tbrs::session::MemorySession;
//! use tbrs::TicketCache;
//!
//! let session = Arc::new(MemorySession::with_token("secret"));
//! let client = Arc::new(ApiClient::new("http://localhost:8080", timeout, session)?);
//! let cache = TicketCache::new(client);
//! cache.fetch_all().await;
//! for ticket in cache.tickets() { /* ... */ }
//! ```

pub mod api;
pub mod cache;
mod cli;
pub mod colors;
mod commands;
pub mod config;
mod display;
pub mod env;
pub mod error;
pub mod health;
pub mod help;
pub mod logging;
pub mod session;

pub use cache::{CacheSnapshot, OperationError, TicketCache};
pub use cli::{Cli, Command, EditArgs, OutputArgs, OutputFormat};
pub use commands::Context;
pub use config::Config;
pub use error::{Error, Result};
pub use health::{HealthMonitor, IntervalSchedule, ManualSchedule, MonitorHandle, Schedule};
pub use tb_core::{
    HealthReport, HealthStatus, Priority, ProfilePatch, Status, Ticket, TicketDraft, TicketId,
    TicketPatch, TicketStats,
};

use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::api::Transport;

/// Parse-independent entry point: open the configured backend and run.
pub async fn run(cli: Cli) -> Result<()> {
    let mut out = std::io::stdout();
    if let Command::Completion { shell } = cli.command {
        return write_completions(shell, &mut out);
    }
    let ctx = Context::open(cli.api_url)?;
    let mut input = std::io::stdin().lock();
    execute(&ctx, cli.command, &mut input, &mut out).await
}

/// Route a command to its implementation.
pub async fn execute<T: Transport + 'static>(
    ctx: &Context<T>,
    command: Command,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::List { status, output } => {
            commands::list::run(ctx, status, output.output, out).await
        }
        Command::Show { id, output } => commands::show::run(ctx, &id, output.output, out).await,
        Command::New {
            title,
            description,
            priority,
            output,
        } => commands::new::run(ctx, title, description, priority, output.output, out).await,
        Command::Edit { id, fields, output } => {
            commands::edit::run(ctx, &id, fields, output.output, out).await
        }
        Command::Delete { id, yes } => commands::delete::run(ctx, &id, yes, input, out).await,
        Command::Search { query, output } => {
            commands::search::run(ctx, &query, output.output, out).await
        }
        Command::Stats { output } => commands::stats::run(ctx, output.output, out).await,
        Command::Health {
            watch: false,
            output,
            ..
        } => commands::health::check(ctx, output.output, out).await,
        Command::Health {
            watch: true,
            interval,
            output,
        } => {
            let period = interval
                .map(Duration::from_secs)
                .unwrap_or_else(|| ctx.config.health_interval());
            let monitor = Arc::new(HealthMonitor::new(Arc::clone(&ctx.client)));
            let shutdown = async {
                let _ = tokio::signal::ctrl_c().await;
            };
            commands::health::watch(
                monitor,
                IntervalSchedule::new(period),
                output.output,
                out,
                shutdown,
            )
            .await
        }
        Command::Login { token } => commands::auth::login(ctx, token, out).await,
        Command::Logout => commands::auth::logout(ctx, out),
        Command::Whoami { output } => commands::auth::whoami(ctx, output.output, out).await,
        Command::Profile { fields, output } => {
            commands::profile::run(ctx, fields, output.output, out).await
        }
        Command::Completion { shell } => write_completions(shell, out),
    }
}

fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "tb", out);
    Ok(())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
