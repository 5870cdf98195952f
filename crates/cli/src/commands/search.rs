// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use super::list::write_tickets;
use super::Context;
use crate::api::Transport;
use crate::cli::OutputFormat;
use crate::error::Result;

pub async fn run<T: Transport>(
    ctx: &Context<T>,
    query: &str,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    ctx.require_auth()?;
    let tickets = ctx
        .cache
        .search(query.trim())
        .await
        .map_err(|e| ctx.operation_error(e))?;
    write_tickets(&tickets, format, out)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
