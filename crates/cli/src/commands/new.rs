// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use tb_core::{Priority, TicketDraft};

use super::{write_json, Context};
use crate::api::Transport;
use crate::cli::OutputFormat;
use crate::error::Result;

pub async fn run<T: Transport>(
    ctx: &Context<T>,
    title: String,
    description: String,
    priority: Priority,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    ctx.require_auth()?;
    let draft = TicketDraft::new(title.trim(), description, priority)?;
    let ticket = ctx
        .cache
        .create(&draft)
        .await
        .map_err(|e| ctx.operation_error(e))?;

    match format {
        OutputFormat::Text => writeln!(out, "Created [{}] {}: {}", ticket.priority, ticket.id, ticket.title)?,
        OutputFormat::Json => write_json(out, &ticket)?,
        OutputFormat::Id => writeln!(out, "{}", ticket.id)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
