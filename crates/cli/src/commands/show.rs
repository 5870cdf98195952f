// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use tb_core::{Ticket, TicketId};

use super::{write_json, Context};
use crate::api::Transport;
use crate::cli::OutputFormat;
use crate::display::format_ticket_details;
use crate::error::Result;

pub async fn run<T: Transport>(
    ctx: &Context<T>,
    id: &TicketId,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    ctx.require_auth()?;
    let ticket = ctx
        .cache
        .refresh(id)
        .await
        .map_err(|e| ctx.operation_error(e))?;
    write_ticket(&ticket, format, out)
}

/// Write a single ticket in the requested format.
pub(crate) fn write_ticket(ticket: &Ticket, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", format_ticket_details(ticket))?,
        OutputFormat::Json => write_json(out, ticket)?,
        OutputFormat::Id => writeln!(out, "{}", ticket.id)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
