// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use tb_core::{Status, Ticket};

use super::{write_json, Context};
use crate::api::Transport;
use crate::cli::OutputFormat;
use crate::display::format_ticket_list;
use crate::error::Result;

pub async fn run<T: Transport>(
    ctx: &Context<T>,
    status: Option<Status>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    ctx.require_auth()?;
    let tickets: Vec<Ticket> = ctx
        .load_tickets()
        .await?
        .into_iter()
        .filter(|t| status.map_or(true, |s| t.status == s))
        .collect();
    write_tickets(&tickets, format, out)
}

/// Write a ticket collection in the requested format.
pub(crate) fn write_tickets(tickets: &[Ticket], format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", format_ticket_list(tickets))?,
        OutputFormat::Json => write_json(out, &tickets)?,
        OutputFormat::Id => {
            for ticket in tickets {
                writeln!(out, "{}", ticket.id)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
