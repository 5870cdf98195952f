// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use tb_core::{TicketId, TicketPatch};

use super::{write_json, Context};
use crate::api::Transport;
use crate::cli::{EditArgs, OutputFormat};
use crate::error::{Error, Result};

/// Build a patch from the given flags.
pub(crate) fn build_patch(fields: EditArgs) -> Result<TicketPatch> {
    let mut patch = TicketPatch::new();
    if let Some(title) = fields.title {
        patch = patch.title(title.trim())?;
    }
    if let Some(description) = fields.description {
        patch = patch.description(description);
    }
    if let Some(priority) = fields.priority {
        patch = patch.priority(priority);
    }
    if patch.is_empty() {
        return Err(Error::EmptyPatch);
    }
    Ok(patch)
}

pub async fn run<T: Transport>(
    ctx: &Context<T>,
    id: &TicketId,
    fields: EditArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let patch = build_patch(fields)?;
    ctx.require_auth()?;
    let ticket = ctx
        .cache
        .update(id, &patch)
        .await
        .map_err(|e| ctx.operation_error(e))?;

    match format {
        OutputFormat::Text => writeln!(out, "Updated {}: {}", ticket.id, ticket.title)?,
        OutputFormat::Json => write_json(out, &ticket)?,
        OutputFormat::Id => writeln!(out, "{}", ticket.id)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
