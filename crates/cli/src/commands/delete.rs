// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{BufRead, Write};

use tb_core::TicketId;

use super::Context;
use crate::api::Transport;
use crate::error::{Error, Result};

/// Ask a yes/no question. Anything but `y` or `yes` means no.
pub(crate) fn confirm(prompt: &str, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<bool> {
    write!(out, "{prompt} [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

pub async fn run<T: Transport>(
    ctx: &Context<T>,
    id: &TicketId,
    yes: bool,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    ctx.require_auth()?;
    if !yes && !confirm(&format!("Delete ticket {id}?"), input, out)? {
        return Err(Error::Cancelled);
    }
    ctx.cache
        .delete(id)
        .await
        .map_err(|e| ctx.operation_error(e))?;
    writeln!(out, "Deleted {id}")?;
    Ok(())
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
