// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use super::{write_json, Context};
use crate::api::Transport;
use crate::cli::OutputFormat;
use crate::display::format_stats;
use crate::error::Result;

pub async fn run<T: Transport>(ctx: &Context<T>, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    ctx.require_auth()?;
    ctx.load_tickets().await?;
    let stats = ctx.cache.stats();
    match format {
        OutputFormat::Json => write_json(out, &stats)?,
        OutputFormat::Text | OutputFormat::Id => writeln!(out, "{}", format_stats(&stats))?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
