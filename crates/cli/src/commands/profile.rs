// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use tb_core::ProfilePatch;

use super::{write_json, Context};
use crate::api::Transport;
use crate::cli::{OutputFormat, ProfileArgs};
use crate::display::format_fields;
use crate::error::Result;

/// Build a patch from the given flags. No flags means a read.
pub(crate) fn build_patch(fields: ProfileArgs) -> Result<ProfilePatch> {
    let mut patch = ProfilePatch::new();
    if let Some(username) = fields.username {
        patch = patch.username(username.trim())?;
    }
    if let Some(email) = fields.email {
        patch = patch.email(email)?;
    }
    Ok(patch)
}

/// Show the signed-in user's profile, or update it when fields are given.
pub async fn run<T: Transport>(
    ctx: &Context<T>,
    fields: ProfileArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let patch = build_patch(fields)?;
    ctx.require_auth()?;
    let updating = !patch.is_empty();
    let profile = if updating {
        ctx.client.update_profile(&patch).await
    } else {
        ctx.client.get_profile().await
    }
    .map_err(|e| ctx.api_error(e, "unauthorized"))?;

    match format {
        OutputFormat::Json => write_json(out, &profile)?,
        OutputFormat::Text | OutputFormat::Id => {
            if updating {
                writeln!(out, "Updated profile")?;
            }
            for line in format_fields(&profile) {
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
