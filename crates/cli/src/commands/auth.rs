// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use tracing::warn;

use super::{write_json, Context};
use crate::api::Transport;
use crate::cli::OutputFormat;
use crate::display::format_fields;
use crate::error::{Error, Result};

/// Store `token` and check it with the backend.
///
/// A token the backend rejects is removed again. If the backend cannot be
/// reached the token is kept unverified.
pub async fn login<T: Transport>(ctx: &Context<T>, token: String, out: &mut dyn Write) -> Result<()> {
    ctx.client.sign_in(token);
    match ctx.client.verify_token().await {
        Ok(_) => writeln!(out, "Logged in")?,
        Err(e) if e.is_unauthorized() => return Err(Error::TokenRejected),
        Err(e) => {
            warn!("could not verify token: {}", e);
            writeln!(out, "Token stored but not verified: {}", e)?;
        }
    }
    Ok(())
}

pub fn logout<T: Transport>(ctx: &Context<T>, out: &mut dyn Write) -> Result<()> {
    ctx.client.sign_out();
    writeln!(out, "Logged out")?;
    Ok(())
}

/// Verify the stored token and print what the backend says about it.
pub async fn whoami<T: Transport>(ctx: &Context<T>, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    ctx.require_auth()?;
    let payload = ctx
        .client
        .verify_token()
        .await
        .map_err(|e| ctx.api_error(e, "token rejected"))?;

    match format {
        OutputFormat::Json => write_json(out, &payload)?,
        OutputFormat::Text | OutputFormat::Id => {
            writeln!(out, "Authenticated")?;
            for line in format_fields(&payload) {
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
