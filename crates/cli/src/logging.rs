// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

use crate::env;
use crate::error::{Error, Result};

/// Filter used when `TB_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Builds the filter from `TB_LOG`, falling back to the default directive.
///
/// `-v` raises the default to `debug`; an explicit `TB_LOG` always wins.
pub fn filter(env_directive: Option<&str>, verbose: bool) -> EnvFilter {
    env_directive
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Installs the global subscriber. Call once, before any command runs.
pub fn init(verbose: bool) -> Result<()> {
    let filter = filter(env::log_filter().as_deref(), verbose);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
