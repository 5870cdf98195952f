// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by `tb` are named in [`vars`] and
//! read through the typed accessors below.

use std::path::PathBuf;

/// Environment variable names.
pub mod vars {
    pub const TICKETBOARD_API_URL: &str = "TICKETBOARD_API_URL";
    pub const TICKETBOARD_CONFIG_DIR: &str = "TICKETBOARD_CONFIG_DIR";
    pub const TB_LOG: &str = "TB_LOG";
    pub const NO_COLOR: &str = "NO_COLOR";
    pub const COLOR: &str = "COLOR";
}

/// Returns the value of `TICKETBOARD_API_URL` if set and non-empty.
pub fn api_url() -> Option<String> {
    non_empty(vars::TICKETBOARD_API_URL)
}

/// Returns the value of `TICKETBOARD_CONFIG_DIR` if set.
pub fn config_dir() -> Option<PathBuf> {
    non_empty(vars::TICKETBOARD_CONFIG_DIR).map(PathBuf::from)
}

/// Returns the log filter directive from `TB_LOG` if set.
pub fn log_filter() -> Option<String> {
    non_empty(vars::TB_LOG)
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
