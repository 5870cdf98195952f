// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that share common options.

use clap::Args;
use tb_core::Priority;

use super::OutputFormat;

/// Output format selection.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    /// Output format (text, json, id)
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Editable ticket fields. At least one must be given.
#[derive(Args, Clone, Debug, Default)]
pub struct EditArgs {
    /// New title
    #[arg(long, short)]
    pub title: Option<String>,

    /// New description (an empty string clears it)
    #[arg(long, short)]
    pub description: Option<String>,

    /// New priority (low, medium, high)
    #[arg(long, short)]
    pub priority: Option<Priority>,
}

/// Profile fields to change. None given means show the profile.
#[derive(Args, Clone, Debug, Default)]
pub struct ProfileArgs {
    /// New username
    #[arg(long, short)]
    pub username: Option<String>,

    /// New email address
    #[arg(long, short)]
    pub email: Option<String>,
}
