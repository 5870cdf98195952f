// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use tb_core::{Priority, Status, TicketId};

pub use args::{EditArgs, OutputArgs, ProfileArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    /// Ticket ids only, one per line
    Id,
}

#[derive(Parser)]
#[command(name = "tb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal client for the ticketboard help desk")]
#[command(
    long_about = "Terminal client for the ticketboard help desk.\n\n\
    Lists, creates, edits and deletes tickets on a ticketboard backend and \
    reports backend and database health."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Backend base URL (overrides config and TICKETBOARD_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Log debug output to stderr (TB_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List tickets
    #[command(after_help = colors::examples("\
Examples:
  tb list                      List all tickets
  tb list --status open        List open tickets
  tb list -o json              Output as JSON"))]
    List {
        /// Only show tickets with this status (open, in_progress, closed)
        #[arg(long, short)]
        status: Option<Status>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show ticket details
    #[command(arg_required_else_help = true)]
    Show {
        /// Ticket id
        id: TicketId,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Create a ticket
    #[command(after_help = colors::examples("\
Examples:
  tb new \"Printer offline\"                   Create with default priority
  tb new \"VPN down\" -p high -d \"From home\"   Create with priority and description
  tb new \"Badge reader\" -o id                Output only the new id"))]
    New {
        /// Ticket title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Longer description
        #[arg(long, short, default_value = "")]
        description: String,

        /// Priority (low, medium, high)
        #[arg(long, short, default_value = "medium")]
        priority: Priority,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Edit a ticket's title, description or priority
    #[command(after_help = colors::examples("\
Examples:
  tb edit 42 --priority high          Raise priority
  tb edit 42 -t \"Printer jammed\"      Rename"))]
    Edit {
        /// Ticket id
        id: TicketId,

        #[command(flatten)]
        fields: EditArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Delete a ticket
    Delete {
        /// Ticket id
        id: TicketId,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Search tickets by text
    Search {
        /// Search text
        #[arg(value_parser = non_empty_string)]
        query: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show ticket counts by status
    Stats {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check backend and database health
    #[command(after_help = colors::examples("\
Examples:
  tb health                    Check once, exit non-zero if unhealthy
  tb health --watch            Poll until interrupted
  tb health --watch -i 5       Poll every 5 seconds"))]
    Health {
        /// Keep polling and print each change
        #[arg(long, short)]
        watch: bool,

        /// Polling period in seconds (default from config)
        #[arg(long, short, value_name = "SECS", requires = "watch",
              value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Store a bearer token and verify it
    Login {
        /// API token
        #[arg(long, value_parser = non_empty_string)]
        token: String,
    },

    /// Forget the stored token
    Logout,

    /// Verify the stored token with the backend
    Whoami {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show or update the signed-in user's profile
    #[command(after_help = colors::examples("\
Examples:
  tb profile                           Show the profile
  tb profile -e ana@example.com        Change the email address
  tb profile -u ana -o json            Rename, print the result as JSON"))]
    Profile {
        #[command(flatten)]
        fields: ProfileArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
