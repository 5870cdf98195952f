// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles matching the help colors.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = color(colors::codes::HEADER);
    let literal = color(colors::codes::LITERAL);
    let context = color(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    let rows: [(&str, &str); 9] = [
        ("list", "List tickets"),
        ("show", "Show ticket details"),
        ("new", "Create a ticket"),
        ("edit", "Edit a ticket's title, description or priority"),
        ("delete", "Delete a ticket"),
        ("search", "Search tickets by text"),
        ("stats", "Show ticket counts by status"),
        ("health", "Check backend and database health"),
        ("completion", "Generate shell completions"),
    ];
    let session: [(&str, &str); 4] = [
        ("login", "Store a bearer token"),
        ("logout", "Forget the stored token"),
        ("whoami", "Verify the stored token"),
        ("profile", "Show or update your profile"),
    ];

    let section = |title: &str, rows: &[(&str, &str)]| {
        let mut out = colors::header(title);
        for (name, about) in rows {
            out.push_str(&format!("\n  {}{}{}", colors::literal(name), pad(name), about));
        }
        out
    };

    format!(
        "{}\n\n{}\n\n",
        section("Tickets:", &rows),
        section("Session:", &session)
    )
}

fn pad(name: &str) -> String {
    " ".repeat(12usize.saturating_sub(name.len()))
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  tb login --token <TOKEN>        Store your API token
  tb list                         List all tickets
  tb new \"Printer offline\"        Create a ticket
  tb health                       Check backend status",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
