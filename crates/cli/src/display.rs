// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::Value;
use tb_core::{HealthReport, Status, Ticket, TicketStats};

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

/// Human-readable status label for text output.
pub fn status_label(status: Status) -> &'static str {
    match status {
        Status::Open => "open",
        Status::InProgress => "in progress",
        Status::Closed => "closed",
    }
}

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Format a single ticket line for list output.
///
/// ```text
/// - [HIGH] (in progress) 42: Printer on floor 3 offline
/// ```
pub fn format_ticket_line(ticket: &Ticket) -> String {
    format!(
        "- [{}] ({}) {}: {}",
        ticket.priority,
        status_label(ticket.status),
        ticket.id,
        ticket.title
    )
}

/// Format ticket details for the show command.
pub fn format_ticket_details(ticket: &Ticket) -> String {
    let mut output = vec![
        format!("[{}] {}", ticket.priority, ticket.id),
        format!("Title: {}", ticket.title),
        format!("Status: {}", status_label(ticket.status)),
    ];
    if let Some(created_at) = ticket.created_at {
        output.push(format!("Created: {}", created_at.format("%Y-%m-%d %H:%M")));
    }
    if let Some(updated_at) = ticket.updated_at {
        output.push(format!("Updated: {}", updated_at.format("%Y-%m-%d %H:%M")));
    }

    if !ticket.description.trim().is_empty() {
        output.push(String::new());
        output.push("Description:".to_string());
        for line in wrap_text(&ticket.description, WRAP_WIDTH).lines() {
            output.push(format!("    {}", line));
        }
    }

    output.join("\n")
}

/// Format the list output, with a placeholder for an empty list.
pub fn format_ticket_list(tickets: &[Ticket]) -> String {
    if tickets.is_empty() {
        return "No tickets".to_string();
    }
    tickets
        .iter()
        .map(format_ticket_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format dashboard counters.
pub fn format_stats(stats: &TicketStats) -> String {
    format!(
        "Total: {}\nOpen: {}\nIn progress: {}\nClosed: {}",
        stats.total, stats.open, stats.in_progress, stats.closed
    )
}

/// Format the backend/database status pair.
pub fn format_health(report: &HealthReport) -> String {
    format!("backend: {}\ndatabase: {}", report.backend, report.database)
}

/// Single-line form of the status pair, for `health --watch`.
pub fn format_health_line(report: &HealthReport) -> String {
    format!("backend: {}, database: {}", report.backend, report.database)
}

/// Scalar fields of a backend payload as `key: value` lines.
///
/// Nested objects and arrays are skipped; a non-object payload yields nothing.
pub fn format_fields(payload: &Value) -> Vec<String> {
    let Value::Object(fields) = payload else {
        return Vec::new();
    };
    fields
        .iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some(format!("{key}: {s}")),
            Value::Number(n) => Some(format!("{key}: {n}")),
            Value::Bool(b) => Some(format!("{key}: {b}")),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
