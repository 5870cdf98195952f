// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard counters derived from a ticket list.

use serde::Serialize;

use crate::ticket::{Status, Ticket};

/// Ticket counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
}

impl TicketStats {
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        tickets
            .iter()
            .fold(TicketStats::default(), |mut stats, ticket| {
                stats.total += 1;
                match ticket.status {
                    Status::Open => stats.open += 1,
                    Status::InProgress => stats.in_progress += 1,
                    Status::Closed => stats.closed += 1,
                }
                stats
            })
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
