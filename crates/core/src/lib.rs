// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tb-core: Shared data model for the ticketboard client
//!
//! This crate provides the ticket and health types exchanged with the
//! ticketboard backend, plus the profile update payload, independent of any
//! transport.

pub mod error;
pub mod health;
pub mod profile;
pub mod stats;
pub mod ticket;

pub use error::{Error, Result};
pub use health::{HealthReport, HealthStatus};
pub use profile::ProfilePatch;
pub use stats::TicketStats;
pub use ticket::{Priority, Status, Ticket, TicketDraft, TicketId, TicketPatch};
