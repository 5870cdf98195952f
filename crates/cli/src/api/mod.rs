// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP access to the ticketboard backend.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────┐
//! │ TicketCache  │────►│  ApiClient  │────►│  Transport  │────►│ Backend │
//! │ HealthMonitor│◄────│ (auth, 401) │◄────│   (trait)   │◄────│   API   │
//! └──────────────┘     └─────────────┘     └─────────────┘     └─────────┘
//!                             │
//!                             ▼
//!                      ┌─────────────┐
//!                      │   Session   │  (bearer token)
//!                      └─────────────┘
//! ```
//!
//! # Features
//!
//! - Bearer token attached to every request
//! - Global logout on any 401, independent of the calling operation
//! - Structured error bodies mapped to user-facing messages
//! - Injectable transport trait for testing

mod client;
mod services;
mod transport;

pub use client::{ApiClient, ApiError, ApiResult, AuthState};
pub use services::{
    ticket_path, BACKEND_HEALTH_PATH, DATABASE_HEALTH_PATH, PROFILE_PATH, TICKETS_PATH,
    TICKET_SEARCH_PATH, VERIFY_TOKEN_PATH,
};
pub use transport::{
    HttpRequest, HttpTransport, Method, RawResponse, Transport, TransportError, TransportResult,
};

#[cfg(test)]
pub(crate) mod test_helpers;
