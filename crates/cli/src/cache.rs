// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client-side ticket cache.
//!
//! Holds the ordered ticket list and applies the outcome of each remote call
//! to it without re-fetching the collection:
//! - `fetch_all` replaces the list with the server's ordering
//! - `create` prepends the created ticket
//! - `update` replaces the matching entry in place
//! - `delete` removes the matching entry
//!
//! A failed call never touches the list. List-level failures (`fetch_all`)
//! are kept in [`TicketCache::error`] for display; single-ticket failures are
//! returned to the caller as [`OperationError`].

use std::sync::{Arc, Mutex, MutexGuard};

use tb_core::{Ticket, TicketDraft, TicketId, TicketPatch, TicketStats};
use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError, HttpTransport, Transport};

pub const FETCH_FAILED: &str = "failed to load tickets";
pub const LOAD_FAILED: &str = "failed to load ticket";
pub const SEARCH_FAILED: &str = "failed to search tickets";
pub const CREATE_FAILED: &str = "failed to create ticket";
pub const UPDATE_FAILED: &str = "failed to update ticket";
pub const DELETE_FAILED: &str = "failed to delete ticket";

/// Failure of a single-ticket operation.
///
/// Displays as the user-facing message: the server's `message` when it sent
/// one, otherwise the operation's default.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct OperationError {
    pub message: String,
    #[source]
    pub source: ApiError,
}

impl OperationError {
    fn new(source: ApiError, default: &str) -> Self {
        OperationError {
            message: source.message_or(default),
            source,
        }
    }

    /// Returns true if the failure forced a logout.
    pub fn is_unauthorized(&self) -> bool {
        self.source.is_unauthorized()
    }
}

/// Read-only view of the cache for presentation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheSnapshot {
    pub tickets: Vec<Ticket>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct CacheState {
    tickets: Vec<Ticket>,
    loading: bool,
    error: Option<String>,
    /// Sequence number of the most recently issued fetch.
    fetch_seq: u64,
}

/// In-memory ticket list kept in step with the backend.
///
/// Operations take `&self` and may overlap. State is only written after a
/// response arrives, and the lock is never held across an await.
pub struct TicketCache<T: Transport = HttpTransport> {
    client: Arc<ApiClient<T>>,
    state: Mutex<CacheState>,
}

impl<T: Transport> TicketCache<T> {
    pub fn new(client: Arc<ApiClient<T>>) -> Self {
        TicketCache {
            client,
            state: Mutex::new(CacheState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Current tickets, newest-created first after local creates.
    pub fn tickets(&self) -> Vec<Ticket> {
        self.state().tickets.clone()
    }

    pub fn loading(&self) -> bool {
        self.state().loading
    }

    /// Message of the last failed `fetch_all`, cleared when a new one starts.
    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    pub fn snapshot(&self) -> CacheSnapshot {
        let state = self.state();
        CacheSnapshot {
            tickets: state.tickets.clone(),
            loading: state.loading,
            error: state.error.clone(),
        }
    }

    /// Counts by status over the cached tickets.
    pub fn stats(&self) -> TicketStats {
        TicketStats::from_tickets(&self.state().tickets)
    }

    /// Replace the list with the server's collection.
    ///
    /// Only the most recently issued fetch may write the list, the error or
    /// the loading flag; responses of superseded fetches are discarded.
    pub async fn fetch_all(&self) {
        let seq = {
            let mut state = self.state();
            state.fetch_seq += 1;
            state.loading = true;
            state.error = None;
            state.fetch_seq
        };

        let result = self.client.list_tickets().await;

        let mut state = self.state();
        if state.fetch_seq != seq {
            debug!(seq, latest = state.fetch_seq, "discarding superseded fetch");
            return;
        }
        match result {
            Ok(tickets) => {
                debug!(count = tickets.len(), "loaded tickets");
                state.tickets = tickets;
            }
            Err(e) => {
                warn!("failed to load tickets: {}", e);
                state.error = Some(e.message_or(FETCH_FAILED));
            }
        }
        state.loading = false;
    }

    /// Create a ticket and prepend the server's representation.
    pub async fn create(&self, draft: &TicketDraft) -> Result<Ticket, OperationError> {
        let ticket = self
            .client
            .create_ticket(draft)
            .await
            .map_err(|e| OperationError::new(e, CREATE_FAILED))?;

        let mut state = self.state();
        // A fetch that completed first may already hold this ticket.
        state.tickets.retain(|t| t.id != ticket.id);
        state.tickets.insert(0, ticket.clone());
        debug!(id = %ticket.id, "created ticket");
        Ok(ticket)
    }

    /// Update a ticket and replace the cached entry in place.
    ///
    /// If `id` is not cached, the returned ticket is inserted at the head.
    pub async fn update(&self, id: &TicketId, patch: &TicketPatch) -> Result<Ticket, OperationError> {
        let ticket = self
            .client
            .update_ticket(id, patch)
            .await
            .map_err(|e| OperationError::new(e, UPDATE_FAILED))?;

        upsert(&mut self.state().tickets, id, ticket.clone());
        debug!(%id, "updated ticket");
        Ok(ticket)
    }

    /// Delete a ticket and drop it from the list. Deleting an id that is not
    /// cached succeeds and leaves the list unchanged.
    pub async fn delete(&self, id: &TicketId) -> Result<(), OperationError> {
        self.client
            .delete_ticket(id)
            .await
            .map_err(|e| OperationError::new(e, DELETE_FAILED))?;

        let mut state = self.state();
        if let Some(index) = state.tickets.iter().position(|t| &t.id == id) {
            state.tickets.remove(index);
        }
        debug!(%id, "deleted ticket");
        Ok(())
    }

    /// Reload a single ticket, replacing or inserting it like `update`.
    pub async fn refresh(&self, id: &TicketId) -> Result<Ticket, OperationError> {
        let ticket = self
            .client
            .get_ticket(id)
            .await
            .map_err(|e| OperationError::new(e, LOAD_FAILED))?;

        upsert(&mut self.state().tickets, id, ticket.clone());
        Ok(ticket)
    }

    /// Search the backend. Results are returned, not cached.
    pub async fn search(&self, query: &str) -> Result<Vec<Ticket>, OperationError> {
        self.client
            .search_tickets(query)
            .await
            .map_err(|e| OperationError::new(e, SEARCH_FAILED))
    }
}

/// Replace the entry for `id` in place, or insert `ticket` at the head.
///
/// Any other entry carrying the ticket's id is dropped so ids stay unique.
fn upsert(tickets: &mut Vec<Ticket>, id: &TicketId, ticket: Ticket) {
    let index = match tickets.iter().position(|t| &t.id == id) {
        Some(index) => {
            tickets[index] = ticket;
            index
        }
        None => {
            tickets.insert(0, ticket);
            0
        }
    };

    let kept = tickets[index].id.clone();
    let mut position = 0;
    tickets.retain(|t| {
        let keep = position == index || t.id != kept;
        position += 1;
        keep
    });
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
