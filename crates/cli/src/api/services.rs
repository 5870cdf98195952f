// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed wrappers for the backend endpoints.

use serde_json::Value;
use tb_core::{ProfilePatch, Ticket, TicketDraft, TicketId, TicketPatch};
use url::form_urlencoded;

use super::client::{ApiClient, ApiError, ApiResult};
use super::transport::{Method, Transport};

pub const TICKETS_PATH: &str = "/api/tickets";
pub const TICKET_SEARCH_PATH: &str = "/api/tickets/search";
pub const BACKEND_HEALTH_PATH: &str = "/health";
pub const DATABASE_HEALTH_PATH: &str = "/api/health/db";
pub const VERIFY_TOKEN_PATH: &str = "/api/auth/verify";
pub const PROFILE_PATH: &str = "/api/users/profile";

/// Path of a single ticket resource.
///
/// Ids are server-issued strings, so the segment is percent-encoded and a
/// `/` in an id cannot address another resource.
pub fn ticket_path(id: &TicketId) -> String {
    let segment: String = form_urlencoded::byte_serialize(id.as_str().as_bytes()).collect();
    format!("{}/{}", TICKETS_PATH, segment.replace('+', "%20"))
}

impl<T: Transport> ApiClient<T> {
    /// `GET /api/tickets`
    pub async fn list_tickets(&self) -> ApiResult<Vec<Ticket>> {
        self.get_json(TICKETS_PATH).await
    }

    /// `GET /api/tickets/{id}`
    pub async fn get_ticket(&self, id: &TicketId) -> ApiResult<Ticket> {
        self.get_json(&ticket_path(id)).await
    }

    /// `GET /api/tickets/search?q=`
    pub async fn search_tickets(&self, query: &str) -> ApiResult<Vec<Ticket>> {
        self.get_json_with_query(TICKET_SEARCH_PATH, &[("q", query)])
            .await
    }

    /// `POST /api/tickets`
    pub async fn create_ticket(&self, draft: &TicketDraft) -> ApiResult<Ticket> {
        self.send_json(Method::Post, TICKETS_PATH, draft).await
    }

    /// `PUT /api/tickets/{id}`
    pub async fn update_ticket(&self, id: &TicketId, patch: &TicketPatch) -> ApiResult<Ticket> {
        self.send_json(Method::Put, &ticket_path(id), patch).await
    }

    /// `DELETE /api/tickets/{id}`
    pub async fn delete_ticket(&self, id: &TicketId) -> ApiResult<()> {
        self.execute(Method::Delete, &ticket_path(id)).await
    }

    /// `GET /health`
    pub async fn check_backend(&self) -> ApiResult<()> {
        self.execute(Method::Get, BACKEND_HEALTH_PATH).await
    }

    /// `GET /api/health/db`
    pub async fn check_database(&self) -> ApiResult<()> {
        self.execute(Method::Get, DATABASE_HEALTH_PATH).await
    }

    /// `GET /api/auth/verify`
    ///
    /// Returns the verification payload as-is; its shape is backend-defined.
    pub async fn verify_token(&self) -> ApiResult<Value> {
        let response = self.request(Method::Get, VERIFY_TOKEN_PATH, None).await?;
        decode_value(&response.body)
    }

    /// `GET /api/users/profile`
    pub async fn get_profile(&self) -> ApiResult<Value> {
        let response = self.request(Method::Get, PROFILE_PATH, None).await?;
        decode_value(&response.body)
    }

    /// `PUT /api/users/profile`
    pub async fn update_profile(&self, patch: &ProfilePatch) -> ApiResult<Value> {
        let body = serde_json::to_value(patch).map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.request(Method::Put, PROFILE_PATH, Some(&body)).await?;
        decode_value(&response.body)
    }
}

/// Decode a free-form JSON body; an empty body is `null`.
fn decode_value(body: &str) -> ApiResult<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "services_tests.rs"]
mod tests;
