// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! API client for communicating with the ticketboard backend.
//!
//! Every request made by the cache and the health monitor goes through
//! [`ApiClient`], which:
//! - Resolves paths against the configured base URL
//! - Attaches the session's bearer token when one is present
//! - Clears the session and publishes [`AuthState::Unauthenticated`] on any 401
//! - Maps non-2xx responses to [`ApiError::Rejected`]

use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, warn};

use super::transport::{HttpRequest, HttpTransport, Method, RawResponse, Transport, TransportError};
use crate::session::Session;

const STATUS_UNAUTHORIZED: u16 = 401;

/// Error type for API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No response was received.
    #[error("network error: {0}")]
    Transport(#[from] TransportError),

    /// The backend answered with a non-2xx status.
    #[error("server returned {status}: {}", message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        /// The `message` field of a JSON error body, if present.
        message: Option<String>,
        body: String,
    },

    /// A 2xx body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The request body could not be encoded.
    #[error("invalid request body: {0}")]
    Encode(String),

    /// The base URL or request path is not a valid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the backend rejected the credential.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(STATUS_UNAUTHORIZED)
    }

    /// The server-provided message, or `default` when there is none.
    pub fn message_or(&self, default: &str) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => default.to_string(),
        }
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Authentication state as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Authenticated,
    Unauthenticated,
}

/// Shape of error bodies returned by the backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

/// Single point of egress for the backend API.
pub struct ApiClient<T: Transport = HttpTransport> {
    base_url: Url,
    transport: T,
    session: Arc<dyn Session>,
    auth_state: watch::Sender<AuthState>,
}

impl ApiClient<HttpTransport> {
    /// Create a client with the default reqwest transport.
    pub fn new(
        base_url: &str,
        timeout: std::time::Duration,
        session: Arc<dyn Session>,
    ) -> ApiResult<Self> {
        let transport = HttpTransport::new(timeout)?;
        Self::with_transport(base_url, transport, session)
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create a client for `base_url` sending through `transport`.
    pub fn with_transport(
        base_url: &str,
        transport: T,
        session: Arc<dyn Session>,
    ) -> ApiResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                base_url
            )));
        }

        let initial = if session.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        };
        let (auth_state, _) = watch::channel(initial);

        Ok(ApiClient {
            base_url,
            transport,
            session,
            auth_state,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<dyn Session> {
        &self.session
    }

    /// Current authentication state.
    pub fn auth_state(&self) -> AuthState {
        *self.auth_state.borrow()
    }

    /// Subscribe to authentication state changes.
    ///
    /// The receiver observes `Unauthenticated` whenever a response forces a
    /// logout; the presentation layer reacts by returning to the login view.
    pub fn subscribe_auth(&self) -> watch::Receiver<AuthState> {
        self.auth_state.subscribe()
    }

    /// Store a token obtained by the caller and mark the session authenticated.
    pub fn sign_in(&self, token: String) {
        self.session.set_token(token);
        if self.session.is_authenticated() {
            self.auth_state.send_replace(AuthState::Authenticated);
        }
    }

    /// Clear the token at the caller's request.
    pub fn sign_out(&self) {
        self.session.clear_token();
        self.auth_state.send_replace(AuthState::Unauthenticated);
    }

    /// Resolve `path` (with optional query pairs) against the base URL.
    ///
    /// A base URL with a path prefix (`http://host/tickets-app/`) keeps it.
    pub fn url_for(&self, path: &str, query: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            self.base_url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url.set_query(None);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }

    /// Issue a request relative to the base URL.
    ///
    /// Returns the raw response for any 2xx status. Any other status becomes
    /// [`ApiError::Rejected`]; a 401 additionally clears the session.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> ApiResult<RawResponse> {
        self.request_with_query(method, path, &[], body).await
    }

    /// Like [`request`](Self::request), with query parameters.
    pub async fn request_with_query(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&serde_json::Value>,
    ) -> ApiResult<RawResponse> {
        let url = self.url_for(path, query);
        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        let mut headers = vec![("Accept", "application/json".to_string())];
        if body.is_some() {
            headers.push(("Content-Type", "application/json".to_string()));
        }
        if let Some(token) = self.session.token() {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }

        debug!(%method, path, "sending request");
        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await
            .inspect_err(|e| warn!(%method, path, "request failed: {}", e))?;

        if response.status == STATUS_UNAUTHORIZED {
            self.invalidate_session(path);
        }

        if !response.is_success() {
            debug!(%method, path, status = response.status, "request rejected");
            return Err(ApiError::Rejected {
                status: response.status,
                message: error_message(&response.body),
                body: response.body,
            });
        }

        Ok(response)
    }

    /// GET `path` and decode the JSON body.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        let response = self.request(Method::Get, path, None).await?;
        decode(&response)
    }

    /// GET `path` with query parameters and decode the JSON body.
    pub async fn get_json_with_query<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<R> {
        let response = self
            .request_with_query(Method::Get, path, query, None)
            .await?;
        decode(&response)
    }

    /// Send `body` as JSON and decode the JSON response.
    pub async fn send_json<B, R>(&self, method: Method, path: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.request(method, path, Some(&value)).await?;
        decode(&response)
    }

    /// Issue a request whose response body is ignored.
    pub async fn execute(&self, method: Method, path: &str) -> ApiResult<()> {
        self.request(method, path, None).await.map(|_| ())
    }

    /// Clear the stored token and force the unauthenticated view.
    ///
    /// Runs once per 401 response, regardless of which operation issued it.
    fn invalidate_session(&self, path: &str) {
        warn!(path, "credential rejected; clearing session");
        self.session.clear_token();
        self.auth_state.send_replace(AuthState::Unauthenticated);
    }
}

fn decode<R: DeserializeOwned>(response: &RawResponse) -> ApiResult<R> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
