// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod auth;
pub mod delete;
pub mod edit;
pub mod health;
pub mod list;
pub mod new;
pub mod profile;
pub mod search;
pub mod show;
pub mod stats;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::io::Write;
use std::sync::Arc;

use serde::Serialize;
use tb_core::Ticket;

use crate::api::{ApiClient, ApiError, AuthState, HttpTransport, Transport};
use crate::cache::{OperationError, TicketCache};
use crate::config::{self, find_config_dir, Config};
use crate::error::{Error, Result};
use crate::session::FileSession;

/// Everything a command needs to talk to the backend.
pub struct Context<T: Transport = HttpTransport> {
    pub config: Config,
    pub client: Arc<ApiClient<T>>,
    pub cache: TicketCache<T>,
}

impl Context<HttpTransport> {
    /// Open the context from the user's configuration directory.
    pub fn open(api_url: Option<String>) -> Result<Self> {
        let config_dir = find_config_dir()?;
        let config = config::resolve(&config_dir, api_url)?;
        let session = Arc::new(FileSession::open(&config.token_path(&config_dir))?);
        let client = Arc::new(ApiClient::new(&config.api_url, config.timeout(), session)?);
        Ok(Context::new(config, client))
    }
}

impl<T: Transport> Context<T> {
    pub fn new(config: Config, client: Arc<ApiClient<T>>) -> Self {
        let cache = TicketCache::new(Arc::clone(&client));
        Context {
            config,
            client,
            cache,
        }
    }

    /// Fail early when no token is stored.
    pub fn require_auth(&self) -> Result<()> {
        if self.client.session().is_authenticated() {
            Ok(())
        } else {
            Err(Error::NotAuthenticated)
        }
    }

    /// Map a failed operation; a forced logout gets a login hint.
    pub fn operation_error(&self, err: OperationError) -> Error {
        if err.is_unauthorized() {
            Error::SessionExpired(err.message)
        } else {
            Error::Operation(err)
        }
    }

    /// Map a failed direct API call; a 401 gets a login hint.
    pub fn api_error(&self, err: ApiError, fallback: &str) -> Error {
        if err.is_unauthorized() {
            Error::SessionExpired(err.message_or(fallback))
        } else {
            Error::Api(err)
        }
    }

    /// Refresh the cache and return its tickets.
    pub async fn load_tickets(&self) -> Result<Vec<Ticket>> {
        self.cache.fetch_all().await;
        match self.cache.error() {
            Some(message) if self.client.auth_state() == AuthState::Unauthenticated => {
                Err(Error::SessionExpired(message))
            }
            Some(message) => Err(Error::Fetch(message)),
            None => Ok(self.cache.tickets()),
        }
    }
}

/// Write a value as pretty-printed JSON.
pub(crate) fn write_json(out: &mut dyn Write, value: &impl Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(out, "{json}")?;
    Ok(())
}
