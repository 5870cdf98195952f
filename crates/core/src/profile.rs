// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Update payload for the signed-in user's profile.

use serde::Serialize;

use crate::error::{Error, Result};

/// Partial profile update. Unset fields are left untouched remotely.
///
/// The profile itself is returned by the backend in whatever shape it
/// chooses, so only the request side is typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl ProfilePatch {
    pub fn new() -> Self {
        ProfilePatch::default()
    }

    /// Sets a new username. A blank username is rejected.
    pub fn username(mut self, username: impl Into<String>) -> Result<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(Error::EmptyField { field: "username" });
        }
        self.username = Some(username);
        Ok(self)
    }

    /// Sets a new email address. Anything without an `@` is rejected.
    pub fn email(mut self, email: impl Into<String>) -> Result<Self> {
        let email = email.into();
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyField { field: "email" });
        }
        if !trimmed.contains('@') {
            return Err(Error::InvalidInput(format!("invalid email '{}'", trimmed)));
        }
        self.email = Some(trimmed.to_string());
        Ok(self)
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
