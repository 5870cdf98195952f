// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bearer token storage.
//!
//! The [`Session`] trait is the only view the API client has of the
//! credential: it reads the token before each request and clears it when the
//! backend rejects it. Acquiring a token is left to the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Holder of the current bearer token.
///
/// Implementations must tolerate `clear_token` on an already-empty session.
pub trait Session: Send + Sync {
    /// Returns the current token, if any.
    fn token(&self) -> Option<String>;

    /// Stores a new token, replacing any previous one.
    fn set_token(&self, token: String);

    /// Removes the token. No-op if absent.
    fn clear_token(&self);

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// Normalize a raw token value: surrounding whitespace is dropped and an
/// empty token counts as absent.
fn normalize(token: &str) -> Option<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Session kept only in memory.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: Mutex<Option<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        MemorySession::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        MemorySession {
            token: Mutex::new(normalize(&token.into())),
        }
    }
}

impl Session for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set_token(&self, token: String) {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = normalize(&token);
    }

    fn clear_token(&self) {
        self.token.lock().unwrap_or_else(|e| e.into_inner()).take();
    }
}

/// Session persisted to a file so the login survives between runs.
///
/// The token is read once on open and cached; writes go through to disk.
/// Storage failures are logged rather than returned, so a failing disk never
/// keeps a rejected token alive in memory.
#[derive(Debug)]
pub struct FileSession {
    path: PathBuf,
    token: Mutex<Option<String>>,
}

impl FileSession {
    /// Opens the session stored at `path`. A missing file means no token.
    pub fn open(path: &Path) -> io::Result<Self> {
        let token = match fs::read_to_string(path) {
            Ok(content) => normalize(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e),
        };

        Ok(FileSession {
            path: path.to_path_buf(),
            token: Mutex::new(token),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    fn remove(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

impl Session for FileSession {
    fn token(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set_token(&self, token: String) {
        let mut current = self.token.lock().unwrap_or_else(|e| e.into_inner());
        match normalize(&token) {
            Some(token) => {
                if let Err(e) = self.persist(&token) {
                    tracing::warn!(path = %self.path.display(), "failed to persist token: {}", e);
                }
                *current = Some(token);
            }
            None => {
                if let Err(e) = self.remove() {
                    tracing::warn!(path = %self.path.display(), "failed to remove token: {}", e);
                }
                *current = None;
            }
        }
    }

    fn clear_token(&self) {
        let mut current = self.token.lock().unwrap_or_else(|e| e.into_inner());
        if current.take().is_some() {
            tracing::debug!(path = %self.path.display(), "clearing stored token");
        }
        if let Err(e) = self.remove() {
            tracing::warn!(path = %self.path.display(), "failed to remove token: {}", e);
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
