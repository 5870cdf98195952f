// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::api::ApiError;
use crate::cache::OperationError;

/// All possible errors surfaced by the `tb` front end.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Model(#[from] tb_core::Error),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("{0}")]
    Operation(#[from] OperationError),

    /// A list load failed; carries the user-facing message.
    #[error("{0}")]
    Fetch(String),

    #[error("not logged in\n  hint: run 'tb login --token <TOKEN>' first")]
    NotAuthenticated,

    #[error("{0}\n  hint: your session expired, run 'tb login --token <TOKEN>' again")]
    SessionExpired(String),

    #[error("token rejected by the server")]
    TokenRejected,

    #[error("{0} is unhealthy")]
    Unhealthy(&'static str),

    #[error("nothing to update\n  hint: pass at least one of --title, --description, --priority")]
    EmptyPatch,

    #[error("operation cancelled")]
    Cancelled,

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for front-end operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
