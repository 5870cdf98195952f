// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tb-core operations.

use thiserror::Error;

/// All possible errors that can occur in tb-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid priority: '{0}'\n  hint: valid priorities are: low, medium, high")]
    InvalidPriority(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: open, in_progress, closed")]
    InvalidStatus(String),

    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("{0}")]
    InvalidInput(String),
}

/// A specialized Result type for tb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
