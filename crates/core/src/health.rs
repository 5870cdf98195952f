// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Liveness status values reported by the health monitor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reachability of a single health target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// No check has completed yet.
    #[default]
    Checking,
    /// The most recent check succeeded.
    Healthy,
    /// The most recent check failed, or was skipped because a dependency failed.
    Unhealthy,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Checking => "checking",
            HealthStatus::Healthy => "healthy",
            HealthStatus::Unhealthy => "unhealthy",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Backend and database status pair.
///
/// The database is only ever healthy while the backend is healthy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub backend: HealthStatus,
    pub database: HealthStatus,
}

impl HealthReport {
    /// Report for a cycle where the backend check failed. The database check
    /// is never issued in that case.
    pub fn backend_down() -> Self {
        HealthReport {
            backend: HealthStatus::Unhealthy,
            database: HealthStatus::Unhealthy,
        }
    }

    /// Returns true while either target has not been checked yet.
    pub fn is_checking(&self) -> bool {
        self.backend == HealthStatus::Checking || self.database == HealthStatus::Checking
    }

    /// Returns true if both targets are healthy.
    pub fn is_healthy(&self) -> bool {
        self.backend == HealthStatus::Healthy && self.database == HealthStatus::Healthy
    }
}

#[cfg(test)]
#[path = "health_tests.rs"]
mod tests;
