// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use tb_core::{HealthReport, HealthStatus};

use super::{write_json, Context};
use crate::api::Transport;
use crate::cli::OutputFormat;
use crate::display::{format_health, format_health_line};
use crate::error::{Error, Result};
use crate::health::{HealthMonitor, Schedule};

/// Exit status of a one-shot check: the first unhealthy target, if any.
pub(crate) fn verdict(report: &HealthReport) -> Result<()> {
    if report.backend != HealthStatus::Healthy {
        return Err(Error::Unhealthy("backend"));
    }
    if report.database != HealthStatus::Healthy {
        return Err(Error::Unhealthy("database"));
    }
    Ok(())
}

/// Check once and print the report. Fails if either target is unhealthy.
pub async fn check<T: Transport>(ctx: &Context<T>, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let monitor = HealthMonitor::new(Arc::clone(&ctx.client));
    let report = monitor.check().await;
    match format {
        OutputFormat::Json => write_json(out, &report)?,
        OutputFormat::Text | OutputFormat::Id => writeln!(out, "{}", format_health(&report))?,
    }
    verdict(&report)
}

/// Poll on `schedule` and print each completed change until `shutdown`
/// resolves. Repeated reports are printed once.
pub async fn watch<T, S, F>(
    monitor: Arc<HealthMonitor<T>>,
    schedule: S,
    format: OutputFormat,
    out: &mut dyn Write,
    shutdown: F,
) -> Result<()>
where
    T: Transport + 'static,
    S: Schedule,
    F: Future<Output = ()>,
{
    let mut reports = monitor.subscribe_completed();
    let handle = monitor.activate(schedule);
    tokio::pin!(shutdown);

    let mut last: Option<HealthReport> = None;
    let result = loop {
        tokio::select! {
            biased;
            changed = reports.changed() => {
                if changed.is_err() {
                    break Ok(());
                }
                let report = *reports.borrow_and_update();
                if report.is_checking() || last == Some(report) {
                    continue;
                }
                last = Some(report);
                let written = match format {
                    OutputFormat::Json => serde_json::to_string(&report)
                        .map_err(Error::from)
                        .and_then(|line| writeln!(out, "{line}").map_err(Error::from)),
                    OutputFormat::Text | OutputFormat::Id => {
                        writeln!(out, "{}", format_health_line(&report)).map_err(Error::from)
                    }
                };
                if let Err(e) = written {
                    break Err(e);
                }
            }
            _ = &mut shutdown => break Ok(()),
        }
    };

    handle.stop().await;
    result
}

#[cfg(test)]
#[path = "health_tests.rs"]
mod tests;
