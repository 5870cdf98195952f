// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Backend and database liveness polling.
//!
//! A [`HealthMonitor`] checks `GET /health` and, only when that succeeds,
//! `GET /api/health/db`. The resulting [`HealthReport`] is published on a
//! watch channel. Polling runs as a task owned by a [`MonitorHandle`] and is
//! driven by a [`Schedule`], so tests can tick it by hand.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tb_core::{HealthReport, HealthStatus};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::api::{ApiClient, HttpTransport, Transport};

/// Default polling period.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

/// One firing of a schedule.
///
/// A tick may carry an acknowledgement that receives the report produced by
/// the cycle it triggered.
#[derive(Debug, Default)]
pub struct Tick {
    ack: Option<oneshot::Sender<HealthReport>>,
}

impl Tick {
    pub fn new() -> Self {
        Tick::default()
    }

    fn complete(self, report: HealthReport) {
        if let Some(ack) = self.ack {
            // The trigger may have stopped waiting
            let _ = ack.send(report);
        }
    }
}

/// Source of poll cycles after the initial one.
pub trait Schedule: Send + 'static {
    /// Wait for the next tick. `None` ends polling.
    fn next_tick(&mut self) -> Pin<Box<dyn Future<Output = Option<Tick>> + Send + '_>>;
}

/// Wall-clock schedule firing every `period`, starting one period from now.
pub struct IntervalSchedule {
    interval: Interval,
}

impl IntervalSchedule {
    pub fn new(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        IntervalSchedule { interval }
    }
}

impl Schedule for IntervalSchedule {
    fn next_tick(&mut self) -> Pin<Box<dyn Future<Output = Option<Tick>> + Send + '_>> {
        Box::pin(async move {
            self.interval.tick().await;
            Some(Tick::new())
        })
    }
}

/// Schedule that only fires when its [`ManualTrigger`] says so.
///
/// Ends once every trigger has been dropped.
pub struct ManualSchedule {
    ticks: mpsc::UnboundedReceiver<Tick>,
}

/// Fires a [`ManualSchedule`].
#[derive(Clone)]
pub struct ManualTrigger {
    ticks: mpsc::UnboundedSender<Tick>,
}

impl ManualSchedule {
    /// Creates a schedule and its trigger.
    pub fn channel() -> (ManualSchedule, ManualTrigger) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ManualSchedule { ticks: rx }, ManualTrigger { ticks: tx })
    }
}

impl Schedule for ManualSchedule {
    fn next_tick(&mut self) -> Pin<Box<dyn Future<Output = Option<Tick>> + Send + '_>> {
        Box::pin(self.ticks.recv())
    }
}

impl ManualTrigger {
    /// Fire one cycle and wait for its report.
    ///
    /// Returns `None` if the monitor was stopped before the cycle finished.
    pub async fn tick(&self) -> Option<HealthReport> {
        let (ack, report) = oneshot::channel();
        self.ticks.send(Tick { ack: Some(ack) }).ok()?;
        report.await.ok()
    }

    /// Fire one cycle without waiting.
    pub fn fire(&self) -> bool {
        self.ticks.send(Tick::new()).is_ok()
    }
}

/// Publishes the backend/database status pair.
pub struct HealthMonitor<T: Transport = HttpTransport> {
    client: Arc<ApiClient<T>>,
    report: watch::Sender<HealthReport>,
    /// Only written when a cycle finishes.
    completed: watch::Sender<HealthReport>,
}

impl<T: Transport> HealthMonitor<T> {
    /// Creates a monitor with both targets in the checking state.
    pub fn new(client: Arc<ApiClient<T>>) -> Self {
        let (report, _) = watch::channel(HealthReport::default());
        let (completed, _) = watch::channel(HealthReport::default());
        HealthMonitor {
            client,
            report,
            completed,
        }
    }

    /// Latest published report.
    pub fn report(&self) -> HealthReport {
        *self.report.borrow()
    }

    /// Receiver of every published change, including the healthy backend
    /// published while the database check is still in flight.
    pub fn subscribe(&self) -> watch::Receiver<HealthReport> {
        self.report.subscribe()
    }

    /// Receiver that only sees the report of each finished cycle.
    pub fn subscribe_completed(&self) -> watch::Receiver<HealthReport> {
        self.completed.subscribe()
    }

    /// Run one check cycle and return the resulting report.
    ///
    /// A healthy backend is published before the database check is issued.
    /// If the backend check fails, the database is marked unhealthy without
    /// being checked.
    pub async fn check(&self) -> HealthReport {
        if let Err(e) = self.client.check_backend().await {
            warn!("backend health check failed: {}", e);
            self.report.send_replace(HealthReport::backend_down());
            return self.finish();
        }
        self.report
            .send_modify(|report| report.backend = HealthStatus::Healthy);

        let database = match self.client.check_database().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => {
                warn!("database health check failed: {}", e);
                HealthStatus::Unhealthy
            }
        };
        self.report.send_modify(|report| report.database = database);

        self.finish()
    }

    fn finish(&self) -> HealthReport {
        let report = self.report();
        self.completed.send_replace(report);
        debug!(backend = %report.backend, database = %report.database, "health check complete");
        report
    }
}

impl<T: Transport + 'static> HealthMonitor<T> {
    /// Start polling: one cycle now, then one per schedule tick.
    ///
    /// Each activation owns its own task; stop it through the returned handle.
    pub fn activate(self: &Arc<Self>, mut schedule: impl Schedule) -> MonitorHandle {
        let monitor = Arc::clone(self);
        let task = tokio::spawn(async move {
            monitor.check().await;
            while let Some(tick) = schedule.next_tick().await {
                let report = monitor.check().await;
                tick.complete(report);
            }
            debug!("health schedule ended");
        });
        info!("health monitor activated");
        MonitorHandle { task: Some(task) }
    }
}

/// Owner of an activation's polling task. Dropping it cancels polling.
pub struct MonitorHandle {
    task: Option<JoinHandle<()>>,
}

impl MonitorHandle {
    /// Cancel polling and wait for the task to wind down.
    ///
    /// No report is published after this returns.
    pub async fn stop(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            // Cancellation is the expected outcome
            let _ = task.await;
            info!("health monitor stopped");
        }
    }

    /// Returns true once the polling task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
#[path = "health_tests.rs"]
mod tests;
