// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use tokio::sync::oneshot;
use yare::parameterized;

use super::*;
use crate::api::test_helpers::make_authed_client;
use crate::api::transport_tests::MockTransport;
use crate::api::{Method, RawResponse, BACKEND_HEALTH_PATH, DATABASE_HEALTH_PATH};
use crate::commands::testing::TestContext;
use crate::health::ManualSchedule;

fn script_cycle(mock: &MockTransport, backend: u16, database: Option<u16>) {
    mock.reply(Method::Get, BACKEND_HEALTH_PATH, backend, "");
    if let Some(status) = database {
        mock.reply(Method::Get, DATABASE_HEALTH_PATH, status, "");
    }
}

/// Let every other future in the current task catch up.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[parameterized(
    healthy = { HealthStatus::Healthy, HealthStatus::Healthy, None },
    backend_down = { HealthStatus::Unhealthy, HealthStatus::Unhealthy, Some("backend") },
    database_down = { HealthStatus::Healthy, HealthStatus::Unhealthy, Some("database") },
    still_checking = { HealthStatus::Healthy, HealthStatus::Checking, Some("database") },
)]
fn test_verdict(backend: HealthStatus, database: HealthStatus, failing: Option<&str>) {
    let result = verdict(&HealthReport { backend, database });
    match failing {
        None => assert!(result.is_ok()),
        Some(target) => assert!(matches!(result, Err(Error::Unhealthy(t)) if t == target)),
    }
}

#[tokio::test]
async fn test_check_healthy() {
    let mut t = TestContext::new();
    script_cycle(&t.mock, 200, Some(200));

    check(&t.ctx, OutputFormat::Text, &mut t.out).await.unwrap();

    assert_eq!(t.output(), "backend: healthy\ndatabase: healthy\n");
}

#[tokio::test]
async fn test_check_database_down_fails_after_printing() {
    let mut t = TestContext::new();
    script_cycle(&t.mock, 200, Some(500));

    let err = check(&t.ctx, OutputFormat::Json, &mut t.out)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Unhealthy("database")));
    let json = t.json();
    assert_eq!(json["backend"], "healthy");
    assert_eq!(json["database"], "unhealthy");
}

#[tokio::test]
async fn test_check_backend_down_skips_database() {
    let mut t = TestContext::new();
    t.mock.fail(Method::Get, BACKEND_HEALTH_PATH);

    let err = check(&t.ctx, OutputFormat::Text, &mut t.out)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Unhealthy("backend")));
    assert_eq!(t.mock.count(Method::Get, DATABASE_HEALTH_PATH), 0);
    assert_eq!(t.output(), "backend: unhealthy\ndatabase: unhealthy\n");
}

#[tokio::test]
async fn test_check_works_signed_out() {
    let mut t = TestContext::signed_out();
    script_cycle(&t.mock, 200, Some(200));

    check(&t.ctx, OutputFormat::Text, &mut t.out).await.unwrap();

    assert!(t.mock.requests()[0].header("Authorization").is_none());
}

#[tokio::test]
async fn test_watch_prints_each_change_once() {
    let mock = MockTransport::new();
    script_cycle(&mock, 200, Some(200));
    script_cycle(&mock, 503, None);
    script_cycle(&mock, 503, None);
    script_cycle(&mock, 200, Some(200));
    let monitor = Arc::new(HealthMonitor::new(make_authed_client(&mock)));
    let mut reports = monitor.subscribe();
    let (schedule, trigger) = ManualSchedule::channel();
    let (stop, stopped) = oneshot::channel::<()>();
    let mut out = Vec::new();

    let driver = async move {
        reports.wait_for(|r| !r.is_checking()).await.unwrap();
        settle().await;
        for _ in 0..3 {
            trigger.tick().await.unwrap();
            settle().await;
        }
        stop.send(()).unwrap();
    };
    let shutdown = async {
        let _ = stopped.await;
    };
    let (result, ()) = tokio::join!(
        watch(
            Arc::clone(&monitor),
            schedule,
            OutputFormat::Text,
            &mut out,
            shutdown
        ),
        driver
    );

    result.unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "backend: healthy, database: healthy\n\
         backend: unhealthy, database: unhealthy\n\
         backend: healthy, database: healthy\n"
    );
    assert_eq!(mock.count(Method::Get, BACKEND_HEALTH_PATH), 4);
}

#[tokio::test]
async fn test_watch_waits_for_the_database_check() {
    let mock = MockTransport::new();
    script_cycle(&mock, 503, None);
    mock.reply(Method::Get, BACKEND_HEALTH_PATH, 200, "");
    let gate = mock.gate(Method::Get, DATABASE_HEALTH_PATH);
    let monitor = Arc::new(HealthMonitor::new(make_authed_client(&mock)));
    let mut completed = monitor.subscribe_completed();
    let (schedule, trigger) = ManualSchedule::channel();
    let (stop, stopped) = oneshot::channel::<()>();
    let wire = mock.clone();
    let mut out = Vec::new();

    let driver = async move {
        completed.wait_for(|r| !r.is_checking()).await.unwrap();
        settle().await;
        assert!(trigger.fire());
        while wire.count(Method::Get, DATABASE_HEALTH_PATH) < 1 {
            tokio::task::yield_now().await;
        }
        // Backend is already healthy, database still pending
        settle().await;
        gate.send(RawResponse::new(200, "")).unwrap();
        completed.wait_for(|r| r.is_healthy()).await.unwrap();
        settle().await;
        stop.send(()).unwrap();
    };
    let shutdown = async {
        let _ = stopped.await;
    };
    let (result, ()) = tokio::join!(
        watch(monitor, schedule, OutputFormat::Text, &mut out, shutdown),
        driver
    );

    result.unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "backend: unhealthy, database: unhealthy\n\
         backend: healthy, database: healthy\n"
    );
}

#[tokio::test]
async fn test_watch_json_lines() {
    let mock = MockTransport::new();
    script_cycle(&mock, 200, Some(503));
    let monitor = Arc::new(HealthMonitor::new(make_authed_client(&mock)));
    let mut reports = monitor.subscribe();
    let (schedule, _trigger) = ManualSchedule::channel();
    let (stop, stopped) = oneshot::channel::<()>();
    let mut out = Vec::new();

    let driver = async move {
        reports.wait_for(|r| !r.is_checking()).await.unwrap();
        settle().await;
        stop.send(()).unwrap();
    };
    let shutdown = async {
        let _ = stopped.await;
    };
    let (result, ()) = tokio::join!(
        watch(monitor, schedule, OutputFormat::Json, &mut out, shutdown),
        driver
    );

    result.unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{\"backend\":\"healthy\",\"database\":\"unhealthy\"}\n"
    );
}

#[tokio::test]
async fn test_watch_stops_polling_on_shutdown() {
    let mock = MockTransport::new();
    script_cycle(&mock, 200, Some(200));
    let monitor = Arc::new(HealthMonitor::new(make_authed_client(&mock)));
    let (schedule, trigger) = ManualSchedule::channel();
    let mut out = Vec::new();

    watch(
        monitor,
        schedule,
        OutputFormat::Text,
        &mut out,
        std::future::ready(()),
    )
    .await
    .unwrap();

    assert!(!trigger.fire());
}
