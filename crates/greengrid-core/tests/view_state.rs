// Copyright (c) 2025 GREENGRID STL
//
// This file is part of GreenGrid.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@greengrid-stl.org

//! Integration tests for the fetch lifecycle
//!
//! This tests the full flow: activation -> background fetch -> channel -> ViewState update

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bevy_app::App;
use chrono::{TimeZone, Utc};
use greengrid_core::{
    ActivationSender, EnergyDataSource, EnergyDataSourceResource, FetchOutcome,
    GreenGridCorePlugin, LanguageUpdateSender, SelectedLanguage, ViewState, WebQuerySender,
};
use greengrid_types::{EnergyDataset, FetchError, ForecastReading, Insights, OptimizedReading};
use tokio::sync::Semaphore;

/// Data source driven by a script of outcomes, gated so tests control
/// exactly when each fetch completes
struct ScriptedSource {
    calls: AtomicUsize,
    gate: Arc<Semaphore>,
    outcomes: Mutex<VecDeque<FetchOutcome>>,
}

impl ScriptedSource {
    fn new(outcomes: Vec<FetchOutcome>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            gate: Arc::new(Semaphore::new(0)),
            outcomes: Mutex::new(outcomes.into()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn release_one(&self) {
        self.gate.add_permits(1);
    }
}

#[async_trait]
impl EnergyDataSource for ScriptedSource {
    async fn fetch_energy_data(&self) -> Result<EnergyDataset, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|_| FetchError::new("gate closed"))?;
        permit.forget();

        self.outcomes
            .lock()
            .expect("outcomes lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::new("script exhausted")))
    }

    async fn health_check(&self) -> anyhow::Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn sample_dataset() -> EnergyDataset {
    let mut insights = Insights::default();
    insights
        .recommendations
        .insert("English".to_string(), "Reduce evening peak usage".to_string());

    EnergyDataset {
        forecasted_data: vec![ForecastReading {
            household_id: "1".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 6, 15, 18, 0, 0).unwrap(),
            power_kw: 3.5,
        }],
        optimized_data: vec![OptimizedReading {
            household_id: None,
            timestamp: None,
            adjusted_power_kw: 3.0,
        }],
        insights,
    }
}

fn build_app(
    source: Arc<ScriptedSource>,
) -> (App, ActivationSender, LanguageUpdateSender, WebQuerySender) {
    let mut app = App::new();

    let (activation_sender, activation_channel) = ActivationSender::new();
    let (language_sender, language_channel) = LanguageUpdateSender::new();
    let (query_sender, query_channel) = WebQuerySender::new();

    app.insert_resource(EnergyDataSourceResource(source));
    app.insert_resource(activation_channel);
    app.insert_resource(language_channel);
    app.insert_resource(query_channel);
    app.add_plugins(GreenGridCorePlugin);

    (app, activation_sender, language_sender, query_sender)
}

/// Pump app updates until the condition holds or the attempts run out
async fn pump_until(app: &mut App, mut cond: impl FnMut(&App) -> bool) -> bool {
    for _ in 0..200 {
        app.update();
        if cond(app) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    false
}

#[tokio::test(flavor = "multi_thread")]
async fn test_startup_fetch_reaches_ready() {
    let source = ScriptedSource::new(vec![Ok(sample_dataset())]);
    let (mut app, _activation, _language, _query) = build_app(source.clone());

    // First update runs the startup system: fetch spawned, state loading
    app.update();
    assert!(app.world().resource::<ViewState>().is_loading());
    assert_eq!(source.calls(), 1);

    source.release_one();
    let ready = pump_until(&mut app, |app| {
        app.world().resource::<ViewState>().dataset().is_some()
    })
    .await;
    assert!(ready, "view state never reached ready");

    let state = app.world().resource::<ViewState>();
    let dataset = state.dataset().expect("dataset should be present");
    assert_eq!(dataset.forecasted_data.len(), 1);
    assert_eq!(source.calls(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_activation_ignored_while_loading() {
    let source = ScriptedSource::new(vec![Ok(sample_dataset())]);
    let (mut app, activation, _language, _query) = build_app(source.clone());

    app.update();
    assert!(app.world().resource::<ViewState>().is_loading());

    // Repeated activations while the first cycle is still in flight
    for _ in 0..3 {
        activation.send().expect("activation send failed");
        app.update();
    }
    tokio::time::sleep(Duration::from_millis(20)).await;
    app.update();

    assert_eq!(source.calls(), 1, "in-flight cycle must not be duplicated");
    assert!(app.world().resource::<ViewState>().is_loading());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_refetch_after_ready_and_failure_message() {
    let source = ScriptedSource::new(vec![
        Ok(sample_dataset()),
        Err(FetchError::new("Network response was not ok")),
    ]);
    let (mut app, activation, _language, _query) = build_app(source.clone());

    app.update();
    source.release_one();
    let ready = pump_until(&mut app, |app| {
        app.world().resource::<ViewState>().dataset().is_some()
    })
    .await;
    assert!(ready);

    // A new activation after completion starts a second cycle
    activation.send().expect("activation send failed");
    let loading = pump_until(&mut app, |app| {
        app.world().resource::<ViewState>().is_loading()
    })
    .await;
    assert!(loading);
    assert_eq!(source.calls(), 2);

    source.release_one();
    let failed = pump_until(&mut app, |app| {
        app.world().resource::<ViewState>().error_message().is_some()
    })
    .await;
    assert!(failed, "view state never reached failed");

    assert_eq!(
        app.world().resource::<ViewState>().error_message(),
        Some("Network response was not ok")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_language_selection_independent_of_fetch() {
    let source = ScriptedSource::new(vec![Ok(sample_dataset())]);
    let (mut app, _activation, language, _query) = build_app(source.clone());

    app.update();
    assert_eq!(app.world().resource::<SelectedLanguage>().get(), "English");

    // Language changes while the fetch is still in flight
    language
        .send("Bosnian".to_string())
        .expect("language send failed");
    app.update();

    assert_eq!(app.world().resource::<SelectedLanguage>().get(), "Bosnian");
    assert!(app.world().resource::<ViewState>().is_loading());

    // Completing the fetch leaves the selection untouched
    source.release_one();
    let ready = pump_until(&mut app, |app| {
        app.world().resource::<ViewState>().dataset().is_some()
    })
    .await;
    assert!(ready);
    assert_eq!(app.world().resource::<SelectedLanguage>().get(), "Bosnian");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_web_query_snapshot_after_ready() {
    let source = ScriptedSource::new(vec![Ok(sample_dataset())]);
    let (mut app, _activation, _language, query) = build_app(source.clone());

    app.update();
    source.release_one();
    let ready = pump_until(&mut app, |app| {
        app.world().resource::<ViewState>().dataset().is_some()
    })
    .await;
    assert!(ready);

    // Query runs on the async side while the app keeps updating
    let query_task = tokio::spawn(async move { query.query_dashboard().await });
    let mut done = false;
    for _ in 0..200 {
        app.update();
        if query_task.is_finished() {
            done = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(done, "web query never resolved");

    let snapshot = query_task
        .await
        .expect("query task panicked")
        .expect("query failed");
    assert_eq!(snapshot.state, "ready");
    assert_eq!(snapshot.rows.len(), 1);
    assert_eq!(snapshot.insight.as_deref(), Some("Reduce evening peak usage"));
    assert_eq!(snapshot.language, "English");
}
