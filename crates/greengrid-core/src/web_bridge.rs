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

use bevy_ecs::prelude::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::trace;

use greengrid_types::round2;

use crate::dashboard::{available_languages, merged_rows, resolve_insight};
use crate::resources::{SelectedLanguage, ViewState};

/// Channel for web query requests
#[derive(Resource)]
pub struct WebQueryChannel {
    pub receiver: mpsc::UnboundedReceiver<WebQueryRequest>,
}

/// Channel for language selection updates
#[derive(Resource)]
pub struct LanguageUpdateChannel {
    pub receiver: mpsc::UnboundedReceiver<String>,
}

/// Channel for fetch activation requests (startup and manual refresh)
#[derive(Resource)]
pub struct ActivationChannel {
    pub receiver: mpsc::UnboundedReceiver<()>,
}

/// Clonable sender for web queries
#[derive(Clone)]
pub struct WebQuerySender {
    sender: mpsc::UnboundedSender<WebQueryRequest>,
}

/// Clonable sender for language selection updates
#[derive(Clone)]
pub struct LanguageUpdateSender {
    sender: mpsc::UnboundedSender<String>,
}

/// Clonable sender for fetch activation requests
#[derive(Clone)]
pub struct ActivationSender {
    sender: mpsc::UnboundedSender<()>,
}

impl std::fmt::Debug for WebQuerySender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebQuerySender").finish_non_exhaustive()
    }
}

impl std::fmt::Debug for LanguageUpdateSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageUpdateSender").finish_non_exhaustive()
    }
}

impl std::fmt::Debug for ActivationSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivationSender").finish_non_exhaustive()
    }
}

impl WebQuerySender {
    /// Create a new sender/receiver pair
    pub fn new() -> (Self, WebQueryChannel) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, WebQueryChannel { receiver })
    }

    /// Request a dashboard snapshot
    pub async fn query_dashboard(&self) -> Result<DashboardSnapshot, QueryError> {
        let (response_tx, response_rx) = tokio::sync::oneshot::channel();

        self.sender
            .send(WebQueryRequest {
                query_type: QueryType::Dashboard,
                response_tx,
            })
            .map_err(|_| QueryError::ChannelClosed)?;

        response_rx.await.map_err(|_| QueryError::ResponseTimeout)
    }
}

impl LanguageUpdateSender {
    /// Create a new sender/receiver pair
    pub fn new() -> (Self, LanguageUpdateChannel) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, LanguageUpdateChannel { receiver })
    }

    /// Send a language selection update
    pub fn send(&self, language: String) -> Result<(), LanguageUpdateError> {
        self.sender
            .send(language)
            .map_err(|_| LanguageUpdateError::ChannelClosed)
    }
}

impl ActivationSender {
    /// Create a new sender/receiver pair
    pub fn new() -> (Self, ActivationChannel) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, ActivationChannel { receiver })
    }

    /// Request a fetch cycle
    pub fn send(&self) -> Result<(), ActivationError> {
        self.sender.send(()).map_err(|_| ActivationError::ChannelClosed)
    }
}

/// Web query request from async web handlers to ECS
pub struct WebQueryRequest {
    pub query_type: QueryType,
    pub response_tx: tokio::sync::oneshot::Sender<DashboardSnapshot>,
}

/// Types of queries the web UI can make
pub enum QueryType {
    Dashboard,
}

/// One merged row for dashboard display, values already rounded to 2 dp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardRowData {
    pub household_id: String,
    pub timestamp: DateTime<Utc>,
    pub forecast_kw: f64,
    pub optimized_kw: Option<f64>,
}

/// Snapshot of the dashboard state handed to web handlers
///
/// `state` is "loading", "ready" or "failed". The pre-activation idle
/// state is reported as "loading" since the web surface only exists once
/// the fetch lifecycle has been kicked off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub timestamp: DateTime<Utc>,
    pub state: String,
    pub error: Option<String>,
    pub rows: Vec<DashboardRowData>,
    /// Recommendation text for the selected language, absent when the
    /// dataset carries no entry for it
    pub insight: Option<String>,
    pub language: String,
    pub available_languages: Vec<String>,
}

/// Query error types
#[derive(Debug)]
pub enum QueryError {
    ChannelClosed,
    ResponseTimeout,
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChannelClosed => write!(f, "Query channel closed"),
            Self::ResponseTimeout => write!(f, "Response timeout"),
        }
    }
}

impl std::error::Error for QueryError {}

/// Error when sending a language update fails
#[derive(Debug)]
pub enum LanguageUpdateError {
    ChannelClosed,
}

impl std::fmt::Display for LanguageUpdateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChannelClosed => write!(f, "Language update channel closed"),
        }
    }
}

impl std::error::Error for LanguageUpdateError {}

/// Error when sending an activation request fails
#[derive(Debug)]
pub enum ActivationError {
    ChannelClosed,
}

impl std::fmt::Display for ActivationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChannelClosed => write!(f, "Activation channel closed"),
        }
    }
}

impl std::error::Error for ActivationError {}

/// ECS system that processes web query requests
pub fn web_query_system(
    view_state: Res<ViewState>,
    language: Res<SelectedLanguage>,
    mut channel: ResMut<WebQueryChannel>,
) {
    // Process all pending queries
    while let Ok(request) = channel.receiver.try_recv() {
        trace!("Processing web query");

        let response = match request.query_type {
            QueryType::Dashboard => build_dashboard_snapshot(&view_state, &language),
        };

        // Send response (ignore if receiver dropped)
        let _ = request.response_tx.send(response);
    }
}

/// Build a dashboard snapshot from the current view state
pub fn build_dashboard_snapshot(
    view_state: &ViewState,
    language: &SelectedLanguage,
) -> DashboardSnapshot {
    let now = Utc::now();

    match view_state {
        ViewState::Idle | ViewState::Loading => DashboardSnapshot {
            timestamp: now,
            state: "loading".to_string(),
            error: None,
            rows: vec![],
            insight: None,
            language: language.get().to_string(),
            available_languages: vec![],
        },
        ViewState::Failed(message) => DashboardSnapshot {
            timestamp: now,
            state: "failed".to_string(),
            error: Some(message.clone()),
            rows: vec![],
            insight: None,
            language: language.get().to_string(),
            available_languages: vec![],
        },
        ViewState::Ready(dataset) => {
            let rows = merged_rows(dataset)
                .into_iter()
                .map(|row| DashboardRowData {
                    household_id: row.household_id,
                    timestamp: row.timestamp,
                    forecast_kw: round2(row.forecast_kw),
                    optimized_kw: row.optimized_kw.map(round2),
                })
                .collect();

            DashboardSnapshot {
                timestamp: now,
                state: "ready".to_string(),
                error: None,
                rows,
                insight: resolve_insight(&dataset.insights, language.get()).map(str::to_owned),
                language: language.get().to_string(),
                available_languages: available_languages(&dataset.insights),
            }
        }
    }
}
