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

use std::sync::Arc;

use bevy_ecs::prelude::*;
use crossbeam_channel::Sender;
use tracing::{debug, error, info, warn};

use crate::async_tasks::{EnergyDataFetcher, FetchChannel, FetchOutcome};
use crate::resources::{EnergyDataSourceResource, ViewState};
use crate::traits::EnergyDataSource;
use crate::web_bridge::ActivationChannel;

/// Spawns the energy data fetcher worker entity and kicks off the first
/// fetch cycle
pub fn spawn_fetch_worker(
    mut commands: Commands,
    source: Res<EnergyDataSourceResource>,
    mut view_state: ResMut<ViewState>,
) {
    info!("🌐 Setting up energy data fetcher...");

    let (fetch_tx, fetch_rx) = crossbeam_channel::bounded(4);

    // First cycle starts immediately, the dashboard never sits idle
    *view_state = ViewState::Loading;
    begin_fetch_cycle(source.0.clone(), fetch_tx.clone());

    commands.spawn((
        EnergyDataFetcher {
            source_name: source.0.name().to_string(),
        },
        FetchChannel {
            sender: fetch_tx,
            receiver: fetch_rx,
        },
    ));

    info!("✅ Energy data fetcher entity created");
}

/// System that drains activation requests and starts a fetch cycle
///
/// Requests arriving while a cycle is in flight are dropped. The running
/// cycle's completion is the only transition out of the loading state, so
/// re-activation can never produce overlapping cycles.
pub fn activation_system(
    mut channel: ResMut<ActivationChannel>,
    source: Res<EnergyDataSourceResource>,
    mut view_state: ResMut<ViewState>,
    fetchers: Query<&FetchChannel>,
) {
    let mut requested = false;
    while channel.receiver.try_recv().is_ok() {
        requested = true;
    }
    if !requested {
        return;
    }

    if view_state.is_loading() {
        debug!("Fetch already in flight, ignoring activation request");
        return;
    }

    let Ok(fetch_channel) = fetchers.single() else {
        warn!("⚠️ Activation requested but no fetcher entity exists");
        return;
    };

    info!("🔄 Activation requested, starting fetch cycle");
    *view_state = ViewState::Loading;
    begin_fetch_cycle(source.0.clone(), fetch_channel.sender.clone());
}

/// System that polls the fetch channel and applies completed outcomes
///
/// Outcomes are applied in arrival order; when several are pending the
/// last one drained determines the resulting state.
pub fn poll_fetch_outcome(fetchers: Query<&FetchChannel>, mut view_state: ResMut<ViewState>) {
    let Ok(channel) = fetchers.single() else {
        return; // No fetcher entity yet
    };

    // NON-BLOCKING: try to receive from channel
    while let Ok(outcome) = channel.receiver.try_recv() {
        match outcome {
            Ok(dataset) => {
                info!(
                    "📊 Energy dataset received: {} forecast readings, {} optimized, {} insight languages",
                    dataset.forecasted_data.len(),
                    dataset.optimized_data.len(),
                    dataset.insights.recommendations.len()
                );
                *view_state = ViewState::Ready(dataset);
            }
            Err(e) => {
                error!("❌ Fetch cycle failed: {e}");
                *view_state = ViewState::Failed(e.message().to_string());
            }
        }
    }
}

/// Runs one fetch against the data source on the async runtime
fn begin_fetch_cycle(source: Arc<dyn EnergyDataSource>, tx: Sender<FetchOutcome>) {
    tokio::spawn(async move {
        debug!("Fetching energy data from {}", source.name());
        let outcome = source.fetch_energy_data().await;
        if tx.send(outcome).is_err() {
            warn!("⚠️ Fetch outcome dropped, channel closed");
        }
    });
}
