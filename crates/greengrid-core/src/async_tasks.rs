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
use crossbeam_channel::{Receiver, Sender};

use greengrid_types::{EnergyDataset, FetchError};

/// Outcome of one background fetch, delivered over the fetch channel
pub type FetchOutcome = Result<EnergyDataset, FetchError>;

// ============= Energy Data Fetcher =============

/// Component marking this entity as the energy data fetcher worker
#[derive(Component)]
pub struct EnergyDataFetcher {
    pub source_name: String,
}

/// Component that holds the channel endpoints for fetch outcomes
///
/// The sender is cloned into each spawned fetch task; the receiver is
/// drained by the poll system on the main schedule.
#[derive(Component)]
pub struct FetchChannel {
    pub sender: Sender<FetchOutcome>,
    pub receiver: Receiver<FetchOutcome>,
}
