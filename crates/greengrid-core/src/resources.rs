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
use std::fmt;
use std::sync::Arc;

use crate::traits::EnergyDataSource;
use greengrid_types::EnergyDataset;

// ============= View State =============

/// Single source of truth for what the presentation layer should display.
///
/// Exactly one variant holds at any time. Transitions are applied only by
/// the fetch-lifecycle systems, atomically from the perspective of any other
/// system in the update schedule: `Idle -> Loading` on activation,
/// `Loading -> Ready` on fetch success, `Loading -> Failed` on fetch
/// failure. There is no automatic return from a terminal state; a new cycle
/// requires an explicit re-activation.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    /// Initial state, before any fetch has started.
    #[default]
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// The current cycle completed with a full dataset.
    Ready(EnergyDataset),
    /// The current cycle failed; the message is surfaced verbatim.
    Failed(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The dataset, when in `Ready`.
    pub fn dataset(&self) -> Option<&EnergyDataset> {
        match self {
            Self::Ready(dataset) => Some(dataset),
            Self::Idle | Self::Loading | Self::Failed(_) => None,
        }
    }

    /// The failure message, when in `Failed`.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            Self::Idle | Self::Loading | Self::Ready(_) => None,
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading => write!(f, "loading"),
            Self::Ready(dataset) => write!(f, "ready ({} rows)", dataset.len()),
            Self::Failed(message) => write!(f, "failed: {message}"),
        }
    }
}

// ============= Selected Language =============

/// The language key used to resolve the recommendation text.
///
/// Defaults to "English", persists across re-fetches, and is mutated only by
/// an explicit user selection. It may name a language absent from the
/// current dataset's insight map, in which case resolution degrades to an
/// explicit "no insights available" indication (never an error).
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SelectedLanguage(String);

impl Default for SelectedLanguage {
    fn default() -> Self {
        Self("English".to_owned())
    }
}

impl SelectedLanguage {
    pub fn new(language: impl Into<String>) -> Self {
        Self(language.into())
    }

    pub fn get(&self) -> &str {
        &self.0
    }

    pub fn set(&mut self, language: impl Into<String>) {
        self.0 = language.into();
    }
}

// ============= Data Source Resource =============

/// Shared handle to the configured energy data source.
#[derive(Resource, Clone)]
pub struct EnergyDataSourceResource(pub Arc<dyn EnergyDataSource>);

impl fmt::Debug for EnergyDataSourceResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnergyDataSourceResource")
            .field(&self.0.name())
            .finish()
    }
}
