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

pub mod async_systems;
pub mod async_tasks;
pub mod dashboard;
pub mod resources;
pub mod traits;
pub mod web_bridge;

pub use async_systems::{
    activation_system, language_update_system, poll_fetch_outcome, spawn_fetch_worker,
};
pub use async_tasks::*;
use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
pub use dashboard::{available_languages, merged_rows, resolve_insight};
pub use resources::{EnergyDataSourceResource, SelectedLanguage, ViewState};
pub use traits::EnergyDataSource;
pub use web_bridge::{
    ActivationChannel, ActivationSender, DashboardRowData, DashboardSnapshot,
    LanguageUpdateChannel, LanguageUpdateSender, QueryError, WebQueryChannel, WebQuerySender,
    build_dashboard_snapshot, web_query_system,
};

/// Core plugin that registers the dashboard resources and systems
///
/// The data source resource and the bridge channels are inserted by
/// main.rs before the app runs.
pub struct GreenGridCorePlugin;

impl Plugin for GreenGridCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewState>()
            .init_resource::<SelectedLanguage>()
            .add_systems(Startup, spawn_fetch_worker)
            .add_systems(
                Update,
                (
                    activation_system,
                    poll_fetch_outcome,
                    language_update_system,
                    web_query_system,
                )
                    .chain(),
            );
    }
}
