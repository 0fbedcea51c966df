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
use tracing::info;

use crate::resources::SelectedLanguage;
use crate::web_bridge::LanguageUpdateChannel;

/// System that drains language selection updates from the web bridge
///
/// The selection changes independently of the fetch lifecycle. Any string
/// is accepted; a key with no matching recommendation simply resolves to
/// no insight at display time.
pub fn language_update_system(
    mut channel: ResMut<LanguageUpdateChannel>,
    mut language: ResMut<SelectedLanguage>,
) {
    while let Ok(update) = channel.receiver.try_recv() {
        if language.get() != update {
            info!("🌍 Language selection changed: {} -> {}", language.get(), update);
            language.set(update);
        }
    }
}
