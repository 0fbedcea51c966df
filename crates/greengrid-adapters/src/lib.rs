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

pub mod client;
pub mod http_source;
pub mod pipeline_source;

pub use client::EnergyApiClient;
pub use http_source::HttpEnergyDataAdapter;
pub use pipeline_source::{PipelineEnergyDataSource, UsageSource};
