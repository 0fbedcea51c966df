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

pub mod dataset;
pub mod display;
pub mod error;

// Re-export common types for convenience
pub use dataset::{EnergyDataset, ForecastReading, Insights, OptimizedReading};
pub use display::{DisplayRow, round2};
pub use error::FetchError;
