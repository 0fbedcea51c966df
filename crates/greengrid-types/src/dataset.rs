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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A predicted power-draw data point for one household, produced upstream.
///
/// Order within `EnergyDataset::forecasted_data` is significant: the reading
/// at index i corresponds to the optimized reading at the same index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReading {
    pub household_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "power_kW")]
    pub power_kw: f64,
}

/// An adjusted power-draw recommendation for the household/time at the same
/// position in the forecast series.
///
/// The wire format carries `household_id` and `timestamp` too, but nothing
/// joins on them; correspondence is positional only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedReading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "adjusted_power_kW")]
    pub adjusted_power_kw: f64,
}

/// Localized recommendation texts keyed by language name (e.g. "English",
/// "Spanish", "Bosnian"). The available languages are data-driven, whatever
/// the producer emitted for this dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    #[serde(default)]
    pub recommendations: HashMap<String, String>,
}

/// Root response envelope from the energy-data endpoint.
///
/// All fields default to empty when absent: the consumer degrades per index
/// (missing optimized values, missing insight languages) instead of rejecting
/// the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyDataset {
    #[serde(rename = "forecastedData", default)]
    pub forecasted_data: Vec<ForecastReading>,
    #[serde(rename = "optimizedData", default)]
    pub optimized_data: Vec<OptimizedReading>,
    #[serde(default)]
    pub insights: Insights,
}

impl EnergyDataset {
    /// Number of display rows this dataset will produce (forecast-driven).
    pub fn len(&self) -> usize {
        self.forecasted_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecasted_data.is_empty()
    }
}
