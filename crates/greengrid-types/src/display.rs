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

/// One merged dashboard row: the forecast reading at index i paired with the
/// optimized reading at the same index, when one exists.
///
/// Stored values are unrounded; the `*_display` accessors round to two
/// decimal places for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub household_id: String,
    pub timestamp: DateTime<Utc>,
    pub forecast_kw: f64,
    pub optimized_kw: Option<f64>,
}

impl DisplayRow {
    /// Forecast power rounded for display.
    pub fn forecast_kw_display(&self) -> f64 {
        round2(self.forecast_kw)
    }

    /// Optimized power rounded for display, absent when no optimized reading
    /// existed at this row's index.
    pub fn optimized_kw_display(&self) -> Option<f64> {
        self.optimized_kw.map(round2)
    }
}

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
