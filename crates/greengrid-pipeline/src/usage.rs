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

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDateTime, Timelike, Utc};
use rand::Rng;
use serde::Deserialize;
use tracing::info;

/// One raw meter reading, the pipeline input
#[derive(Debug, Clone, PartialEq)]
pub struct UsageReading {
    pub household_id: String,
    pub timestamp: DateTime<Utc>,
    pub power_kw: f64,
}

/// CSV row shape: `timestamp,household_id,power_kW`, extra columns ignored
#[derive(Debug, Deserialize)]
struct UsageCsvRecord {
    timestamp: NaiveDateTime,
    household_id: String,
    #[serde(rename = "power_kW")]
    power_kw: f64,
}

/// Load usage readings from a CSV file
pub fn load_usage_csv(path: &Path) -> Result<Vec<UsageReading>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open usage CSV at {}", path.display()))?;

    let mut readings = Vec::new();
    for record in reader.deserialize() {
        let record: UsageCsvRecord = record.context("Failed to parse usage CSV record")?;
        readings.push(UsageReading {
            household_id: record.household_id,
            timestamp: record.timestamp.and_utc(),
            power_kw: record.power_kw,
        });
    }

    info!(
        "📄 Loaded {} usage readings from {}",
        readings.len(),
        path.display()
    );
    Ok(readings)
}

/// Simulate hourly usage for a neighborhood of households
///
/// Base draw of 0.5 to 2.0 kW per reading, with an extra 1.5 to 3.0 kW
/// during the 18:00 to 22:00 evening peak and up to 1.0 kW otherwise.
pub fn simulate_neighborhood(
    num_households: usize,
    days: usize,
    readings_per_day: usize,
) -> Vec<UsageReading> {
    let mut rng = rand::thread_rng();
    let start_time = Utc::now() - Duration::days(days as i64);

    let mut readings = Vec::with_capacity(num_households * days * readings_per_day);
    for household_id in 1..=num_households {
        for hour in 0..(readings_per_day * days) {
            let timestamp = start_time + Duration::hours(hour as i64);
            let base_usage = rng.gen_range(0.5..2.0);
            let usage = if (18..=22).contains(&timestamp.hour()) {
                base_usage + rng.gen_range(1.5..3.0)
            } else {
                base_usage + rng.gen_range(0.0..1.0)
            };
            readings.push(UsageReading {
                household_id: household_id.to_string(),
                timestamp,
                power_kw: (usage * 1000.0_f64).round() / 1000.0,
            });
        }
    }

    info!(
        "🏘️ Simulated {} readings for {} households over {} day(s)",
        readings.len(),
        num_households,
        days
    );
    readings
}
