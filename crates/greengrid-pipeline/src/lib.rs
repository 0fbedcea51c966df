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

//! Forecasting, optimization and insights agents, plus usage data
//! acquisition (CSV import and neighborhood simulation).

pub mod agents;
pub mod usage;

pub use agents::{
    EnergyForecastingAgent, ResourceOptimizationAgent, SustainabilityInsightsAgent,
    default_languages,
};
use greengrid_types::EnergyDataset;
use tracing::info;
pub use usage::{UsageReading, load_usage_csv, simulate_neighborhood};

/// Pipeline tuning parameters
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub max_power_kw: f64,
    pub insight_threshold_kw: f64,
    pub target_languages: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_power_kw: 5.0,
            insight_threshold_kw: 5.0,
            target_languages: default_languages(),
        }
    }
}

/// Run the full agent pipeline: forecast, optimize, generate insights
pub fn run_pipeline(usage: &[UsageReading], config: &PipelineConfig) -> EnergyDataset {
    let forecasted_data = EnergyForecastingAgent.forecast(usage);
    let optimized_data =
        ResourceOptimizationAgent::new(config.max_power_kw).optimize(&forecasted_data);
    let insights = SustainabilityInsightsAgent::new(
        config.insight_threshold_kw,
        config.target_languages.clone(),
    )
    .generate_insights(&optimized_data);

    info!(
        "💰 Pipeline produced {} forecasts, {} optimized readings, {} insight languages",
        forecasted_data.len(),
        optimized_data.len(),
        insights.recommendations.len()
    );

    EnergyDataset {
        forecasted_data,
        optimized_data,
        insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_run_pipeline_produces_aligned_series() {
        let usage: Vec<UsageReading> = (0..4)
            .map(|i| UsageReading {
                household_id: (i + 1).to_string(),
                timestamp: Utc.with_ymd_and_hms(2025, 6, 15, 8 + i, 0, 0).unwrap(),
                power_kw: 6.0,
            })
            .collect();

        let dataset = run_pipeline(&usage, &PipelineConfig::default());
        assert_eq!(dataset.forecasted_data.len(), 4);
        assert_eq!(dataset.optimized_data.len(), 4);
        // 6.0 * 1.05 = 6.3, clamped to the 5.0 kW constraint
        assert!(dataset.forecasted_data.iter().all(|f| f.power_kw > 6.0));
        assert!(
            dataset
                .optimized_data
                .iter()
                .all(|o| o.adjusted_power_kw == 5.0)
        );
        assert!(!dataset.insights.recommendations.is_empty());
    }

    #[test]
    fn test_run_pipeline_empty_usage() {
        let dataset = run_pipeline(&[], &PipelineConfig::default());
        assert!(dataset.forecasted_data.is_empty());
        assert!(dataset.optimized_data.is_empty());
        assert_eq!(
            dataset
                .insights
                .recommendations
                .get("English")
                .map(String::as_str),
            Some("No data loaded.")
        );
    }
}
