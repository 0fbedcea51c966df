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

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use greengrid_core::EnergyDataSource;
use greengrid_pipeline::{PipelineConfig, load_usage_csv, run_pipeline, simulate_neighborhood};
use greengrid_types::{EnergyDataset, FetchError};

/// Where the local pipeline gets its raw usage readings
#[derive(Debug, Clone)]
pub enum UsageSource {
    Csv(PathBuf),
    Simulated { num_households: usize, days: usize },
}

/// Local data source running the agent pipeline in-process
///
/// Serves the same dataset shape as the remote endpoint, for offline and
/// demo operation.
pub struct PipelineEnergyDataSource {
    config: PipelineConfig,
    usage_source: UsageSource,
}

impl PipelineEnergyDataSource {
    pub fn new(config: PipelineConfig, usage_source: UsageSource) -> Self {
        Self {
            config,
            usage_source,
        }
    }
}

#[async_trait]
impl EnergyDataSource for PipelineEnergyDataSource {
    async fn fetch_energy_data(&self) -> Result<EnergyDataset, FetchError> {
        let usage = match &self.usage_source {
            UsageSource::Csv(path) => {
                debug!("📄 [PIPELINE] Loading usage data from {}", path.display());
                load_usage_csv(path).map_err(|e| FetchError::new(format!("{e:#}")))?
            }
            UsageSource::Simulated {
                num_households,
                days,
            } => {
                debug!(
                    "🏘️ [PIPELINE] Simulating {} households over {} day(s)",
                    num_households, days
                );
                simulate_neighborhood(*num_households, *days, 24)
            }
        };

        Ok(run_pipeline(&usage, &self.config))
    }

    async fn health_check(&self) -> Result<bool> {
        match &self.usage_source {
            UsageSource::Csv(path) => Ok(path.exists()),
            UsageSource::Simulated { .. } => Ok(true),
        }
    }

    fn name(&self) -> &str {
        "local_pipeline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_simulated_source_produces_full_dataset() {
        let source = PipelineEnergyDataSource::new(
            PipelineConfig::default(),
            UsageSource::Simulated {
                num_households: 2,
                days: 1,
            },
        );

        let dataset = source.fetch_energy_data().await.unwrap();
        assert_eq!(dataset.forecasted_data.len(), 48);
        assert_eq!(dataset.optimized_data.len(), 48);
        assert!(!dataset.insights.recommendations.is_empty());
        assert!(source.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_csv_source_missing_file_fails() {
        let source = PipelineEnergyDataSource::new(
            PipelineConfig::default(),
            UsageSource::Csv(PathBuf::from("/nonexistent/usage.csv")),
        );

        assert!(source.fetch_energy_data().await.is_err());
        assert!(!source.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_csv_source_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "timestamp,household_id,power_kW").unwrap();
        writeln!(file, "2025-06-15T08:00:00,1,4.5").unwrap();

        let source = PipelineEnergyDataSource::new(
            PipelineConfig::default(),
            UsageSource::Csv(file.path().to_path_buf()),
        );

        let dataset = source.fetch_energy_data().await.unwrap();
        assert_eq!(dataset.forecasted_data.len(), 1);
        // 4.5 * 1.05 = 4.725, under the 5.0 kW constraint
        assert!((dataset.optimized_data[0].adjusted_power_kw - 4.725).abs() < 1e-9);
    }
}
