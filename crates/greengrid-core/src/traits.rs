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

use anyhow::Result;
use async_trait::async_trait;

use greengrid_types::{EnergyDataset, FetchError};

/// Generic source of energy datasets.
///
/// The aggregation core works only against this trait and never knows
/// whether data comes from the remote API or a local pipeline. One call is
/// one fetch cycle: no retries, no caching, no deduplication of concurrent
/// invocations.
#[async_trait]
pub trait EnergyDataSource: Send + Sync {
    /// Fetch one complete dataset.
    ///
    /// All failure kinds (transport, non-success status, malformed body)
    /// collapse into a single `FetchError` carrying a displayable message.
    async fn fetch_energy_data(&self) -> Result<EnergyDataset, FetchError>;

    /// Check if the data source is reachable.
    async fn health_check(&self) -> Result<bool>;

    /// Get data source name for logging.
    fn name(&self) -> &str;
}
