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

use anyhow::{Context, Result};
use greengrid_types::{EnergyDataset, FetchError};
use reqwest::Client;
use tracing::{debug, error, warn};

/// REST client for the energy data endpoint
///
/// Endpoint URL and optional bearer token are injected at construction.
/// One GET per call: no retries, no caching, no request deduplication.
#[derive(Clone)]
pub struct EnergyApiClient {
    endpoint_url: String,
    token: Option<String>,
    client: Client,
}

impl EnergyApiClient {
    /// Create a new client for the given endpoint
    pub fn new(endpoint_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            endpoint_url: endpoint_url.into(),
            token,
            client,
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Fetch the full energy dataset from the endpoint
    pub async fn fetch_dataset(&self) -> Result<EnergyDataset, FetchError> {
        debug!("🔍 [API] GET {}", self.endpoint_url);

        let mut request = self.client.get(&self.endpoint_url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            error!("❌ [API] Request failed: {e}");
            FetchError::new(format!("Failed to reach energy API: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("❌ [API] Status {status}");
            return Err(FetchError::new("Network response was not ok"));
        }

        let dataset = response.json::<EnergyDataset>().await.map_err(|e| {
            error!("❌ [API] Invalid response body: {e}");
            FetchError::new(format!("Failed to parse energy API response: {e}"))
        })?;

        debug!(
            "✅ [API] Dataset received: {} forecast readings",
            dataset.forecasted_data.len()
        );
        Ok(dataset)
    }

    /// Health check: ping the endpoint
    pub async fn ping(&self) -> Result<bool> {
        let mut request = self.client.get(&self.endpoint_url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        match request.send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) => {
                warn!("Health check failed: {e}");
                Ok(false)
            }
        }
    }
}
