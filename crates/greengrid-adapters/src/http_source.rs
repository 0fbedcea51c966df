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

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use greengrid_core::EnergyDataSource;
use greengrid_types::{EnergyDataset, FetchError};

use crate::client::EnergyApiClient;

/// Remote HTTP adapter implementing EnergyDataSource
pub struct HttpEnergyDataAdapter {
    client: Arc<EnergyApiClient>,
}

impl HttpEnergyDataAdapter {
    pub fn new(client: Arc<EnergyApiClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<EnergyApiClient> {
        &self.client
    }
}

#[async_trait]
impl EnergyDataSource for HttpEnergyDataAdapter {
    async fn fetch_energy_data(&self) -> Result<EnergyDataset, FetchError> {
        debug!("🌐 [ADAPTER] Fetching dataset from remote API");
        self.client.fetch_dataset().await
    }

    async fn health_check(&self) -> Result<bool> {
        self.client.ping().await
    }

    fn name(&self) -> &str {
        "energy_api"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    #[tokio::test]
    async fn test_adapter_fetch_through_trait() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "forecastedData": [
                        {"household_id": "1", "timestamp": "2025-06-15T08:55:00Z", "power_kW": 1.0}
                    ],
                    "optimizedData": [],
                    "insights": {"recommendations": {}}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = Arc::new(EnergyApiClient::new(server.url(), None).unwrap());
        let adapter = HttpEnergyDataAdapter::new(client);

        let dataset = adapter.fetch_energy_data().await.unwrap();
        assert_eq!(dataset.forecasted_data.len(), 1);
        assert_eq!(adapter.name(), "energy_api");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_adapter_propagates_failure_message() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(503)
            .create_async()
            .await;

        let client = Arc::new(EnergyApiClient::new(server.url(), None).unwrap());
        let adapter = HttpEnergyDataAdapter::new(client);

        let error = adapter.fetch_energy_data().await.unwrap_err();
        assert_eq!(error.message(), "Network response was not ok");
    }
}
