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

use anyhow::{Context, Result, bail};
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use greengrid_pipeline::default_languages;

/// Main application configuration
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Energy data API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Local pipeline configuration
    #[serde(default)]
    pub pipeline: PipelineSection,

    /// System configuration
    #[serde(default)]
    pub system: SystemSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Full URL of the energy data endpoint
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// Optional bearer token for the endpoint
    #[serde(default)]
    pub token: Option<String>,

    /// Fetch from the remote endpoint; when false the local pipeline serves
    /// the dashboard instead
    #[serde(default)]
    pub use_remote_api: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSection {
    /// Grid power constraint applied by the optimizer (kW)
    #[serde(default = "default_max_power_kw")]
    pub max_power_kw: f64,

    /// Average power above which the peak-reduction insight is emitted (kW)
    #[serde(default = "default_insight_threshold_kw")]
    pub insight_threshold_kw: f64,

    /// Languages to generate recommendation text for
    #[serde(default = "default_languages")]
    pub target_languages: Vec<String>,

    /// Usage CSV path; when unset the neighborhood simulator supplies data
    #[serde(default)]
    pub usage_csv: Option<PathBuf>,

    /// Simulator: number of households
    #[serde(default = "default_num_households")]
    pub num_households: usize,

    /// Simulator: number of days of hourly readings
    #[serde(default = "default_days")]
    pub days: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemSection {
    /// Initial dashboard language
    #[serde(default = "default_language")]
    pub language: String,

    /// Web server port
    #[serde(default = "default_web_port")]
    pub web_port: u16,

    /// Verbose logging of fetch cycles
    #[serde(default = "default_debug_mode")]
    pub debug_mode: bool,
}

fn default_endpoint_url() -> String {
    "http://localhost:9000/energy".to_string()
}

fn default_max_power_kw() -> f64 {
    5.0
}

fn default_insight_threshold_kw() -> f64 {
    5.0
}

fn default_num_households() -> usize {
    5
}

fn default_days() -> usize {
    1
}

fn default_language() -> String {
    "English".to_string()
}

fn default_web_port() -> u16 {
    8099
}

fn default_debug_mode() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            token: None,
            use_remote_api: false,
        }
    }
}

impl Default for PipelineSection {
    fn default() -> Self {
        Self {
            max_power_kw: default_max_power_kw(),
            insight_threshold_kw: default_insight_threshold_kw(),
            target_languages: default_languages(),
            usage_csv: None,
            num_households: default_num_households(),
            days: default_days(),
        }
    }
}

impl Default for SystemSection {
    fn default() -> Self {
        Self {
            language: default_language(),
            web_port: default_web_port(),
            debug_mode: default_debug_mode(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            pipeline: PipelineSection::default(),
            system: SystemSection::default(),
        }
    }
}

impl AppConfig {
    /// Sanity checks after loading
    pub fn validate(&self) -> Result<()> {
        if self.api.use_remote_api && self.api.endpoint_url.is_empty() {
            bail!("api.endpoint_url must be set when api.use_remote_api is enabled");
        }
        if self.pipeline.max_power_kw <= 0.0 {
            bail!("pipeline.max_power_kw must be positive");
        }
        if self.pipeline.target_languages.is_empty() {
            bail!("pipeline.target_languages must not be empty");
        }
        if self.pipeline.num_households == 0 {
            bail!("pipeline.num_households must be at least 1");
        }
        Ok(())
    }
}

/// Load configuration: explicit path via GREENGRID_CONFIG, then
/// ./config.toml, then built-in defaults with a warning
pub fn load_config_with_fallback() -> Result<AppConfig> {
    if let Ok(path) = std::env::var("GREENGRID_CONFIG") {
        let config_str = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {path}"))?;
        let config: AppConfig =
            toml::from_str(&config_str).with_context(|| format!("Failed to parse {path}"))?;
        info!("✅ Loaded configuration from {path}");
        config.validate()?;
        return Ok(config);
    }

    if let Ok(config_str) = std::fs::read_to_string("config.toml") {
        let config: AppConfig =
            toml::from_str(&config_str).context("Failed to parse config.toml")?;
        info!("✅ Loaded configuration from config.toml");
        config.validate()?;
        return Ok(config);
    }

    warn!("No configuration file found, using defaults");
    let config = AppConfig::default();
    config.validate()?;
    Ok(config)
}
