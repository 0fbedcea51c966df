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

mod config;
mod version;

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use bevy_app::{ScheduleRunnerPlugin, TaskPoolPlugin, prelude::*};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use greengrid_adapters::{
    EnergyApiClient, HttpEnergyDataAdapter, PipelineEnergyDataSource, UsageSource,
};
use greengrid_core::{
    ActivationSender, EnergyDataSourceResource, GreenGridCorePlugin, LanguageUpdateSender,
    SelectedLanguage, WebQuerySender,
};
use greengrid_pipeline::PipelineConfig;
use greengrid_web::AppState;

fn main() -> Result<()> {
    // Handle command line arguments
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                println!("GreenGrid - Neighborhood Energy Dashboard");
                println!("Version: {}", version::VERSION);
                println!();
                println!("Usage: greengrid [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help    Print this help message");
                println!("  -v, --version Print version");
                return Ok(());
            }
            "--version" | "-v" => {
                println!("{}", version::VERSION);
                return Ok(());
            }
            _ => {}
        }
    }

    // Create tokio runtime for async HTTP operations
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    // Run Bevy app in a blocking task so tokio can keep running async tasks
    runtime.block_on(async {
        tokio::task::spawn_blocking(initialize_and_run)
            .await
            .expect("Bevy task panicked")
    })
}

fn initialize_and_run() -> Result<()> {
    // Initialize tracing with env filter support
    // Respects RUST_LOG environment variable
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = config::load_config_with_fallback()?;

    info!("🚀 Starting GreenGrid - Neighborhood Energy Dashboard");
    info!("📋 Configuration Summary:");
    info!("   Remote API: {}", config.api.use_remote_api);
    if config.api.use_remote_api {
        info!("   Endpoint: {}", config.api.endpoint_url);
        info!("   Token: {}", config.api.token.is_some());
    } else if let Some(csv) = &config.pipeline.usage_csv {
        info!("   Usage data: {}", csv.display());
    } else {
        info!(
            "   Usage data: simulated ({} households, {} day(s))",
            config.pipeline.num_households, config.pipeline.days
        );
    }
    info!("   Max power: {} kW", config.pipeline.max_power_kw);
    info!("   Languages: {:?}", config.pipeline.target_languages);
    info!("   Language: {}", config.system.language);
    info!("   Web port: {}", config.system.web_port);
    info!("   Debug mode: {}", config.system.debug_mode);

    // Create the energy data source
    let data_source: Arc<dyn greengrid_core::EnergyDataSource> = if config.api.use_remote_api {
        info!("🌐 Initializing remote energy API client...");
        let client = Arc::new(EnergyApiClient::new(
            config.api.endpoint_url.clone(),
            config.api.token.clone(),
        )?);
        Arc::new(HttpEnergyDataAdapter::new(client))
    } else {
        info!("🏘️ Initializing local pipeline data source...");
        let pipeline_config = PipelineConfig {
            max_power_kw: config.pipeline.max_power_kw,
            insight_threshold_kw: config.pipeline.insight_threshold_kw,
            target_languages: config.pipeline.target_languages.clone(),
        };
        let usage_source = match &config.pipeline.usage_csv {
            Some(path) => UsageSource::Csv(path.clone()),
            None => UsageSource::Simulated {
                num_households: config.pipeline.num_households,
                days: config.pipeline.days,
            },
        };
        Arc::new(PipelineEnergyDataSource::new(pipeline_config, usage_source))
    };
    info!("🔌 Energy data source: {}", data_source.name());

    // Startup health check
    let runtime_handle = tokio::runtime::Handle::current();
    match runtime_handle.block_on(data_source.health_check()) {
        Ok(true) => info!("✅ Data source health check passed"),
        Ok(false) => warn!("⚠️ Data source health check failed, fetches may not succeed"),
        Err(e) => warn!("⚠️ Data source health check errored: {e}"),
    }

    // Create message passing channels between web handlers and ECS
    let (query_sender, query_channel) = WebQuerySender::new();
    let (language_sender, language_channel) = LanguageUpdateSender::new();
    let (activation_sender, activation_channel) = ActivationSender::new();

    // Spawn web server on tokio runtime
    let web_port = config.system.web_port;
    info!("🌐 Starting web server on port {web_port}...");
    let app_state = AppState {
        query_sender,
        language_sender,
        activation_sender,
    };
    tokio::spawn(async move {
        if let Err(e) = greengrid_web::start_web_server(app_state, web_port).await {
            tracing::error!("❌ Web server failed: {}", e);
        }
    });

    // Create Bevy app with full configuration
    info!("🎮 Starting ECS application...");

    let initial_language = SelectedLanguage::new(config.system.language.clone());

    let mut app = App::new();
    app
        // Add TaskPoolPlugin to initialize async task pools
        .add_plugins(TaskPoolPlugin::default())
        // Add ScheduleRunnerPlugin for headless operation
        .add_plugins(ScheduleRunnerPlugin::run_loop(Duration::from_millis(100)))
        .add_plugins(GreenGridCorePlugin)
        .insert_resource(config)
        .insert_resource(initial_language)
        .insert_resource(EnergyDataSourceResource(data_source))
        .insert_resource(query_channel)
        .insert_resource(language_channel)
        .insert_resource(activation_channel);

    info!("✅ Starting main loop...");

    app.run();

    Ok(())
}
