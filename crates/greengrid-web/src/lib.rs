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

mod routes;

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use greengrid_core::{ActivationSender, LanguageUpdateSender, WebQuerySender};
use routes::DashboardTemplate;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info};

/// Application state for web handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub query_sender: WebQuerySender,
    pub language_sender: LanguageUpdateSender,
    pub activation_sender: ActivationSender,
}

/// Build the dashboard router
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/dashboard", get(dashboard_json_handler))
        .route("/api/language", post(language_handler))
        .route("/api/refresh", post(refresh_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Start the web server with message passing to ECS
///
/// # Errors
/// Returns error if the server fails to bind or serve
pub async fn start_web_server(
    app_state: AppState,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(app_state);

    let addr = format!("0.0.0.0:{port}");
    info!("🌐 Starting web server on {addr}");
    info!("📱 Dashboard: http://localhost:{}/", port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Main dashboard page handler
async fn index_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    debug!("Dashboard page requested");

    match app_state.query_sender.query_dashboard().await {
        Ok(snapshot) => {
            let template = DashboardTemplate::from_snapshot(snapshot);
            match template.render() {
                Ok(html) => Html(html).into_response(),
                Err(e) => {
                    error!("Template render error: {}", e);
                    Html(format!(
                        "<html><body><h1>Error</h1><p>Failed to render template: {e}</p></body></html>"
                    ))
                    .into_response()
                }
            }
        }
        Err(e) => {
            error!("Failed to query dashboard data: {}", e);
            Html(format!(
                "<html><body><h1>Error</h1><p>Failed to load dashboard: {e}</p></body></html>"
            ))
            .into_response()
        }
    }
}

/// JSON snapshot endpoint
async fn dashboard_json_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    match app_state.query_sender.query_dashboard().await {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(e) => {
            error!("Failed to query dashboard data: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "").into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
struct LanguageRequest {
    language: String,
}

/// Language selection endpoint
async fn language_handler(
    State(app_state): State<AppState>,
    Json(request): Json<LanguageRequest>,
) -> impl IntoResponse {
    debug!("Language selection requested: {}", request.language);

    match app_state.language_sender.send(request.language) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to send language update: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "").into_response()
        }
    }
}

/// Manual re-fetch endpoint
async fn refresh_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    debug!("Refresh requested");

    match app_state.activation_sender.send() {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(e) => {
            error!("Failed to send activation request: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "").into_response()
        }
    }
}

/// Health endpoint
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
