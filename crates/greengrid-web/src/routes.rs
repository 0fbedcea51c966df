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

use askama::Template;
use greengrid_core::{DashboardRowData, DashboardSnapshot};

/// Main dashboard page template
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub state: String,
    pub error_message: String,
    pub rows: Vec<DashboardRowData>,
    pub insight: Option<String>,
    pub language: String,
    pub available_languages: Vec<String>,
}

impl DashboardTemplate {
    pub fn from_snapshot(snapshot: DashboardSnapshot) -> Self {
        Self {
            state: snapshot.state,
            error_message: snapshot.error.unwrap_or_default(),
            rows: snapshot.rows,
            insight: snapshot.insight,
            language: snapshot.language,
            available_languages: snapshot.available_languages,
        }
    }
}
