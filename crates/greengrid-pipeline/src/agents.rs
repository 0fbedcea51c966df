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

use greengrid_types::{ForecastReading, Insights, OptimizedReading};

use crate::usage::UsageReading;

/// Placeholder forecasting model: current draw plus a 5% bump
///
/// Stands in for real model inference; the rest of the pipeline only
/// depends on the output shape.
#[derive(Debug, Clone, Default)]
pub struct EnergyForecastingAgent;

impl EnergyForecastingAgent {
    pub fn forecast_power(&self, reading: &UsageReading) -> f64 {
        reading.power_kw * 1.05
    }

    pub fn forecast(&self, usage: &[UsageReading]) -> Vec<ForecastReading> {
        usage
            .iter()
            .map(|reading| ForecastReading {
                household_id: reading.household_id.clone(),
                timestamp: reading.timestamp,
                power_kw: self.forecast_power(reading),
            })
            .collect()
    }
}

/// Clamps each forecast to the grid power constraint, preserving order
///
/// Output order matches input order one to one; the dashboard merges the
/// two series by position.
#[derive(Debug, Clone)]
pub struct ResourceOptimizationAgent {
    pub max_power_kw: f64,
}

impl ResourceOptimizationAgent {
    pub fn new(max_power_kw: f64) -> Self {
        Self { max_power_kw }
    }

    pub fn optimize(&self, forecasted: &[ForecastReading]) -> Vec<OptimizedReading> {
        forecasted
            .iter()
            .map(|forecast| OptimizedReading {
                household_id: Some(forecast.household_id.clone()),
                timestamp: Some(forecast.timestamp),
                adjusted_power_kw: forecast.power_kw.min(self.max_power_kw),
            })
            .collect()
    }
}

/// Produces per-language recommendation text from the optimized series
#[derive(Debug, Clone)]
pub struct SustainabilityInsightsAgent {
    pub threshold_kw: f64,
    pub target_languages: Vec<String>,
}

impl SustainabilityInsightsAgent {
    pub fn new(threshold_kw: f64, target_languages: Vec<String>) -> Self {
        Self {
            threshold_kw,
            target_languages,
        }
    }

    pub fn generate_insights(&self, optimized: &[OptimizedReading]) -> Insights {
        let texts = if optimized.is_empty() {
            no_data_texts()
        } else {
            let avg = optimized
                .iter()
                .map(|reading| reading.adjusted_power_kw)
                .sum::<f64>()
                / optimized.len() as f64;

            if avg > self.threshold_kw {
                peak_reduction_texts()
            } else {
                sustainable_usage_texts()
            }
        };

        let mut insights = Insights::default();
        for language in &self.target_languages {
            if let Some(text) = texts
                .iter()
                .find(|(lang, _)| *lang == language.as_str())
                .map(|(_, text)| *text)
            {
                insights
                    .recommendations
                    .insert(language.clone(), text.to_string());
            }
        }
        insights
    }
}

impl Default for SustainabilityInsightsAgent {
    fn default() -> Self {
        Self::new(5.0, default_languages())
    }
}

pub fn default_languages() -> Vec<String> {
    vec![
        "English".to_string(),
        "Spanish".to_string(),
        "Bosnian".to_string(),
    ]
}

fn peak_reduction_texts() -> [(&'static str, &'static str); 3] {
    [
        (
            "English",
            "Consider reducing your energy consumption during peak hours to improve sustainability.",
        ),
        (
            "Spanish",
            "Considere reducir su consumo de energía durante las horas pico para mejorar la sostenibilidad.",
        ),
        (
            "Bosnian",
            "Razmislite o smanjenju potrošnje energije tijekom vršnih sati za poboljšanje održivosti.",
        ),
    ]
}

fn sustainable_usage_texts() -> [(&'static str, &'static str); 3] {
    [
        (
            "English",
            "Your energy usage is within a sustainable range. Keep it up.",
        ),
        (
            "Spanish",
            "Su consumo de energía está dentro de un rango sostenible. Siga así.",
        ),
        (
            "Bosnian",
            "Vaša potrošnja energije je u održivom rasponu. Nastavite tako.",
        ),
    ]
}

fn no_data_texts() -> [(&'static str, &'static str); 3] {
    [
        ("English", "No data loaded."),
        ("Spanish", "No hay datos cargados."),
        ("Bosnian", "Nema učitanih podataka."),
    ]
}
