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

use greengrid_types::{DisplayRow, EnergyDataset, Insights};

/// Merge the forecast and optimized series into display rows by position.
///
/// The upstream optimizer iterates the forecast series in order, so element
/// i of both arrays describes the same household and timestamp. That
/// ordering assumption is not re-validated here (the wire format carries no
/// join key); it is pinned by the producer and by tests.
///
/// The output always has exactly `forecasted_data.len()` rows: when the
/// optimized series is shorter the trailing rows carry no optimized value,
/// and extra optimized entries beyond the forecast length are ignored.
pub fn merged_rows(dataset: &EnergyDataset) -> Vec<DisplayRow> {
    dataset
        .forecasted_data
        .iter()
        .enumerate()
        .map(|(i, forecast)| DisplayRow {
            household_id: forecast.household_id.clone(),
            timestamp: forecast.timestamp,
            forecast_kw: forecast.power_kw,
            optimized_kw: dataset
                .optimized_data
                .get(i)
                .map(|optimized| optimized.adjusted_power_kw),
        })
        .collect()
}

/// Resolve the recommendation text for a language key.
///
/// Returns `None` when the key is absent from the map; the caller renders
/// an explicit "no insights available" indicator, never an empty string.
pub fn resolve_insight<'a>(insights: &'a Insights, language: &str) -> Option<&'a str> {
    insights.recommendations.get(language).map(String::as_str)
}

/// Language keys available in the current dataset, sorted for a stable
/// selector ordering (the map itself has no meaningful order).
pub fn available_languages(insights: &Insights) -> Vec<String> {
    let mut languages: Vec<String> = insights.recommendations.keys().cloned().collect();
    languages.sort();
    languages
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use greengrid_types::{ForecastReading, OptimizedReading};

    fn forecast(id: &str, power_kw: f64) -> ForecastReading {
        ForecastReading {
            household_id: id.to_owned(),
            timestamp: Utc.with_ymd_and_hms(2025, 6, 15, 8, 55, 0).unwrap(),
            power_kw,
        }
    }

    fn optimized(adjusted_power_kw: f64) -> OptimizedReading {
        OptimizedReading {
            household_id: None,
            timestamp: None,
            adjusted_power_kw,
        }
    }

    #[test]
    fn test_merge_pairs_by_position() {
        let dataset = EnergyDataset {
            forecasted_data: vec![forecast("1", 10.256)],
            optimized_data: vec![optimized(8.111)],
            insights: Insights::default(),
        };

        let rows = merged_rows(&dataset);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].household_id, "1");
        assert_eq!(rows[0].forecast_kw_display(), 10.26);
        assert_eq!(rows[0].optimized_kw_display(), Some(8.11));
    }

    #[test]
    fn test_merge_shorter_optimized_series() {
        // 3 forecasts, 1 optimized value: still 3 rows, trailing two absent
        let dataset = EnergyDataset {
            forecasted_data: vec![forecast("1", 2.0), forecast("2", 3.0), forecast("3", 4.0)],
            optimized_data: vec![optimized(1.5)],
            insights: Insights::default(),
        };

        let rows = merged_rows(&dataset);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].optimized_kw, Some(1.5));
        assert_eq!(rows[1].optimized_kw, None);
        assert_eq!(rows[2].optimized_kw, None);
    }

    #[test]
    fn test_merge_empty_optimized_series() {
        let dataset = EnergyDataset {
            forecasted_data: vec![forecast("1", 2.0), forecast("2", 3.0)],
            optimized_data: vec![],
            insights: Insights::default(),
        };

        let rows = merged_rows(&dataset);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.optimized_kw.is_none()));
    }

    #[test]
    fn test_merge_ignores_extra_optimized_entries() {
        let dataset = EnergyDataset {
            forecasted_data: vec![forecast("1", 2.0)],
            optimized_data: vec![optimized(1.5), optimized(9.9), optimized(0.1)],
            insights: Insights::default(),
        };

        let rows = merged_rows(&dataset);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].optimized_kw, Some(1.5));
    }

    #[test]
    fn test_merge_empty_dataset() {
        assert!(merged_rows(&EnergyDataset::default()).is_empty());
    }

    #[test]
    fn test_resolve_insight_present() {
        let mut insights = Insights::default();
        insights
            .recommendations
            .insert("English".to_owned(), "Reduce peak usage".to_owned());

        assert_eq!(
            resolve_insight(&insights, "English"),
            Some("Reduce peak usage")
        );
    }

    #[test]
    fn test_resolve_insight_absent_language() {
        let mut insights = Insights::default();
        insights
            .recommendations
            .insert("English".to_owned(), "Reduce peak usage".to_owned());

        // Selected language not in the map: absent, not an error
        assert_eq!(resolve_insight(&insights, "Spanish"), None);
    }

    #[test]
    fn test_resolve_insight_empty_map() {
        assert_eq!(resolve_insight(&Insights::default(), "English"), None);
    }

    #[test]
    fn test_available_languages_sorted() {
        let mut insights = Insights::default();
        for language in ["Spanish", "Bosnian", "English"] {
            insights
                .recommendations
                .insert(language.to_owned(), "tip".to_owned());
        }

        assert_eq!(
            available_languages(&insights),
            vec!["Bosnian", "English", "Spanish"]
        );
    }
}
