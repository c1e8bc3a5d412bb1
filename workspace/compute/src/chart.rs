//! The four chart builders.
//!
//! Each is a pure function from its inputs to a declarative [`ChartSpec`];
//! the frontend renders the specs without further logic. Visual
//! parameters are fixed. The sector and regional charts deliberately do
//! not vary with the selected period; only their titles embed it.

use common::{ChartSpec, ChartTrace};
use model::{Region, Sector, TimeSeriesPoint};

use crate::forecast::ForecastPoint;

const BACKGROUND: &str = "#FFFFFF";
const FONT_COLOR: &str = "#003366";

const SECTOR_BAR_COLOR: &str = "#FFA15A";
const REAL_LINE_COLOR: &str = "#636EFA";
const RECORDED_FORECAST_LINE_COLOR: &str = "#EF553B";
const FORECAST_LINE_COLOR: &str = "red";

const MAP_STYLE: &str = "carto-positron";
const MAP_ZOOM: f64 = 4.5;
const MAP_SIZE_MAX: u32 = 30;

const SMALL_HEIGHT: u32 = 300;
const LARGE_HEIGHT: u32 = 400;

const MWH_AXIS_LABEL: &str = "Consumption (MWh)";

/// Consumption by sector, from the static sectoral table.
pub fn sector_chart(sectors: &[Sector], period_label: &str) -> ChartSpec {
    ChartSpec {
        title: format!("Consumption by Sector\n{period_label}"),
        height: SMALL_HEIGHT,
        background: BACKGROUND.to_string(),
        font_color: FONT_COLOR.to_string(),
        x_label: Some("Sector".to_string()),
        y_label: Some(MWH_AXIS_LABEL.to_string()),
        traces: vec![ChartTrace::Bar {
            name: "Consumption".to_string(),
            categories: sectors.iter().map(|s| s.name.to_string()).collect(),
            values: sectors.iter().map(|s| s.consumption_mwh as f64).collect(),
            color: SECTOR_BAR_COLOR.to_string(),
        }],
    }
}

/// Regional consumption map, from the static regional table.
pub fn regional_chart(regions: &[Region], period_label: &str) -> ChartSpec {
    let magnitudes: Vec<f64> = regions.iter().map(|r| r.consumption_mwh as f64).collect();
    ChartSpec {
        title: format!("Regional Consumption\n{period_label}"),
        height: SMALL_HEIGHT,
        background: BACKGROUND.to_string(),
        font_color: FONT_COLOR.to_string(),
        x_label: None,
        y_label: None,
        traces: vec![ChartTrace::Map {
            name: "Regions".to_string(),
            latitudes: regions.iter().map(|r| r.latitude).collect(),
            longitudes: regions.iter().map(|r| r.longitude).collect(),
            sizes: magnitudes.clone(),
            color_values: magnitudes,
            size_max: MAP_SIZE_MAX,
            zoom: MAP_ZOOM,
            style: MAP_STYLE.to_string(),
        }],
    }
}

/// Real vs recorded forecast over the filtered slice.
pub fn comparison_chart(slice: &[TimeSeriesPoint], period_label: &str) -> ChartSpec {
    let dates: Vec<_> = slice.iter().map(|p| p.date).collect();
    ChartSpec {
        title: format!("Comparison: Real vs Forecast\n{period_label}"),
        height: LARGE_HEIGHT,
        background: BACKGROUND.to_string(),
        font_color: FONT_COLOR.to_string(),
        x_label: Some("Date".to_string()),
        y_label: Some(MWH_AXIS_LABEL.to_string()),
        traces: vec![
            ChartTrace::Line {
                name: "Real Consumption".to_string(),
                dates: dates.clone(),
                values: slice.iter().map(|p| p.real_mwh as f64).collect(),
                color: Some(REAL_LINE_COLOR.to_string()),
            },
            ChartTrace::Line {
                name: "Forecast".to_string(),
                dates,
                values: slice.iter().map(|p| p.forecast_mwh as f64).collect(),
                color: Some(RECORDED_FORECAST_LINE_COLOR.to_string()),
            },
        ],
    }
}

/// 10-day forward forecast line.
pub fn forecast_chart(forward: &[ForecastPoint], period_label: &str) -> ChartSpec {
    ChartSpec {
        title: format!("ARIMA Forecast\n{period_label}"),
        height: LARGE_HEIGHT,
        background: BACKGROUND.to_string(),
        font_color: FONT_COLOR.to_string(),
        x_label: Some("Date".to_string()),
        y_label: Some(MWH_AXIS_LABEL.to_string()),
        traces: vec![ChartTrace::Line {
            name: "ARIMA Forecast".to_string(),
            dates: forward.iter().map(|p| p.date).collect(),
            values: forward.iter().map(|p| p.expected_mwh as f64).collect(),
            color: Some(FORECAST_LINE_COLOR.to_string()),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use model::EnergyDataset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const LABEL: &str = "Analysis period: 2023-03-01 to 2023-03-10";

    #[test]
    fn test_sector_chart_is_period_independent() {
        let dataset = EnergyDataset::generate(7);
        let a = sector_chart(dataset.sectors(), LABEL);
        let b = sector_chart(dataset.sectors(), "Analysis period: 2023-06-01 to 2023-06-30");
        // same data, only the embedded title differs
        assert_eq!(a.traces, b.traces);
        assert_ne!(a.title, b.title);
        assert_eq!(a.height, 300);
        assert_eq!(a.traces[0].len(), 5);
    }

    #[test]
    fn test_regional_chart_encodes_magnitude_twice() {
        let dataset = EnergyDataset::generate(7);
        let spec = regional_chart(dataset.regions(), LABEL);
        match &spec.traces[0] {
            ChartTrace::Map {
                sizes,
                color_values,
                size_max,
                zoom,
                style,
                ..
            } => {
                assert_eq!(sizes, color_values);
                assert_eq!(sizes[0], 500.0);
                assert_eq!(*size_max, 30);
                assert_eq!(*zoom, 4.5);
                assert_eq!(style, "carto-positron");
            }
            other => panic!("expected map trace, got {other:?}"),
        }
    }

    #[test]
    fn test_comparison_chart_has_two_lines_over_the_slice() {
        let slice: Vec<TimeSeriesPoint> = (1..=10)
            .map(|day| TimeSeriesPoint {
                date: date(2023, 3, day),
                real_mwh: 500,
                forecast_mwh: 480,
            })
            .collect();
        let spec = comparison_chart(&slice, LABEL);
        assert_eq!(spec.traces.len(), 2);
        assert_eq!(spec.traces[0].len(), 10);
        assert_eq!(spec.traces[1].len(), 10);
        assert_eq!(spec.height, 400);
        assert!(spec.title.contains(LABEL));
    }

    #[test]
    fn test_comparison_chart_accepts_empty_slice() {
        let spec = comparison_chart(&[], LABEL);
        assert_eq!(spec.traces.len(), 2);
        assert!(spec.traces[0].is_empty());
    }

    #[test]
    fn test_builders_are_deterministic() {
        let slice: Vec<TimeSeriesPoint> = (1..=5)
            .map(|day| TimeSeriesPoint {
                date: date(2023, 3, day),
                real_mwh: 450 + day as i64,
                forecast_mwh: 440,
            })
            .collect();
        assert_eq!(comparison_chart(&slice, LABEL), comparison_chart(&slice, LABEL));

        let forward = [
            ForecastPoint {
                date: date(2023, 3, 10),
                expected_mwh: 500,
            },
            ForecastPoint {
                date: date(2023, 3, 11),
                expected_mwh: 530,
            },
        ];
        assert_eq!(forecast_chart(&forward, LABEL), forecast_chart(&forward, LABEL));
    }

    #[test]
    fn test_forecast_chart_is_red() {
        let forward = [ForecastPoint {
            date: date(2023, 3, 10),
            expected_mwh: 500,
        }];
        let spec = forecast_chart(&forward, LABEL);
        match &spec.traces[0] {
            ChartTrace::Line { color, .. } => assert_eq!(color.as_deref(), Some("red")),
            other => panic!("expected line trace, got {other:?}"),
        }
    }
}
