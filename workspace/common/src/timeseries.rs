use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::period::DateRange;

/// One day of the consumption series: the recorded value and the forecast
/// that was made for that day at recording time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConsumptionPoint {
    /// Day this point covers
    pub date: NaiveDate,
    /// Recorded consumption in MWh
    pub real_mwh: i64,
    /// Forecast made for this day, in MWh
    pub forecast_mwh: i64,
}

impl ConsumptionPoint {
    pub fn new(date: NaiveDate, real_mwh: i64, forecast_mwh: i64) -> Self {
        Self {
            date,
            real_mwh,
            forecast_mwh,
        }
    }
}

/// Chronologically ordered slice of the consumption series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConsumptionTimeseries {
    /// Data points in chronological order
    pub points: Vec<ConsumptionPoint>,
}

impl ConsumptionTimeseries {
    pub fn new(points: Vec<ConsumptionPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Date range covered by the slice, `None` when empty.
    pub fn date_range(&self) -> Option<DateRange> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some(DateRange::new(first.date, last.date)),
            _ => None,
        }
    }

    /// Sum of recorded consumption over the slice.
    pub fn total_real_mwh(&self) -> i64 {
        self.points.iter().map(|p| p.real_mwh).sum()
    }
}

/// One row of the static regional table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegionDto {
    /// Region name
    pub name: String,
    /// Marker latitude
    pub latitude: f64,
    /// Marker longitude
    pub longitude: f64,
    /// Regional consumption magnitude in MWh
    pub consumption_mwh: i64,
}

/// One row of the static sectoral table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SectorDto {
    /// Sector name
    pub name: String,
    /// Sectoral consumption in MWh
    pub consumption_mwh: i64,
}
