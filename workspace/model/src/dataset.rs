//! The process-wide dataset: one year of daily consumption plus the static
//! regional and sectoral tables.
//!
//! Everything here is generated once at startup and read-only afterwards;
//! the struct exposes slice accessors only, so the series can never be
//! mutated by the request path.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// First day of the generated series.
pub const SERIES_START: (i32, u32, u32) = (2023, 1, 1);
/// Last day of the generated series (inclusive).
pub const SERIES_END: (i32, u32, u32) = (2023, 12, 31);

/// Recorded consumption band, MWh: uniform in `[REAL_MIN, REAL_MAX)`.
const REAL_MIN: i64 = 400;
const REAL_MAX: i64 = 600;
/// Recording-time forecast offset band, MWh: uniform in `[-NOISE, NOISE)`.
const NOISE: i64 = 50;

/// One day of the consumption series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSeriesPoint {
    /// Day this point covers
    pub date: NaiveDate,
    /// Recorded consumption in MWh
    pub real_mwh: i64,
    /// Forecast made for this day at recording time, in MWh
    pub forecast_mwh: i64,
}

/// One row of the static regional table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub consumption_mwh: i64,
}

/// One row of the static sectoral table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sector {
    pub name: &'static str,
    pub consumption_mwh: i64,
}

const REGIONS: [Region; 5] = [
    Region {
        name: "Île-de-France",
        latitude: 48.8566,
        longitude: 2.3522,
        consumption_mwh: 500,
    },
    Region {
        name: "PACA",
        latitude: 43.9352,
        longitude: 6.0679,
        consumption_mwh: 300,
    },
    Region {
        name: "Occitanie",
        latitude: 43.7000,
        longitude: 1.6163,
        consumption_mwh: 250,
    },
    Region {
        name: "Auvergne-Rhône-Alpes",
        latitude: 45.7640,
        longitude: 4.8357,
        consumption_mwh: 400,
    },
    Region {
        name: "Nouvelle-Aquitaine",
        latitude: 44.8378,
        longitude: -0.5792,
        consumption_mwh: 320,
    },
];

const SECTORS: [Sector; 5] = [
    Sector {
        name: "Industry",
        consumption_mwh: 300,
    },
    Sector {
        name: "Transport",
        consumption_mwh: 200,
    },
    Sector {
        name: "Households",
        consumption_mwh: 400,
    },
    Sector {
        name: "Agriculture",
        consumption_mwh: 50,
    },
    Sector {
        name: "Services",
        consumption_mwh: 150,
    },
];

/// Immutable in-memory dataset shared across all request handlers.
#[derive(Debug)]
pub struct EnergyDataset {
    series: Vec<TimeSeriesPoint>,
    regions: &'static [Region],
    sectors: &'static [Sector],
}

impl EnergyDataset {
    /// Generate the dataset with a seeded RNG.
    ///
    /// The same seed always yields the same series, so a fixed seed gives
    /// reproducible servers and tests.
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let start = ymd(SERIES_START);
        let end = ymd(SERIES_END);

        let mut series = Vec::with_capacity(366);
        for date in start.iter_days().take_while(|d| *d <= end) {
            let real_mwh = rng.gen_range(REAL_MIN..REAL_MAX);
            let forecast_mwh = real_mwh + rng.gen_range(-NOISE..NOISE);
            series.push(TimeSeriesPoint {
                date,
                real_mwh,
                forecast_mwh,
            });
        }

        info!(
            points = series.len(),
            %start,
            %end,
            seed,
            "generated synthetic consumption series"
        );

        Self {
            series,
            regions: &REGIONS,
            sectors: &SECTORS,
        }
    }

    /// Daily consumption series, chronological.
    pub fn series(&self) -> &[TimeSeriesPoint] {
        &self.series
    }

    /// Static regional table.
    pub fn regions(&self) -> &[Region] {
        self.regions
    }

    /// Static sectoral table.
    pub fn sectors(&self) -> &[Sector] {
        self.sectors
    }

    /// First and last date of the series.
    pub fn series_bounds(&self) -> (NaiveDate, NaiveDate) {
        // series is never empty: generate() always produces a full year
        let first = self.series.first().expect("series is non-empty");
        let last = self.series.last().expect("series is non-empty");
        (first.date, last.date)
    }
}

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_covers_the_full_year() {
        let dataset = EnergyDataset::generate(7);
        assert_eq!(dataset.series().len(), 365);
        let (start, end) = dataset.series_bounds();
        assert_eq!(start, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_series_is_chronological_and_daily() {
        let dataset = EnergyDataset::generate(7);
        for pair in dataset.series().windows(2) {
            assert_eq!((pair[1].date - pair[0].date).num_days(), 1);
        }
    }

    #[test]
    fn test_values_respect_generation_bands() {
        let dataset = EnergyDataset::generate(42);
        for point in dataset.series() {
            assert!((REAL_MIN..REAL_MAX).contains(&point.real_mwh));
            let noise = point.forecast_mwh - point.real_mwh;
            assert!((-NOISE..NOISE).contains(&noise));
        }
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let a = EnergyDataset::generate(1337);
        let b = EnergyDataset::generate(1337);
        assert_eq!(a.series(), b.series());

        let c = EnergyDataset::generate(1338);
        assert_ne!(a.series(), c.series());
    }

    #[test]
    fn test_static_tables() {
        let dataset = EnergyDataset::generate(7);
        assert_eq!(dataset.regions().len(), 5);
        assert_eq!(dataset.sectors().len(), 5);
        assert_eq!(dataset.regions()[0].name, "Île-de-France");
        assert_eq!(dataset.sectors()[2].consumption_mwh, 400);
    }
}
