//! Mock forward forecast.
//!
//! The "ARIMA" forecast is uniform noise, not a model: 10 daily values
//! anchored at the resolved end date, regenerated on every recompute.
//! The random source sits behind a trait so tests (and deployments that
//! set a seed) get reproducible draws.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Days of forward forecast per recompute.
pub const FORECAST_HORIZON_DAYS: usize = 10;

/// Sampling band, MWh: uniform in `[BAND_MIN, BAND_MAX)`.
const BAND_MIN: i64 = 450;
const BAND_MAX: i64 = 550;

/// One forward-forecast day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub expected_mwh: i64,
}

/// Source of forward-forecast draws.
///
/// Implementations must return exactly [`FORECAST_HORIZON_DAYS`] points,
/// dated `end ..= end + 9`, chronological.
pub trait ForecastSampler: Send {
    fn sample(&mut self, end: NaiveDate) -> Vec<ForecastPoint>;
}

/// Uniform sampler over the fixed band.
#[derive(Debug)]
pub struct UniformForecastSampler {
    rng: StdRng,
}

impl UniformForecastSampler {
    /// Entropy-seeded when `seed` is `None`, reproducible otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }
}

impl ForecastSampler for UniformForecastSampler {
    fn sample(&mut self, end: NaiveDate) -> Vec<ForecastPoint> {
        (0..FORECAST_HORIZON_DAYS as i64)
            .map(|offset| ForecastPoint {
                date: end + Duration::days(offset),
                expected_mwh: self.rng.gen_range(BAND_MIN..BAND_MAX),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sample_shape() {
        let mut sampler = UniformForecastSampler::seeded(1);
        let forward = sampler.sample(date(2023, 3, 10));
        assert_eq!(forward.len(), FORECAST_HORIZON_DAYS);
        // anchored at the end date, daily steps
        assert_eq!(forward[0].date, date(2023, 3, 10));
        assert_eq!(forward[9].date, date(2023, 3, 19));
        for pair in forward.windows(2) {
            assert_eq!((pair[1].date - pair[0].date).num_days(), 1);
        }
    }

    #[test]
    fn test_sample_respects_band() {
        let mut sampler = UniformForecastSampler::seeded(2);
        for _ in 0..50 {
            for point in sampler.sample(date(2023, 6, 1)) {
                assert!((BAND_MIN..BAND_MAX).contains(&point.expected_mwh));
            }
        }
    }

    #[test]
    fn test_seeded_samplers_agree() {
        let mut a = UniformForecastSampler::seeded(99);
        let mut b = UniformForecastSampler::seeded(99);
        assert_eq!(a.sample(date(2023, 1, 1)), b.sample(date(2023, 1, 1)));
    }

    #[test]
    fn test_consecutive_draws_differ() {
        // regenerated on every recompute: the same sampler moves on
        let mut sampler = UniformForecastSampler::seeded(7);
        let first = sampler.sample(date(2023, 1, 1));
        let second = sampler.sample(date(2023, 1, 1));
        assert_ne!(first, second);
    }
}
