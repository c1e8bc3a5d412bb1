pub mod chart;
pub mod error;
pub mod filter;
pub mod forecast;
pub mod kpi;
pub mod period;
pub mod view_model;

pub use error::{ComputeError, Result};
pub use forecast::{ForecastPoint, ForecastSampler, UniformForecastSampler};
pub use view_model::build_dashboard;

/// Returns a default pre-configured forecast sampler.
///
/// With `seed` set, every recompute draws the same forward forecast,
/// which tests and reproducible deployments rely on. With `None`, the sampler
/// is entropy-seeded and the forecast changes on every recompute, which
/// is the production behavior.
pub fn default_sampler(seed: Option<u64>) -> UniformForecastSampler {
    UniformForecastSampler::new(seed)
}
