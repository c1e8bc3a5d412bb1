use anyhow::Result;
use model::EnergyDataset;
use moka::future::Cache;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::schemas::AppState;

/// Application configuration, read from `ENERDASH_*` environment
/// variables (optionally via a `.env` file).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Seed for the synthetic dataset generated at startup
    #[serde(default = "default_dataset_seed")]
    pub dataset_seed: u64,
    /// Fixed seed for the mock forward forecast; unset keeps the
    /// forecast regenerating with fresh entropy on every recompute
    #[serde(default)]
    pub forecast_seed: Option<u64>,
}

fn default_dataset_seed() -> u64 {
    1337
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_seed: default_dataset_seed(),
            forecast_seed: None,
        }
    }
}

/// Load configuration from the environment
pub fn load_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();
    let config = config::Config::builder()
        .add_source(config::Environment::with_prefix("ENERDASH"))
        .build()?;
    Ok(config.try_deserialize()?)
}

/// Initialize application state from configuration
pub fn initialize_app_state(config: &AppConfig) -> AppState {
    tracing::info!(seed = config.dataset_seed, "generating startup dataset");
    let dataset = Arc::new(EnergyDataset::generate(config.dataset_seed));

    // Cache for deterministic timeseries slices
    let cache = Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(300)) // 5 minutes
        .build();

    AppState {
        dataset,
        cache,
        forecast_seed: config.forecast_seed,
    }
}
