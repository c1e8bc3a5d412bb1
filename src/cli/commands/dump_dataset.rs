use anyhow::Result;
use model::EnergyDataset;
use tracing::info;

use crate::helpers::converters::{dataset_to_timeseries, region_to_dto, sector_to_dto};

/// Generate the synthetic dataset and print it as pretty JSON on stdout.
pub fn dump_dataset(seed: u64) -> Result<()> {
    let dataset = EnergyDataset::generate(seed);

    let regions: Vec<_> = dataset.regions().iter().map(region_to_dto).collect();
    let sectors: Vec<_> = dataset.sectors().iter().map(sector_to_dto).collect();
    let dump = serde_json::json!({
        "seed": seed,
        "series": dataset_to_timeseries(&dataset),
        "regions": regions,
        "sectors": sectors,
    });

    println!("{}", serde_json::to_string_pretty(&dump)?);
    info!(seed, points = dataset.series().len(), "dataset dumped");
    Ok(())
}
