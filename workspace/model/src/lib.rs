pub mod dataset;

pub use dataset::{EnergyDataset, Region, Sector, TimeSeriesPoint};
