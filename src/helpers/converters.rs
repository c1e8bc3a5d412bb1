use common::{ConsumptionPoint, ConsumptionTimeseries, RegionDto, SectorDto};
use model::{EnergyDataset, Region, Sector, TimeSeriesPoint};

/// Convert a filtered series slice into the transport timeseries
pub fn slice_to_timeseries(slice: &[TimeSeriesPoint]) -> ConsumptionTimeseries {
    ConsumptionTimeseries::new(slice.iter().map(point_to_dto).collect())
}

/// Convert the full dataset series into the transport timeseries
pub fn dataset_to_timeseries(dataset: &EnergyDataset) -> ConsumptionTimeseries {
    slice_to_timeseries(dataset.series())
}

pub fn point_to_dto(point: &TimeSeriesPoint) -> ConsumptionPoint {
    ConsumptionPoint::new(point.date, point.real_mwh, point.forecast_mwh)
}

pub fn region_to_dto(region: &Region) -> RegionDto {
    RegionDto {
        name: region.name.to_string(),
        latitude: region.latitude,
        longitude: region.longitude,
        consumption_mwh: region.consumption_mwh,
    }
}

pub fn sector_to_dto(sector: &Sector) -> SectorDto {
    SectorDto {
        name: sector.name.to_string(),
        consumption_mwh: sector.consumption_mwh,
    }
}
