//! Assembly of the complete dashboard view-model.

use chrono::NaiveDate;
use common::{DashboardViewModel, SelectionState};
use model::EnergyDataset;
use tracing::{instrument, warn};

use crate::forecast::ForecastSampler;
use crate::{chart, filter, kpi, period};

/// Derive everything the dashboard renders for one selection.
///
/// Total and idempotent apart from the forward forecast, which is
/// redrawn from `sampler` on every call. An unusable selection yields
/// the validation view-model with all derived fields suppressed; it
/// never panics and never returns an error.
#[instrument(skip(dataset, sampler), fields(mode = %selection.mode))]
pub fn build_dashboard(
    dataset: &EnergyDataset,
    selection: &SelectionState,
    today: NaiveDate,
    sampler: &mut dyn ForecastSampler,
) -> DashboardViewModel {
    let range = match period::resolve_period(selection, today, dataset.series_bounds()) {
        Ok(range) => range,
        Err(err) => {
            warn!(%err, "rejecting unusable period selection");
            return DashboardViewModel::invalid(err.to_string());
        }
    };

    let slice = filter::filter_series(dataset.series(), range);
    let label = period::period_label(&range);
    let forward = sampler.sample(range.end);

    DashboardViewModel {
        validation_message: None,
        total_cost: Some(kpi::format_grouped(kpi::total_cost(&slice))),
        total_co2: Some(kpi::format_grouped(kpi::total_co2(&slice))),
        alert_count: Some(kpi::count_alerts(&forward)),
        period_label: Some(label.clone()),
        sector_chart: Some(chart::sector_chart(dataset.sectors(), &label)),
        regional_chart: Some(chart::regional_chart(dataset.regions(), &label)),
        comparison_chart: Some(chart::comparison_chart(&slice, &label)),
        forecast_chart: Some(chart::forecast_chart(&forward, &label)),
    }
}
