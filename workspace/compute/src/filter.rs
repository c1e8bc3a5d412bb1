//! Read-only filtering of the consumption series.

use common::DateRange;
use model::TimeSeriesPoint;

/// Points with `date ∈ [range.start, range.end]`, chronological order
/// preserved. An empty result is valid and flows through to KPIs and
/// charts as zeros/empty traces.
pub fn filter_series(series: &[TimeSeriesPoint], range: DateRange) -> Vec<TimeSeriesPoint> {
    series
        .iter()
        .filter(|point| range.contains(point.date))
        .copied()
        .collect()
}
