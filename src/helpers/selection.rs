use common::SelectionState;

use crate::schemas::DashboardQuery;

/// Helper function to build the selection state from query parameters.
///
/// Missing `period` means the default preset (`1M`). Dates are carried
/// through untouched; the resolver decides whether they matter for the
/// selected mode.
pub fn selection_from_query(query: &DashboardQuery) -> SelectionState {
    SelectionState {
        mode: query.period.unwrap_or_default(),
        custom_start: query.start_date,
        custom_end: query.end_date,
    }
}
