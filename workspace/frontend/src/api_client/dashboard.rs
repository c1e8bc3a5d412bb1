use common::{DashboardViewModel, SelectionState};

/// Fetch the dashboard view-model for the given selection.
///
/// Custom dates are only sent in custom mode; the backend ignores them
/// for presets anyway, so this just keeps the URLs honest.
pub async fn fetch_dashboard(selection: &SelectionState) -> Result<DashboardViewModel, String> {
    let mut endpoint = format!("/dashboard?period={}", selection.mode);
    if selection.mode.is_custom() {
        if let Some(start) = selection.custom_start {
            endpoint.push_str(&format!("&start_date={start}"));
        }
        if let Some(end) = selection.custom_end {
            endpoint.push_str(&format!("&end_date={end}"));
        }
    }

    super::get::<DashboardViewModel>(&endpoint).await
}
