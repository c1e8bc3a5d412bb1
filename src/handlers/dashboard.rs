use axum::{
    extract::{Query, State},
    response::Json,
};
use chrono::Utc;
use common::DashboardViewModel;
use compute::default_sampler;
use tracing::instrument;

use crate::helpers::selection::selection_from_query;
use crate::schemas::{ApiResponse, AppState, DashboardQuery};

/// Compute the dashboard view-model for a period selection.
///
/// Always answers 200: an unusable selection is reported through the
/// payload's `validation_message` with all derived fields null, matching
/// what the dashboard renders.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard view-model computed", body = ApiResponse<DashboardViewModel>)
    )
)]
#[instrument(skip(state))]
pub async fn get_dashboard(
    Query(query): Query<DashboardQuery>,
    State(state): State<AppState>,
) -> Json<ApiResponse<DashboardViewModel>> {
    let selection = selection_from_query(&query);
    let today = Utc::now().date_naive();

    // The forward forecast is redrawn per request; with a configured seed
    // every request draws the same values (reproducible deployments).
    let mut sampler = default_sampler(state.forecast_seed);
    let view_model = compute::build_dashboard(&state.dataset, &selection, today, &mut sampler);

    let message = if view_model.is_valid() {
        "Dashboard view-model computed successfully".to_string()
    } else {
        "Dashboard selection failed validation".to_string()
    };

    Json(ApiResponse {
        data: view_model,
        message,
        success: true,
    })
}
