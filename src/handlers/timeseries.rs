use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use common::{ConsumptionTimeseries, DateRange};
use tracing::instrument;

use crate::helpers::converters::slice_to_timeseries;
use crate::schemas::{ApiResponse, AppState, TimeseriesQuery};

/// Get the consumption slice for an explicit date range.
///
/// Unlike the dashboard endpoint this slice is deterministic, so
/// responses are cached.
#[utoipa::path(
    get,
    path = "/api/v1/consumption/timeseries",
    tag = "timeseries",
    responses(
        (status = 200, description = "Consumption timeseries retrieved successfully", body = ApiResponse<ConsumptionTimeseries>),
        (status = 400, description = "Reversed date range", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_consumption_timeseries(
    Query(query): Query<TimeseriesQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ConsumptionTimeseries>>, StatusCode> {
    if query.start_date > query.end_date {
        return Err(StatusCode::BAD_REQUEST);
    }

    // Create cache key
    let cache_key = format!("timeseries_{:?}", query);

    // Check cache first
    if let Some(timeseries) = state.cache.get(&cache_key).await {
        let response = ApiResponse {
            data: timeseries,
            message: "Consumption timeseries retrieved from cache".to_string(),
            success: true,
        };
        return Ok(Json(response));
    }

    let range = DateRange::new(query.start_date, query.end_date);
    let slice = compute::filter::filter_series(state.dataset.series(), range);
    let timeseries = slice_to_timeseries(&slice);

    // Cache the result
    state.cache.insert(cache_key, timeseries.clone()).await;

    let response = ApiResponse {
        data: timeseries,
        message: "Consumption timeseries retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
