use axum::{extract::State, response::Json};
use common::{RegionDto, SectorDto};
use tracing::instrument;

use crate::helpers::converters::{region_to_dto, sector_to_dto};
use crate::schemas::{ApiResponse, AppState};

/// Get the static regional table
#[utoipa::path(
    get,
    path = "/api/v1/regions",
    tag = "reference",
    responses(
        (status = 200, description = "Regions retrieved successfully", body = ApiResponse<Vec<RegionDto>>)
    )
)]
#[instrument(skip(state))]
pub async fn get_regions(State(state): State<AppState>) -> Json<ApiResponse<Vec<RegionDto>>> {
    let regions: Vec<RegionDto> = state.dataset.regions().iter().map(region_to_dto).collect();

    Json(ApiResponse {
        data: regions,
        message: "Regions retrieved successfully".to_string(),
        success: true,
    })
}

/// Get the static sectoral table
#[utoipa::path(
    get,
    path = "/api/v1/sectors",
    tag = "reference",
    responses(
        (status = 200, description = "Sectors retrieved successfully", body = ApiResponse<Vec<SectorDto>>)
    )
)]
#[instrument(skip(state))]
pub async fn get_sectors(State(state): State<AppState>) -> Json<ApiResponse<Vec<SectorDto>>> {
    let sectors: Vec<SectorDto> = state.dataset.sectors().iter().map(sector_to_dto).collect();

    Json(ApiResponse {
        data: sectors,
        message: "Sectors retrieved successfully".to_string(),
        success: true,
    })
}
