use chrono::NaiveDate;
use common::{
    ChartSpec, ChartTrace, ConsumptionPoint, ConsumptionTimeseries, DashboardViewModel, DateRange,
    PeriodMode, RegionDto, SectorDto,
};
use model::EnergyDataset;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Immutable dataset generated once at startup
    pub dataset: Arc<EnergyDataset>,
    /// Cache for deterministic timeseries slices
    pub cache: Cache<String, ConsumptionTimeseries>,
    /// Fixed seed for the mock forward forecast; `None` keeps it
    /// entropy-seeded (the production behavior)
    pub forecast_seed: Option<u64>,
}

/// Query parameters for the dashboard endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct DashboardQuery {
    /// Period mode (`1M`, `3M`, `6M`, `1Y`, `custom`); defaults to `1M`
    pub period: Option<PeriodMode>,
    /// Start date for custom mode (YYYY-MM-DD)
    pub start_date: Option<NaiveDate>,
    /// End date for custom mode (YYYY-MM-DD)
    pub end_date: Option<NaiveDate>,
}

/// Query parameters for the timeseries endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct TimeseriesQuery {
    /// Start date for the slice (YYYY-MM-DD)
    pub start_date: NaiveDate,
    /// End date for the slice (YYYY-MM-DD)
    pub end_date: NaiveDate,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of points in the generated series
    pub series_points: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::dashboard::get_dashboard,
        crate::handlers::timeseries::get_consumption_timeseries,
        crate::handlers::reference::get_regions,
        crate::handlers::reference::get_sectors,
    ),
    components(
        schemas(
            ApiResponse<DashboardViewModel>,
            ApiResponse<ConsumptionTimeseries>,
            ApiResponse<Vec<RegionDto>>,
            ApiResponse<Vec<SectorDto>>,
            ErrorResponse,
            HealthResponse,
            DashboardQuery,
            TimeseriesQuery,
            DashboardViewModel,
            ChartSpec,
            ChartTrace,
            ConsumptionTimeseries,
            ConsumptionPoint,
            RegionDto,
            SectorDto,
            PeriodMode,
            DateRange,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "dashboard", description = "Dashboard view-model endpoint"),
        (name = "timeseries", description = "Consumption timeseries endpoints"),
        (name = "reference", description = "Static regional and sectoral tables"),
    ),
    info(
        title = "EnerDash API",
        description = "Energy Consumption Dashboard API - regional and sectoral analytics with period filtering",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
