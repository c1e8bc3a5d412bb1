//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the backend handlers' request/response payloads
//! so the frontend can deserialize API responses without duplicating shapes.

mod dashboard;
mod period;
mod timeseries;

pub use dashboard::{ChartSpec, ChartTrace, DashboardViewModel};
pub use period::{DateRange, Page, PageEvent, PeriodMode, SelectionEvent, SelectionState};
pub use timeseries::{ConsumptionPoint, ConsumptionTimeseries, RegionDto, SectorDto};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
/// Note: The backend has its own definition in enerdash/src/schemas.rs with the
/// same field names. We mirror it here for the frontend to reuse.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

/// Error response mirror (backend definition lives in enerdash/src/schemas.rs).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success flag (always false for errors)
    pub success: bool,
}
