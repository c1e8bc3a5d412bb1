use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Declarative chart description.
///
/// The compute layer generates these; the frontend just renders them
/// (it translates each spec into a Plotly figure without further logic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartSpec {
    /// Chart title, embedding the resolved period label
    pub title: String,
    /// Widget height in pixels
    pub height: u32,
    /// Plot and paper background color
    pub background: String,
    /// Title/axis font color
    pub font_color: String,
    /// X axis label, when the chart has one
    pub x_label: Option<String>,
    /// Y axis label, when the chart has one
    pub y_label: Option<String>,
    /// Data series to draw
    pub traces: Vec<ChartTrace>,
}

/// One data series within a [`ChartSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartTrace {
    /// Categorical bar series.
    Bar {
        name: String,
        categories: Vec<String>,
        values: Vec<f64>,
        color: String,
    },
    /// Date-indexed line series.
    Line {
        name: String,
        dates: Vec<NaiveDate>,
        values: Vec<f64>,
        color: Option<String>,
    },
    /// Geographic scatter with magnitude encoded as marker size and color.
    Map {
        name: String,
        latitudes: Vec<f64>,
        longitudes: Vec<f64>,
        /// Marker sizes (consumption magnitudes)
        sizes: Vec<f64>,
        /// Marker color scale values (same magnitudes)
        color_values: Vec<f64>,
        size_max: u32,
        zoom: f64,
        style: String,
    },
}

impl ChartTrace {
    /// Number of data points in the trace.
    pub fn len(&self) -> usize {
        match self {
            ChartTrace::Bar { values, .. } => values.len(),
            ChartTrace::Line { values, .. } => values.len(),
            ChartTrace::Map { latitudes, .. } => latitudes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything the dashboard page needs to render for one period selection.
///
/// When the selection is unusable, `validation_message` is set and the
/// eight derived fields are all `None`; otherwise `validation_message` is
/// `None` and every derived field is populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardViewModel {
    /// User-visible validation text, `None` when the selection is valid
    pub validation_message: Option<String>,
    /// Total cost over the filtered slice, formatted (e.g. "8,123.40")
    pub total_cost: Option<String>,
    /// Total CO₂ emissions over the filtered slice, formatted, in tonnes
    pub total_co2: Option<String>,
    /// Forward-forecast values above the alert threshold (0..=10)
    pub alert_count: Option<u32>,
    /// Resolved analysis period, e.g. "Analysis period: 2023-03-01 to 2023-03-10"
    pub period_label: Option<String>,
    /// Consumption by sector (bar)
    pub sector_chart: Option<ChartSpec>,
    /// Regional consumption (map)
    pub regional_chart: Option<ChartSpec>,
    /// Real vs recorded forecast (lines)
    pub comparison_chart: Option<ChartSpec>,
    /// 10-day forward forecast (line)
    pub forecast_chart: Option<ChartSpec>,
}

impl DashboardViewModel {
    /// View-model for an unusable selection: message set, outputs suppressed.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            validation_message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validation_message.is_none()
    }
}
