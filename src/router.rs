use crate::handlers::{
    dashboard::get_dashboard,
    health::health_check,
    reference::{get_regions, get_sectors},
    timeseries::get_consumption_timeseries,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use axum_prometheus::metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use axum_prometheus::PrometheusMetricLayer;
use std::sync::OnceLock;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// The Prometheus recorder can only be installed once per process, so the
/// handle is shared across routers (tests build several).
fn metric_handle() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
    HANDLE
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus metrics recorder")
        })
        .clone()
}

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let prometheus_layer = PrometheusMetricLayer::new();
    let handle = metric_handle();

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // API v1 routes
        .route("/api/v1/dashboard", get(get_dashboard))
        .route(
            "/api/v1/consumption/timeseries",
            get(get_consumption_timeseries),
        )
        .route("/api/v1/regions", get(get_regions))
        .route("/api/v1/sectors", get(get_sectors))
        // Prometheus metrics
        .route(
            "/metrics",
            get(move || {
                let handle = handle.clone();
                async move { handle.render() }
            }),
        )
        // Static assets (the home page illustration)
        .nest_service("/assets", ServeDir::new("assets"))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .layer(prometheus_layer)
        .with_state(state)
}
