pub mod dashboard;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// API Response wrapper
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
    pub success: bool,
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(api_response.data)
}
