use gloo::net::http::Request;
use shared::{AvailableMonthsResponse, ModeError, SystemModeResponse};

use super::config::FrontendConfig;

/// API client for communicating with the backend server
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Create a new API client pointed at the configured backend
    pub fn new() -> Self {
        Self::with_base_url(FrontendConfig::from_build_env().api_base_url)
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the application mode and feature flags.
    ///
    /// Any non-2xx status or unparseable body is reported as a `ModeError`;
    /// callers fall back to default mode state.
    pub async fn get_system_mode(&self) -> Result<SystemModeResponse, ModeError> {
        let response = Request::get(&self.url("/api/system/mode"))
            .send()
            .await
            .map_err(|e| ModeError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ModeError::Status(response.status()));
        }

        response
            .json::<SystemModeResponse>()
            .await
            .map_err(|e| ModeError::Decode(e.to_string()))
    }

    /// Get the earliest and latest months that have transaction data
    pub async fn get_available_months(&self) -> Result<AvailableMonthsResponse, String> {
        let url = self.url("/api/analytics/available-months");

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<AvailableMonthsResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse available months: {}", e)),
                    }
                } else {
                    Err(format!("Available months request failed with status {}", response.status()))
                }
            }
            Err(e) => Err(format!("Failed to fetch available months: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::with_base_url("http://localhost:9000".to_string());
        assert_eq!(client.url("/api/system/mode"), "http://localhost:9000/api/system/mode");
        assert_eq!(
            client.url("/api/analytics/available-months"),
            "http://localhost:9000/api/analytics/available-months"
        );
    }
}
