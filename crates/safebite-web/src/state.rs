//! Application state management

use crate::api_client::ApiClient;
use safebite_core::Config;

/// Application state holding configuration and clients
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// API client for backend communication
    pub api_client: ApiClient,
}

impl AppState {
    /// Create new application state
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mut api_client = ApiClient::new(
            config.backend.base_url.clone(),
            config.backend.request_timeout,
        );
        if let Some(ref token) = config.backend.api_token {
            api_client = api_client.with_api_token(token.clone());
        }

        Self { config, api_client }
    }
}
