//! Explorer API client.
//!
//! This module provides the unified `ExplorerClient` for talking to the
//! explorer REST backend of the selected network:
//! - account details lookups
//! - paginated transaction history
//! - network meta statistics (price feed)
//!
//! # Example
//!
//! ```ignore
//! use crate::client::ExplorerClient;
//! use crate::domain::Network;
//!
//! let client = ExplorerClient::new(Network::MainNet)?;
//! let details = client.get_account_details("pool1...").await?;
//! ```

use reqwest::Client;
use std::time::Duration;

use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::domain::{ExplorerError, Network};

mod accounts;
mod stats;
mod transactions;


// ============================================================================
// Explorer API Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct ExplorerClient {
    /// The explorer API base URL.
    pub(crate) api_url: String,
    /// HTTP client for requests.
    pub(crate) client: Client,
}

impl ExplorerClient {
    /// Creates a new client for the given network.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::ClientInit` if the HTTP client fails to
    /// initialize (e.g., TLS backend unavailable).
    pub fn new(network: Network) -> Result<Self, ExplorerError> {
        let client = Self::build_http_client()?;

        Ok(Self {
            api_url: network.api_url().to_string(),
            client,
        })
    }

    /// Build the HTTP client with connection pooling.
    fn build_http_client() -> Result<Client, ExplorerError> {
        Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ExplorerError::client_init(e.to_string()))
    }

    #[must_use]
    #[allow(dead_code)] // Public API
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub(crate) fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url).header("accept", "application/json")
    }
}
