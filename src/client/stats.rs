//! Network meta statistics methods for ExplorerClient.

use color_eyre::Result;
use serde_json::Value;

use super::ExplorerClient;
use crate::domain::{ExplorerError, MetaStats};

impl ExplorerClient {
    /// Fetch network-wide meta statistics (current token price).
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the response is not
    /// valid JSON.
    pub async fn get_meta_stats(&self) -> Result<MetaStats> {
        let url = format!("{}/meta", self.api_url);
        let response = self.build_request(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(color_eyre::eyre::eyre!(
                "Failed to fetch meta stats: HTTP {}",
                status
            ));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|_| ExplorerError::parse("Failed to parse stats JSON").into_report())?;

        Ok(MetaStats::from_json(&json))
    }
}
