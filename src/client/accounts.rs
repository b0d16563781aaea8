//! Account fetching methods for ExplorerClient.

use color_eyre::Result;
use serde_json::Value;

use super::ExplorerClient;
use crate::domain::{AccountDetails, ExplorerError};

impl ExplorerClient {
    /// Get account details (balance categories) for an address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address format is invalid, the account is
    /// not found, or the network request fails.
    pub async fn get_account_details(&self, address: &str) -> Result<AccountDetails> {
        Self::validate_address(address).map_err(ExplorerError::into_report)?;

        let url = format!("{}/accounts/{}", self.api_url, address);
        let response = self.build_request(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            if status.as_u16() == 404 {
                return Err(ExplorerError::not_found("account", address).into_report());
            }
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(color_eyre::eyre::eyre!(
                "Failed to fetch account details: HTTP {} - {}",
                status,
                error_text
            ));
        }

        let account_data: Value = response
            .json()
            .await
            .map_err(|_| ExplorerError::parse("Failed to parse account JSON").into_report())?;

        Ok(AccountDetails::from_json(&account_data))
    }

    /// Validates an address before issuing a request.
    ///
    /// Addresses are bech32-style strings; the explorer backend is the real
    /// authority, so only obviously broken input is rejected here.
    pub(crate) fn validate_address(address: &str) -> Result<(), ExplorerError> {
        let trimmed = address.trim();

        if trimmed.is_empty() {
            return Err(ExplorerError::invalid_input("Address cannot be empty"));
        }

        if trimmed.len() < 8 {
            return Err(ExplorerError::invalid_input(
                "Address is too short. Enter a full account address.",
            ));
        }

        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ExplorerError::invalid_input(
                "Address may only contain letters and digits",
            ));
        }

        Ok(())
    }
}
