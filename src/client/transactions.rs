//! Transaction history methods for ExplorerClient.

use color_eyre::Result;
use serde_json::Value;

use super::ExplorerClient;
use crate::domain::{ExplorerError, TransactionPage, TxnQuery};

impl ExplorerClient {
    /// Fetch one page of an account's transaction history.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the response is not
    /// valid JSON. Malformed individual entries are skipped, not fatal.
    pub async fn get_transaction_page(&self, query: &TxnQuery) -> Result<TransactionPage> {
        let url = Self::transaction_page_url(&self.api_url, query);
        let response = self.build_request(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(color_eyre::eyre::eyre!(
                "Failed to fetch transactions: HTTP {}",
                status
            ));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|_| ExplorerError::parse("Failed to parse transaction JSON").into_report())?;

        Ok(TransactionPage::from_json(&json))
    }

    /// Builds the full URL for a transaction page request.
    #[must_use]
    pub(crate) fn transaction_page_url(api_url: &str, query: &TxnQuery) -> String {
        format!("{}/transactions?{}", api_url, query.to_query_string())
    }
}
