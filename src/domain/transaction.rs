//! Transaction types for the explorer API.

use chrono::DateTime;
use serde_json::Value;

use super::account::FieldValue;
use super::error::ExplorerError;

// ============================================================================
// Transaction Type
// ============================================================================

/// Message type of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxnType {
    /// Plain token transfer.
    Transfer,
    /// Delegation to a validator.
    Delegate,
    /// Undelegation from a validator.
    Undelegate,
    /// Staking reward withdrawal.
    Reward,
    /// Anything the explorer doesn't classify.
    #[default]
    Unknown,
}

impl TxnType {
    /// Parses the `type` field of a transaction object.
    #[must_use]
    pub fn from_api_str(s: &str) -> Self {
        match s {
            "send" | "transfer" => Self::Transfer,
            "delegate" => Self::Delegate,
            "undelegate" | "begin_unbonding" => Self::Undelegate,
            "get_reward" | "withdraw_reward" => Self::Reward,
            _ => Self::Unknown,
        }
    }

    /// Short display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Transfer => "Transfer",
            Self::Delegate => "Delegate",
            Self::Undelegate => "Undelegate",
            Self::Reward => "Reward",
            Self::Unknown => "Unknown",
        }
    }
}

// ============================================================================
// Transaction
// ============================================================================

/// A single transaction row from the paginated history endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transaction {
    /// Transaction hash.
    pub hash: String,
    /// Message type.
    pub txn_type: TxnType,
    /// Sender address.
    pub from: String,
    /// Recipient address (validator address for staking messages).
    pub to: String,
    /// Transferred amount in tokens.
    pub amount: f64,
    /// Fee paid in tokens.
    pub fee: f64,
    /// Block height the transaction was included in.
    pub height: u64,
    /// Human-readable UTC timestamp.
    pub timestamp: String,
    /// Whether the transaction executed successfully.
    pub success: bool,
}

impl Transaction {
    /// Parses a transaction from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the object has no hash; every other field
    /// falls back to a default so one odd row doesn't sink the page.
    pub fn from_json(value: &Value) -> Result<Self, ExplorerError> {
        let hash = value["hash"]
            .as_str()
            .ok_or_else(|| ExplorerError::parse("transaction object missing 'hash'"))?
            .to_string();

        let txn_type = value["type"]
            .as_str()
            .map(TxnType::from_api_str)
            .unwrap_or_default();

        // Amounts arrive as numbers or decimal strings depending on backend
        let amount = FieldValue::from_value(&value["amount"])
            .as_number()
            .unwrap_or(0.0);
        let fee = FieldValue::from_value(&value["fee"])
            .as_number()
            .unwrap_or(0.0);

        Ok(Self {
            hash,
            txn_type,
            from: value["from"].as_str().unwrap_or("").to_string(),
            to: value["to"].as_str().unwrap_or("").to_string(),
            amount,
            fee,
            height: value["height"].as_u64().unwrap_or(0),
            timestamp: format_unix_timestamp(value["timestamp"].as_i64().unwrap_or(0)),
            success: value["status"].as_bool().unwrap_or(true),
        })
    }
}

/// Formats a unix timestamp as `YYYY-MM-DD HH:MM:SS` UTC.
#[must_use]
fn format_unix_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

// ============================================================================
// Transaction Page
// ============================================================================

/// One page of an account's transaction history.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionPage {
    /// Total number of transactions matching the query.
    pub total: u64,
    /// Transactions in this page, newest first.
    pub items: Vec<Transaction>,
}

impl TransactionPage {
    /// Parses a page from the raw JSON response.
    ///
    /// Malformed entries are skipped rather than failing the whole page.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let empty_vec = Vec::new();
        let raw_items = value["transactions"].as_array().unwrap_or(&empty_vec);

        let items: Vec<Transaction> = raw_items
            .iter()
            .filter_map(|v| Transaction::from_json(v).ok())
            .collect();

        let total = value["total"].as_u64().unwrap_or(items.len() as u64);

        Self { total, items }
    }

    /// Returns `true` if this page has no transactions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// Transaction Query
// ============================================================================

/// Query parameters for the paginated transaction endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxnQuery {
    /// Account address to filter by.
    pub address: String,
    /// Page size.
    pub limit: u64,
    /// Page offset.
    pub offset: u64,
}

impl TxnQuery {
    /// Builds the query-string portion of the request URL.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        format!(
            "address={}&limit={}&offset={}",
            self.address, self.limit, self.offset
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
