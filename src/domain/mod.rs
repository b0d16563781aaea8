//! Domain types for the stakescope explorer.
//!
//! This module defines the typed representations of everything the explorer
//! API returns, plus the error taxonomy used by the client layer:
//!
//! - [`AccountDetails`] / [`FieldValue`] - account balance categories
//! - [`Transaction`] / [`TransactionPage`] / [`TxnQuery`] - history pages
//! - [`MetaStats`] - network-wide stats (current price)
//! - [`Network`] - selectable API endpoints
//! - [`ExplorerError`] - client error taxonomy

mod account;
mod error;
mod network;
mod stats;
mod transaction;

pub use account::{AccountDetails, FieldValue};
pub use error::ExplorerError;
pub use network::Network;
pub use stats::MetaStats;
pub use transaction::{Transaction, TransactionPage, TxnQuery, TxnType};
