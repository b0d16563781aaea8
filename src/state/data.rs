//! Data state management for the stakescope TUI.
//!
//! This module holds the three independent response slots the account page
//! reads from (account details, transaction page, meta stats), each with
//! its own loading flag, plus the derived view-model.
//!
//! # Design
//!
//! The three reads resolve in any order; each updates only its own slot.
//! The derived [`AccountView`] is recomputed whenever the account response
//! or the price changes, never inside the render path. A slot that hasn't
//! resolved yet simply stays `None` and the page renders what it has.

use crate::domain::{AccountDetails, MetaStats, TransactionPage};
use crate::view::{AccountView, derive_account_view};

// ============================================================================
// Data State
// ============================================================================

/// Response slots and loading flags for the account page.
#[derive(Debug, Default)]
pub struct DataState {
    // === Response Slots ===
    /// Account details response.
    pub account: Option<AccountDetails>,
    /// Transaction page response.
    pub transactions: Option<TransactionPage>,
    /// Meta stats response.
    pub stats: Option<MetaStats>,

    // === Loading Flags (one per request, fully independent) ===
    /// Account details request in flight.
    pub account_loading: bool,
    /// Transaction page request in flight.
    pub transactions_loading: bool,
    /// Meta stats request in flight.
    pub stats_loading: bool,

    // === Derived ===
    /// View-model derived from `account` + price; `None` until the account
    /// response arrives.
    pub view: Option<AccountView>,
}

impl DataState {
    /// Creates a new `DataState` with nothing loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current price, zero while the stats read hasn't resolved.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.stats.as_ref().map_or(0.0, MetaStats::price)
    }

    /// Installs an account response and re-derives the view.
    pub fn set_account(&mut self, account: AccountDetails) {
        self.account = Some(account);
        self.account_loading = false;
        self.refresh_view();
    }

    /// Installs a transaction page response.
    pub fn set_transactions(&mut self, page: TransactionPage) {
        self.transactions = Some(page);
        self.transactions_loading = false;
    }

    /// Installs a stats response and re-derives the view (the price feeds
    /// the total-amount row).
    pub fn set_stats(&mut self, stats: MetaStats) {
        self.stats = Some(stats);
        self.stats_loading = false;
        self.refresh_view();
    }

    /// Re-derives the view-model from the current account response + price.
    pub fn refresh_view(&mut self) {
        self.view = self
            .account
            .as_ref()
            .map(|account| derive_account_view(account, self.price()));
    }

    /// Drops address-keyed data when navigating to a different account.
    ///
    /// The stats response is network-wide, so the previous price stays
    /// visible while its re-fetch is in flight.
    pub fn clear_for_address_change(&mut self) {
        self.account = None;
        self.transactions = None;
        self.view = None;
    }

    /// Number of transactions available for display.
    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.transactions.as_ref().map_or(0, |p| p.items.len())
    }
}

// ============================================================================
// Tests
// ============================================================================
