//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` - Creates a new application instance
//! - `run()` - Main event loop
//! - The three independent data fetches and address re-keying

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::client::ExplorerClient;
use crate::constants::{TICK_RATE, TXN_PAGE_LIMIT, TXN_PAGE_OFFSET};
use crate::domain::TxnQuery;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, DataState, StartupOptions};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance, loading configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(startup_options: StartupOptions) -> Result<Self> {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let mut config = AppConfig::load();

        // CLI override wins and becomes the new persisted default
        if let Some(network) = startup_options.network
            && network != config.network
        {
            config.network = network;
            if let Err(err) = config.save() {
                tracing::debug!("Config save failed: {err}");
            }
        }

        let network = config.network;
        let client = ExplorerClient::new(network).map_err(|e| e.into_report())?;

        Ok(Self {
            data: DataState::new(),
            address: startup_options.address,
            network,
            exit: false,
            address_input: None,
            txn_scroll: 0,
            last_error: None,
            message_tx,
            message_rx,
            client,
            startup_seed: startup_options.seed,
        })
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.initial_data_fetch();

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_event(mouse);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    // ========================================================================
    // Data Fetching
    // ========================================================================

    /// Issues the three independent reads for the current address.
    ///
    /// A startup seed, if present, stands in for the account fetch.
    pub(super) fn initial_data_fetch(&mut self) {
        match self.startup_seed.take() {
            Some(seed) => {
                self.data.set_account(seed);
            }
            None => self.load_account_details(),
        }
        self.load_transactions();
        self.load_stats();
    }

    /// Spawns the account details fetch for the current address.
    pub(super) fn load_account_details(&mut self) {
        self.data.account_loading = true;

        let client = self.client.clone();
        let address = self.address.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            match client.get_account_details(&address).await {
                Ok(details) => {
                    let _ = message_tx.send(super::AppMessage::AccountDetailsLoaded(Box::new(
                        details,
                    )));
                }
                Err(e) => {
                    let _ = message_tx.send(super::AppMessage::AccountDetailsFailed(e.to_string()));
                }
            }
        });
    }

    /// Spawns the transaction page fetch for the current address.
    pub(super) fn load_transactions(&mut self) {
        self.data.transactions_loading = true;

        let client = self.client.clone();
        let query = TxnQuery {
            address: self.address.clone(),
            limit: TXN_PAGE_LIMIT,
            offset: TXN_PAGE_OFFSET,
        };
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            match client.get_transaction_page(&query).await {
                Ok(page) => {
                    let _ = message_tx.send(super::AppMessage::TransactionsLoaded(page));
                }
                Err(e) => {
                    let _ = message_tx.send(super::AppMessage::TransactionsFailed(e.to_string()));
                }
            }
        });
    }

    /// Spawns the meta stats fetch.
    pub(super) fn load_stats(&mut self) {
        self.data.stats_loading = true;

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            match client.get_meta_stats().await {
                Ok(stats) => {
                    let _ = message_tx.send(super::AppMessage::StatsLoaded(stats));
                }
                Err(e) => {
                    let _ = message_tx.send(super::AppMessage::StatsFailed(e.to_string()));
                }
            }
        });
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Switches to a different account address and re-issues all three
    /// reads (the stats read included - its re-fetch is keyed to address
    /// changes even though the response is network-wide).
    pub fn set_address(&mut self, address: String) {
        if address == self.address {
            return;
        }

        tracing::debug!("Switching to address {address}");
        self.address = address;
        self.txn_scroll = 0;
        self.last_error = None;
        self.data.clear_for_address_change();

        self.load_account_details();
        self.load_transactions();
        self.load_stats();
    }

    /// Re-issues all three reads for the current address.
    pub fn refresh(&mut self) {
        self.last_error = None;
        self.load_account_details();
        self.load_transactions();
        self.load_stats();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::{App, StartupOptions};
    use crate::domain::{AccountDetails, MetaStats};
    use serde_json::json;

    fn seed_details() -> AccountDetails {
        AccountDetails::from_json(&json!({
            "address": "pool1seeded",
            "balance": 42.0,
            "delegated": 0.0,
            "unbonding": 0.0,
            "stake_reward": 0.0,
        }))
    }

    #[tokio::test]
    async fn test_seed_replaces_account_fetch() {
        let mut app = App::new(StartupOptions {
            address: "pool1seeded".to_string(),
            network: None,
            seed: Some(seed_details()),
        })
        .unwrap();

        app.initial_data_fetch();

        // The seed renders immediately; only the other two reads are
        // in flight.
        assert!(!app.data.account_loading);
        assert!(app.data.account.is_some());
        assert!(app.data.view.is_some());
        assert!(app.data.transactions_loading);
        assert!(app.data.stats_loading);
    }

    #[tokio::test]
    async fn test_without_seed_all_three_reads_start() {
        let mut app = App::new(StartupOptions {
            address: "pool1unseeded".to_string(),
            ..StartupOptions::default()
        })
        .unwrap();

        app.initial_data_fetch();

        assert!(app.data.account_loading);
        assert!(app.data.transactions_loading);
        assert!(app.data.stats_loading);
    }

    #[tokio::test]
    async fn test_set_address_rekeys_all_reads() {
        let mut app = App::new(StartupOptions {
            address: "pool1first".to_string(),
            ..StartupOptions::default()
        })
        .unwrap();
        app.data.set_account(seed_details());
        app.data
            .set_stats(MetaStats::from_json(&json!({"current_price": 1.0})));
        app.txn_scroll = 3;
        app.last_error = Some("stale".to_string());

        app.set_address("pool1second".to_string());

        assert_eq!(app.address, "pool1second");
        assert_eq!(app.txn_scroll, 0);
        assert!(app.last_error.is_none());
        assert!(app.data.account.is_none());
        // All three reads re-issued, the stats read included
        assert!(app.data.account_loading);
        assert!(app.data.transactions_loading);
        assert!(app.data.stats_loading);
        // The old price stays visible while its re-fetch is in flight
        assert!(app.data.stats.is_some());
    }

    #[tokio::test]
    async fn test_set_address_same_address_is_noop() {
        let mut app = App::new(StartupOptions {
            address: "pool1same".to_string(),
            ..StartupOptions::default()
        })
        .unwrap();
        app.data.set_account(seed_details());

        app.set_address("pool1same".to_string());

        assert!(app.data.account.is_some());
        assert!(!app.data.account_loading);
    }
}
