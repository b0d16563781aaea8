//! State management module for the stakescope TUI application.
//!
//! The state is split by concern, the way the rest of the crate expects
//! to find it:
//!
//! - [`DataState`] - the three response slots + loading flags + derived view
//! - [`AppConfig`] - persistent configuration with load/save capabilities
//! - [`App`] - everything wired together with the async message channel
//!
//! Background fetches communicate with the main loop through an unbounded
//! mpsc channel of [`AppMessage`]s; the loop drains it every tick.

use tokio::sync::mpsc;

use crate::client::ExplorerClient;
use crate::domain::{AccountDetails, MetaStats, Network, TransactionPage};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_commands;
mod app_lifecycle;
mod app_messages;

pub mod config;
pub mod data;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use data::DataState;

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background fetch tasks to the main app loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Account details loaded.
    AccountDetailsLoaded(Box<AccountDetails>),
    /// Account details fetch failed.
    AccountDetailsFailed(String),
    /// Transaction page loaded.
    TransactionsLoaded(TransactionPage),
    /// Transaction page fetch failed.
    TransactionsFailed(String),
    /// Meta stats loaded.
    StatsLoaded(MetaStats),
    /// Meta stats fetch failed.
    StatsFailed(String),
}

// ============================================================================
// Startup Options
// ============================================================================

/// Options passed when starting the application.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Address to open on startup.
    pub address: String,
    /// Network override; falls back to the persisted configuration.
    pub network: Option<Network>,
    /// Pre-fetched account details (e.g. handed over by a caller that
    /// already looked the account up); installs without a network
    /// round-trip.
    pub seed: Option<AccountDetails>,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
///
/// Holds the data slots, network client, async channel, and the little
/// bits of UI interaction state (address prompt, table scroll).
#[derive(Debug)]
pub struct App {
    /// Data state - response slots, loading flags, derived view.
    pub data: DataState,

    /// Address currently shown.
    pub address: String,

    /// Current network.
    pub network: Network,

    /// Whether the application should exit.
    pub exit: bool,

    /// In-progress address prompt text; `None` when the prompt is closed.
    pub address_input: Option<String>,

    /// Scroll offset into the transactions table.
    pub txn_scroll: usize,

    /// Most recent fetch error, shown in the footer.
    pub last_error: Option<String>,

    // ========================================================================
    // Async Communication
    // ========================================================================
    // NOTE: Channel sends use `let _ = tx.send(...)` throughout. This is
    // intentional fire-and-forget: the receiver may be dropped during
    // shutdown and those errors don't matter.
    /// Sender for app messages (cloned into background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    // ========================================================================
    // Network Client
    // ========================================================================
    /// Explorer client for API requests.
    pub(crate) client: ExplorerClient,

    /// Seed account installed instead of the initial account fetch.
    pub(crate) startup_seed: Option<AccountDetails>,
}
