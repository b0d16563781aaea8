//! Shared constants for the stakescope TUI.

use std::time::Duration;

// ============================================================================
// Event Loop
// ============================================================================

/// How often the UI redraws and processes pending messages.
pub const TICK_RATE: Duration = Duration::from_millis(100);

// ============================================================================
// Data Fetching
// ============================================================================

/// Number of transactions requested per page.
pub const TXN_PAGE_LIMIT: u64 = 10;

/// Offset of the first transaction page.
pub const TXN_PAGE_OFFSET: u64 = 0;

/// Default timeout for API requests in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Account Page Layout
// ============================================================================

/// Terminal width below which the card/chart grid stacks vertically.
pub const GRID_BREAKPOINT: u16 = 100;

/// Fixed height of the pie chart widget in rows.
pub const CHART_HEIGHT: u16 = 14;

/// Minimum sweep, in degrees, granted to every nonzero chart slice.
pub const CHART_MIN_ANGLE: f64 = 7.0;

// ============================================================================
// Chart Fallback
// ============================================================================

/// Value of the synthetic slice shown when all balances are zero.
///
/// Near-zero rather than zero so the chart still draws a full wedge.
pub const NOT_DATA_VALUE: f64 = 0.000_000_001;
