//! Layout calculations for the stakescope TUI.
//!
//! The account page is a responsive grid: a 55/43 two-column split of the
//! field card and the pie chart, collapsing to a single column when the
//! terminal is narrower than the breakpoint, with the transactions table
//! full-width below.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{CHART_HEIGHT, GRID_BREAKPOINT};

// ============================================================================
// Constants
// ============================================================================

/// Height of the header area in terminal rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer area in terminal rows.
pub const FOOTER_HEIGHT: u16 = 1;

/// Rows reserved for the field card when the grid stacks vertically.
const CARD_STACKED_HEIGHT: u16 = 8;

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Header area (name, address, network/price indicators).
    pub header: Rect,
    /// Account page area.
    pub main: Rect,
    /// Footer area (key hints / error line).
    pub footer: Rect,
}

/// Account page grid areas.
#[derive(Debug, Clone, Copy)]
pub struct AccountLayout {
    /// Labeled field card.
    pub card: Rect,
    /// Pie chart.
    pub chart: Rect,
    /// Full-width transactions table.
    pub table: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area.
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Calculate the responsive account page grid.
///
/// Wide terminals get the two-column card/chart row; anything narrower
/// than [`GRID_BREAKPOINT`] stacks the card above the chart.
#[must_use]
pub fn calculate_account_layout(area: Rect) -> AccountLayout {
    if area.width >= GRID_BREAKPOINT {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(CHART_HEIGHT + 2), Constraint::Min(5)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(43)])
            .spacing(1)
            .split(rows[0]);

        AccountLayout {
            card: columns[0],
            chart: columns[1],
            table: rows[1],
        }
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CARD_STACKED_HEIGHT),
                Constraint::Length(CHART_HEIGHT + 2),
                Constraint::Min(5),
            ])
            .split(area);

        AccountLayout {
            card: rows[0],
            chart: rows[1],
            table: rows[2],
        }
    }
}

/// Calculate a centered popup area within a parent area.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_app_layout() {
        let area = Rect::new(0, 0, 120, 50);
        let layout = calculate_app_layout(area);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.main.height, 50 - HEADER_HEIGHT - FOOTER_HEIGHT);
    }

    #[test]
    fn test_wide_terminal_uses_two_columns() {
        let area = Rect::new(0, 0, 120, 50);
        let layout = calculate_account_layout(area);

        // Card and chart share the top row
        assert_eq!(layout.card.y, layout.chart.y);
        assert!(layout.card.width > layout.chart.width);
        // Table sits below, full width
        assert!(layout.table.y >= layout.card.y + layout.card.height);
        assert_eq!(layout.table.width, 120);
    }

    #[test]
    fn test_narrow_terminal_stacks_vertically() {
        let area = Rect::new(0, 0, GRID_BREAKPOINT - 1, 50);
        let layout = calculate_account_layout(area);

        assert_eq!(layout.card.x, layout.chart.x);
        assert!(layout.chart.y >= layout.card.y + layout.card.height);
        assert!(layout.table.y >= layout.chart.y + layout.chart.height);
        assert_eq!(layout.card.width, GRID_BREAKPOINT - 1);
    }

    #[test]
    fn test_breakpoint_boundary() {
        let wide = calculate_account_layout(Rect::new(0, 0, GRID_BREAKPOINT, 40));
        assert_eq!(wide.card.y, wide.chart.y);

        let narrow = calculate_account_layout(Rect::new(0, 0, GRID_BREAKPOINT - 1, 40));
        assert_ne!(narrow.card.y, narrow.chart.y);
    }

    #[test]
    fn test_centered_popup_area() {
        let parent = Rect::new(0, 0, 100, 50);
        let popup = centered_popup_area(parent, 40, 20);

        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
    }

    #[test]
    fn test_centered_popup_area_clamped() {
        let parent = Rect::new(0, 0, 30, 20);
        let popup = centered_popup_area(parent, 100, 50);

        assert!(popup.width <= parent.width - 4);
        assert!(popup.height <= parent.height - 4);
    }
}
