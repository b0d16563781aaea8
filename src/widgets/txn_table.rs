//! Transactions table widget.
//!
//! Displays one page of an account's transaction history. Props contract:
//! resp (the page, if it has arrived) + is_loading + scroll offset.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::Style,
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use crate::domain::{Transaction, TransactionPage};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, SUCCESS_COLOR, TABLE_HEADER_STYLE};
use crate::view::format::format_token;

// ============================================================================
// TxnTable
// ============================================================================

/// A widget that displays a page of transactions.
#[derive(Debug)]
pub struct TxnTable<'a> {
    /// The transaction page, if it has arrived.
    page: Option<&'a TransactionPage>,
    /// Whether the backing request is still in flight.
    is_loading: bool,
    /// Scroll offset into the page's rows.
    scroll: usize,
}

impl<'a> TxnTable<'a> {
    /// Creates a new `TxnTable`.
    #[must_use]
    pub const fn new(page: Option<&'a TransactionPage>) -> Self {
        Self {
            page,
            is_loading: false,
            scroll: 0,
        }
    }

    /// Sets the loading state.
    #[must_use]
    pub const fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// Sets the scroll offset.
    #[must_use]
    pub const fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for TxnTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let Some(page) = self.page else {
            let text = if self.is_loading {
                "Loading transactions..."
            } else {
                "No transactions"
            };
            Paragraph::new(text)
                .style(Style::default().fg(MUTED_COLOR))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        };

        if page.is_empty() {
            Paragraph::new("No transactions")
                .style(Style::default().fg(MUTED_COLOR))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let header = Row::new(vec![
            "Hash", "Type", "From", "To", "Amount", "Fee", "Height", "Time", "Status",
        ])
        .style(TABLE_HEADER_STYLE);

        let rows: Vec<Row> = page
            .items
            .iter()
            .skip(self.scroll)
            .map(txn_row)
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(13),
                Constraint::Length(10),
                Constraint::Length(13),
                Constraint::Length(13),
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(9),
                Constraint::Length(19),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .column_spacing(1);

        Widget::render(table, area, buf);
    }
}

fn txn_row(txn: &Transaction) -> Row<'_> {
    let (status_text, status_color) = if txn.success {
        ("ok", SUCCESS_COLOR)
    } else {
        ("failed", ERROR_COLOR)
    };

    Row::new(vec![
        Cell::from(truncate_hash(&txn.hash, 13)),
        Cell::from(txn.txn_type.label()),
        Cell::from(truncate_hash(&txn.from, 13)).style(Style::default().fg(MUTED_COLOR)),
        Cell::from(truncate_hash(&txn.to, 13)).style(Style::default().fg(MUTED_COLOR)),
        Cell::from(format_token(txn.amount)),
        Cell::from(format_token(txn.fee)).style(Style::default().fg(MUTED_COLOR)),
        Cell::from(txn.height.to_string()),
        Cell::from(txn.timestamp.clone()).style(Style::default().fg(MUTED_COLOR)),
        Cell::from(status_text).style(Style::default().fg(status_color)),
    ])
}

/// Truncates a hash with a middle ellipsis so both ends stay visible.
fn truncate_hash(hash: &str, max_len: usize) -> String {
    if hash.len() <= max_len {
        return hash.to_string();
    }

    if max_len < 7 {
        return hash.chars().take(max_len).collect();
    }

    let available = max_len - 3;
    let prefix_len = available.div_ceil(2);
    let suffix_len = available / 2;

    let prefix: String = hash.chars().take(prefix_len).collect();
    let suffix: String = hash.chars().skip(hash.len() - suffix_len).collect();

    format!("{prefix}...{suffix}")
}

// ============================================================================
// Tests
// ============================================================================
