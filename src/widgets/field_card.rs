//! Labeled-field card widget.
//!
//! Displays the account's labeled field rows (address, balance categories,
//! total) as a two-column table. Props contract: items + is_loading.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use crate::theme::{MUTED_COLOR, WARNING_COLOR};
use crate::view::DisplayField;

// ============================================================================
// FieldCard
// ============================================================================

/// A widget that displays labeled field rows.
#[derive(Debug)]
pub struct FieldCard<'a> {
    /// Rows to display.
    items: &'a [DisplayField],
    /// Whether the backing requests are still in flight.
    is_loading: bool,
}

impl<'a> FieldCard<'a> {
    /// Creates a new `FieldCard` with the given rows.
    #[must_use]
    pub const fn new(items: &'a [DisplayField]) -> Self {
        Self {
            items,
            is_loading: false,
        }
    }

    /// Sets the loading state.
    #[must_use]
    pub const fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }
}

impl Widget for FieldCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.is_loading && self.items.is_empty() {
            centered_message("Loading account details...").render(area, buf);
            return;
        }

        if self.items.is_empty() {
            centered_message("No account data").render(area, buf);
            return;
        }

        let rows: Vec<Row> = self
            .items
            .iter()
            .map(|field| {
                Row::new(vec![
                    Cell::from(field.label.clone()).style(
                        Style::default()
                            .fg(WARNING_COLOR)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Cell::from(field.value.clone()),
                ])
            })
            .collect();

        let table = Table::new(rows, [Constraint::Length(20), Constraint::Min(20)])
            .column_spacing(2);

        Widget::render(table, area, buf);
    }
}

fn centered_message(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    fn sample_fields() -> Vec<DisplayField> {
        vec![
            DisplayField {
                key: "address",
                label: "ADDRESS".to_string(),
                value: "pool1xyz".to_string(),
            },
            DisplayField {
                key: "balance",
                label: "AVAILABLE BALANCE".to_string(),
                value: "1,234.5".to_string(),
            },
        ]
    }

    #[test]
    fn test_renders_labels_and_values() {
        let fields = sample_fields();
        let backend = TestBackend::new(60, 5);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| frame.render_widget(FieldCard::new(&fields), frame.area()))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("ADDRESS"));
        assert!(content.contains("pool1xyz"));
        assert!(content.contains("AVAILABLE BALANCE"));
        assert!(content.contains("1,234.5"));
    }

    #[test]
    fn test_loading_state() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                frame.render_widget(FieldCard::new(&[]).loading(true), frame.area());
            })
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("Loading account details..."));
    }

    #[test]
    fn test_empty_state() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| frame.render_widget(FieldCard::new(&[]), frame.area()))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("No account data"));
    }

    #[test]
    fn test_loading_with_items_still_shows_items() {
        // A stale card with fresh data arriving keeps showing rows
        let fields = sample_fields();
        let backend = TestBackend::new(60, 5);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                frame.render_widget(FieldCard::new(&fields).loading(true), frame.area());
            })
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("ADDRESS"));
    }
}
