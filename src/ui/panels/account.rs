//! Account page rendering.
//!
//! Composes the three widgets of the account view: the labeled field card,
//! the stake-distribution pie chart, and the transactions table, laid out
//! by the responsive grid.

use ratatui::{Frame, layout::Rect};

use crate::constants::{CHART_HEIGHT, CHART_MIN_ANGLE};
use crate::state::App;
use crate::theme::CHART_COLORS;
use crate::ui::helpers::create_border_block;
use crate::ui::layout::calculate_account_layout;
use crate::view::ChartSlice;
use crate::view::format::{format_percent_dec2, format_token};
use crate::widgets::{FieldCard, PieChart, TxnTable};

/// Renders the full account page into the given area.
pub fn render_account_page(app: &App, frame: &mut Frame, area: Rect) {
    let page_block = create_border_block("Account Details", false);
    let inner = page_block.inner(area);
    frame.render_widget(page_block, area);

    let layout = calculate_account_layout(inner);
    let view = app.data.view.as_ref();

    // --- Field card ---
    // The total-amount row folds in the price, so the card counts the
    // stats read as part of its own loading state.
    let items = view.map_or(&[][..], |v| v.fields.as_slice());
    let card_loading = app.data.account_loading || app.data.stats_loading;
    frame.render_widget(FieldCard::new(items).loading(card_loading), layout.card);

    // --- Pie chart ---
    let chart_data = view.map_or(&[][..], |v| v.chart.as_slice());
    let chart_total = view.map_or(0.0, |v| v.chart_total);
    let has_data = view.is_some_and(|v| v.has_chart_data());

    let val_formatter = move |val: f64| {
        format!(
            "{}({})",
            format_token(val),
            format_percent_dec2(val * 100.0 / chart_total)
        )
    };
    let label_formatter = |slice: &ChartSlice| format_token(slice.value);

    let chart_block = create_border_block("", false);
    let chart_inner = chart_block.inner(layout.chart);
    frame.render_widget(chart_block, layout.chart);
    frame.render_widget(
        PieChart::new(chart_data, &val_formatter, &label_formatter)
            .colors(&CHART_COLORS)
            .height(CHART_HEIGHT)
            .min_angle(CHART_MIN_ANGLE)
            .show_legend(has_data)
            .show_values(has_data)
            .loading(app.data.account_loading),
        chart_inner,
    );

    // --- Transactions table ---
    let table_title = match &app.data.transactions {
        Some(page) => format!("Transactions ({})", page.total),
        None => "Transactions".to_string(),
    };
    let table_block = create_border_block(&table_title, false);
    let table_inner = table_block.inner(layout.table);
    frame.render_widget(table_block, layout.table);
    frame.render_widget(
        TxnTable::new(app.data.transactions.as_ref())
            .loading(app.data.transactions_loading)
            .scroll(app.txn_scroll),
        table_inner,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountDetails, MetaStats, TransactionPage};
    use crate::state::{App, StartupOptions};
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;

    fn test_app() -> App {
        App::new(StartupOptions {
            address: "pool1pageaddr".to_string(),
            ..StartupOptions::default()
        })
        .unwrap()
    }

    fn loaded_app() -> App {
        let mut app = test_app();
        app.data.set_account(AccountDetails::from_json(&json!({
            "address": "pool1pageaddr",
            "balance": 100.0,
            "delegated": 50.0,
            "unbonding": 7.5,
            "stake_reward": 2.5,
        })));
        app.data
            .set_stats(MetaStats::from_json(&json!({"current_price": 2.0})));
        app.data.set_transactions(TransactionPage::default());
        app
    }

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_account_page(app, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_loading_page_shows_placeholders() {
        let mut app = test_app();
        app.data.account_loading = true;
        app.data.transactions_loading = true;
        app.data.stats_loading = true;

        let content = render_to_string(&app, 120, 40);
        assert!(content.contains("Account Details"));
        assert!(content.contains("Loading account details..."));
        assert!(content.contains("Loading transactions..."));
    }

    #[test]
    fn test_loaded_page_shows_fields_and_totals() {
        let app = loaded_app();
        let content = render_to_string(&app, 120, 40);

        assert!(content.contains("AVAILABLE BALANCE"));
        assert!(content.contains("TOTAL AMOUNT"));
        // 2.5 + 100 + 50 = 152.5 at price 2.0
        assert!(content.contains("152.5 / $305.00"));
        assert!(content.contains("Transactions (0)"));
    }

    #[test]
    fn test_page_renders_in_narrow_terminal() {
        let app = loaded_app();
        let content = render_to_string(&app, 60, 45);

        // Same widgets, stacked layout
        assert!(content.contains("AVAILABLE BALANCE"));
        assert!(content.contains("No transactions"));
    }

    #[test]
    fn test_zero_account_hides_chart_legend() {
        let mut app = test_app();
        app.data.set_account(AccountDetails::from_json(&json!({
            "address": "pool1pageaddr",
            "balance": 0,
            "delegated": 0,
            "unbonding": 0,
            "stake_reward": 0,
        })));

        let content = render_to_string(&app, 120, 40);
        // The placeholder slice is drawn but never labeled
        assert!(!content.contains("Not data"));
    }
}
