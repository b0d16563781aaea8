//! Message processing: applying fetch results to the data state.

use super::{App, AppMessage};

impl App {
    /// Drains pending messages from background fetch tasks.
    ///
    /// Each message updates exactly one response slot; failures only clear
    /// the owning loading flag and record the error line. There is no
    /// branching on error content beyond that.
    pub(super) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.apply_message(message);
        }
    }

    fn apply_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::AccountDetailsLoaded(details) => {
                self.data.set_account(*details);
            }
            AppMessage::AccountDetailsFailed(error) => {
                tracing::warn!("Account details fetch failed: {error}");
                self.data.account_loading = false;
                self.last_error = Some(error);
            }
            AppMessage::TransactionsLoaded(page) => {
                self.data.set_transactions(page);
            }
            AppMessage::TransactionsFailed(error) => {
                tracing::warn!("Transaction fetch failed: {error}");
                self.data.transactions_loading = false;
                self.last_error = Some(error);
            }
            AppMessage::StatsLoaded(stats) => {
                self.data.set_stats(stats);
            }
            AppMessage::StatsFailed(error) => {
                tracing::warn!("Meta stats fetch failed: {error}");
                self.data.stats_loading = false;
                self.last_error = Some(error);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::{App, AppMessage, StartupOptions};
    use crate::domain::{AccountDetails, MetaStats, TransactionPage};
    use serde_json::json;

    fn test_app() -> App {
        App::new(StartupOptions {
            address: "pool1testaddress".to_string(),
            network: None,
            seed: None,
        })
        .unwrap()
    }

    fn test_details() -> AccountDetails {
        AccountDetails::from_json(&json!({
            "address": "pool1testaddress",
            "balance": 10.0,
            "delegated": 5.0,
            "unbonding": 0.0,
            "stake_reward": 1.0,
        }))
    }

    #[test]
    fn test_messages_fill_slots_in_any_order() {
        let mut app = test_app();
        app.data.account_loading = true;
        app.data.transactions_loading = true;
        app.data.stats_loading = true;

        // Stats first, then transactions, then the account: order must
        // not matter.
        app.message_tx
            .send(AppMessage::StatsLoaded(MetaStats::from_json(
                &json!({"current_price": 3.0}),
            )))
            .unwrap();
        app.message_tx
            .send(AppMessage::TransactionsLoaded(TransactionPage::default()))
            .unwrap();
        app.message_tx
            .send(AppMessage::AccountDetailsLoaded(Box::new(test_details())))
            .unwrap();

        app.process_messages();

        assert!(!app.data.account_loading);
        assert!(!app.data.transactions_loading);
        assert!(!app.data.stats_loading);
        assert!(app.data.view.is_some());

        // 1 + 10 + 5 = 16 staked, at price 3.0
        let view = app.data.view.as_ref().unwrap();
        let total = view.fields.iter().find(|f| f.key == "total_amount").unwrap();
        assert_eq!(total.value, "16 / $48.00");
    }

    #[test]
    fn test_failure_only_clears_its_own_flag() {
        let mut app = test_app();
        app.data.account_loading = true;
        app.data.transactions_loading = true;

        app.message_tx
            .send(AppMessage::TransactionsFailed("HTTP 500".to_string()))
            .unwrap();
        app.process_messages();

        assert!(app.data.account_loading);
        assert!(!app.data.transactions_loading);
        assert_eq!(app.last_error.as_deref(), Some("HTTP 500"));
        assert!(app.data.transactions.is_none());
    }

    #[test]
    fn test_stats_failure_leaves_price_at_zero() {
        let mut app = test_app();
        app.data.stats_loading = true;

        app.message_tx
            .send(AppMessage::StatsFailed("timeout".to_string()))
            .unwrap();
        app.message_tx
            .send(AppMessage::AccountDetailsLoaded(Box::new(test_details())))
            .unwrap();
        app.process_messages();

        // USD equivalents compute with price 0, not an error
        let view = app.data.view.as_ref().unwrap();
        let total = view.fields.iter().find(|f| f.key == "total_amount").unwrap();
        assert!(total.value.ends_with("$0.00"));
    }
}
