//! View-model derivation for the account page.
//!
//! This module turns the raw account response plus the live price into the
//! two display datasets the page renders: the labeled field list for the
//! card, and the slice list for the pie chart. Derivation is pure; the
//! state layer re-runs it whenever the account response or the price
//! changes and stores the result.

pub mod format;

use crate::constants::NOT_DATA_VALUE;
use crate::domain::AccountDetails;

use format::{format_token, format_usd};

// ============================================================================
// Field and Slice Catalogs
// ============================================================================

/// Card rows, in display order. `total_amount` is synthetic: it isn't a
/// response field but is computed from three of them.
const ACCOUNT_FIELDS: [(&str, &str); 6] = [
    ("address", "Address"),
    ("balance", "Available Balance"),
    ("delegated", "Delegated"),
    ("unbonding", "Unbonding"),
    ("stake_reward", "Staking Rewards"),
    ("total_amount", "Total amount"),
];

/// Chart slices: the fixed subset of balance categories that gets charted.
const CHART_FIELDS: [(&str, &str); 4] = [
    ("balance", "Available Balance"),
    ("delegated", "Delegated"),
    ("unbonding", "Unbonding"),
    ("stake_reward", "Staking Rewards"),
];

// ============================================================================
// View-Model Types
// ============================================================================

/// One labeled row of the account card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayField {
    /// Stable field key.
    pub key: &'static str,
    /// Upper-cased display label.
    pub label: String,
    /// Formatted display value.
    pub value: String,
}

/// One wedge of the pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    /// Stable slice key.
    pub key: &'static str,
    /// Legend label.
    pub label: String,
    /// Slice title.
    pub title: String,
    /// Raw numeric value backing the slice.
    pub value: f64,
}

/// Everything the account page renders, derived from one response + price.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccountView {
    /// Labeled rows for the field card.
    pub fields: Vec<DisplayField>,
    /// Slices for the pie chart.
    pub chart: Vec<ChartSlice>,
    /// Sum of every numeric response field; the percent denominator and
    /// the chart-emptiness signal. Zero means the chart shows the
    /// synthetic placeholder slice.
    pub chart_total: f64,
}

impl AccountView {
    /// Returns `true` if the chart has real (non-placeholder) data.
    #[must_use]
    pub fn has_chart_data(&self) -> bool {
        self.chart_total != 0.0
    }
}

// ============================================================================
// Derivation
// ============================================================================

/// Derives the account view-model from a response and the current price.
///
/// Display policy:
/// - labels are upper-cased;
/// - numeric-looking values format as token amounts, anything else passes
///   through unchanged;
/// - the synthetic total row formats as `"<token> / <usd>"`, where the
///   token total sums exactly `stake_reward + balance + delegated` (not
///   the generic total used for chart emptiness — the two differ whenever
///   `unbonding` is nonzero).
#[must_use]
pub fn derive_account_view(resp: &AccountDetails, price: f64) -> AccountView {
    let chart_total = resp.numeric_total();

    let fields = ACCOUNT_FIELDS
        .iter()
        .map(|&(key, label)| {
            if key == "total_amount" {
                let total = staked_total(resp);
                DisplayField {
                    key,
                    label: label.to_uppercase(),
                    value: format!("{} / {}", format_token(total), format_usd(total * price)),
                }
            } else {
                let value = resp
                    .field(key)
                    .map(|v| match v.as_number() {
                        Some(n) => format_token(n),
                        None => v.to_string(),
                    })
                    .unwrap_or_default();
                DisplayField {
                    key,
                    label: label.to_uppercase(),
                    value,
                }
            }
        })
        .collect();

    let chart = if chart_total == 0.0 {
        vec![ChartSlice {
            key: "not_data",
            label: "Not data".to_string(),
            title: "Not data".to_string(),
            value: NOT_DATA_VALUE,
        }]
    } else {
        CHART_FIELDS
            .iter()
            .map(|&(key, label)| ChartSlice {
                key,
                label: label.to_string(),
                title: label.to_string(),
                value: resp
                    .field(key)
                    .and_then(|v| v.as_number())
                    .unwrap_or(0.0),
            })
            .collect()
    };

    AccountView {
        fields,
        chart,
        chart_total,
    }
}

/// The three-category staked total behind the "Total amount" row.
fn staked_total(resp: &AccountDetails) -> f64 {
    [&resp.stake_reward, &resp.balance, &resp.delegated]
        .into_iter()
        .map(|v| v.as_number().unwrap_or(0.0))
        .sum()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account(balance: f64, delegated: f64, unbonding: f64, stake_reward: f64) -> AccountDetails {
        AccountDetails::from_json(&json!({
            "address": "pool1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu",
            "balance": balance,
            "delegated": delegated,
            "unbonding": unbonding,
            "stake_reward": stake_reward,
        }))
    }

    #[test]
    fn test_zero_account_collapses_chart_to_placeholder() {
        let view = derive_account_view(&account(0.0, 0.0, 0.0, 0.0), 1.5);

        assert_eq!(view.chart.len(), 1);
        let slice = &view.chart[0];
        assert_eq!(slice.key, "not_data");
        assert_eq!(slice.label, "Not data");
        assert!(slice.value > 0.0 && slice.value < 1e-6);
        assert!(!view.has_chart_data());
    }

    #[test]
    fn test_nonzero_account_charts_four_raw_slices() {
        let view = derive_account_view(&account(100.0, 50.0, 7.5, 2.5), 1.5);

        assert_eq!(view.chart.len(), 4);
        let expected = [
            ("balance", 100.0),
            ("delegated", 50.0),
            ("unbonding", 7.5),
            ("stake_reward", 2.5),
        ];
        for (slice, (key, value)) in view.chart.iter().zip(expected) {
            assert_eq!(slice.key, key);
            assert!((slice.value - value).abs() < f64::EPSILON, "key={key}");
        }
        assert!(view.has_chart_data());
    }

    #[test]
    fn test_total_amount_row_sums_three_categories() {
        // 2.5 + 100 + 50 = 152.5 staked; unbonding excluded
        let view = derive_account_view(&account(100.0, 50.0, 7.5, 2.5), 2.0);

        let total_row = view.fields.iter().find(|f| f.key == "total_amount").unwrap();
        assert_eq!(total_row.label, "TOTAL AMOUNT");
        assert_eq!(total_row.value, "152.5 / $305.00");
    }

    #[test]
    fn test_two_totals_differ_when_unbonding_nonzero() {
        let resp = account(100.0, 50.0, 7.5, 2.5);
        let view = derive_account_view(&resp, 0.0);

        // Generic total counts unbonding; the displayed total does not.
        assert!((view.chart_total - 160.0).abs() < f64::EPSILON);
        let total_row = view.fields.iter().find(|f| f.key == "total_amount").unwrap();
        assert!(total_row.value.starts_with("152.5"));
    }

    #[test]
    fn test_labels_are_upper_cased() {
        let view = derive_account_view(&account(1.0, 0.0, 0.0, 0.0), 0.0);

        let labels: Vec<&str> = view.fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "ADDRESS",
                "AVAILABLE BALANCE",
                "DELEGATED",
                "UNBONDING",
                "STAKING REWARDS",
                "TOTAL AMOUNT",
            ]
        );
    }

    #[test]
    fn test_unresolved_price_computes_zero_usd() {
        let view = derive_account_view(&account(100.0, 50.0, 0.0, 2.5), 0.0);

        let total_row = view.fields.iter().find(|f| f.key == "total_amount").unwrap();
        assert_eq!(total_row.value, "152.5 / $0.00");
    }

    #[test]
    fn test_non_numeric_value_passes_through() {
        let view = derive_account_view(&account(100.0, 0.0, 0.0, 0.0), 0.0);

        let address_row = view.fields.iter().find(|f| f.key == "address").unwrap();
        assert_eq!(address_row.value, "pool1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu");
    }

    #[test]
    fn test_numeric_string_formats_as_token() {
        let resp = AccountDetails::from_json(&json!({
            "address": "pool1xyz",
            "balance": "1234.5",
            "delegated": 0,
            "unbonding": 0,
            "stake_reward": 0,
        }));
        let view = derive_account_view(&resp, 0.0);

        let balance_row = view.fields.iter().find(|f| f.key == "balance").unwrap();
        assert_eq!(balance_row.value, "1,234.5");
    }
}
