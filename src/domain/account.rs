//! Account types for the explorer API.
//!
//! The account endpoint returns a flat object whose values are either
//! numbers or strings, depending on the backend version (some deployments
//! serialize balances as decimal strings). [`FieldValue`] keeps that
//! distinction intact so display code can decide how to treat each field.

use serde_json::Value;

// ============================================================================
// Field Value
// ============================================================================

/// A single account response value: numeric, or free-form text.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A numeric value (or one that arrived as a JSON number).
    Number(f64),
    /// A non-numeric value, passed through to display unchanged.
    Text(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl FieldValue {
    /// Converts a raw JSON value into a `FieldValue`.
    ///
    /// Numbers map to `Number`, strings to `Text`, and `null` to zero
    /// (absent balances are reported as `null` by older backends).
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(0.0)),
            Value::String(s) => Self::Text(s.clone()),
            Value::Bool(b) => Self::Number(if *b { 1.0 } else { 0.0 }),
            Value::Null => Self::Number(0.0),
            other => Self::Text(other.to_string()),
        }
    }

    /// Returns the numeric interpretation of this value, if it has one.
    ///
    /// Numeric strings parse ("12.5" is 12.5), blank strings count as zero,
    /// and anything unparseable is non-numeric.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Number(_) => None,
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Some(0.0);
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
    }

    /// Returns `true` if this value has a numeric interpretation.
    #[must_use]
    #[allow(dead_code)] // Part of FieldValue public API
    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

// ============================================================================
// Account Details
// ============================================================================

/// Account details as returned by the account lookup endpoint.
///
/// One slot per balance category; `address` travels through the same
/// value type so the display layer can apply one uniform formatting rule
/// to every field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccountDetails {
    /// The account address.
    pub address: FieldValue,
    /// Spendable balance.
    pub balance: FieldValue,
    /// Amount delegated to validators.
    pub delegated: FieldValue,
    /// Amount in the unbonding period.
    pub unbonding: FieldValue,
    /// Accumulated staking rewards.
    pub stake_reward: FieldValue,
}

impl AccountDetails {
    /// Parses account details from the raw JSON response object.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        Self {
            address: FieldValue::from_value(&value["address"]),
            balance: FieldValue::from_value(&value["balance"]),
            delegated: FieldValue::from_value(&value["delegated"]),
            unbonding: FieldValue::from_value(&value["unbonding"]),
            stake_reward: FieldValue::from_value(&value["stake_reward"]),
        }
    }

    /// Returns `(key, value)` pairs for every response field, in order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &FieldValue); 5] {
        [
            ("address", &self.address),
            ("balance", &self.balance),
            ("delegated", &self.delegated),
            ("unbonding", &self.unbonding),
            ("stake_reward", &self.stake_reward),
        ]
    }

    /// Looks up a response field by key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Sum of every numeric response field.
    ///
    /// This is the chart-emptiness total: it counts `unbonding`, unlike the
    /// displayed "total amount" row which sums only the three staked
    /// categories. The two can legitimately differ.
    #[must_use]
    pub fn numeric_total(&self) -> f64 {
        self.fields()
            .into_iter()
            .filter_map(|(_, v)| v.as_number())
            .sum()
    }

    /// The address as display text.
    #[must_use]
    #[allow(dead_code)] // Part of AccountDetails public API
    pub fn address_text(&self) -> String {
        self.address.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value_from_json_number() {
        let v = FieldValue::from_value(&json!(12.5));
        assert_eq!(v, FieldValue::Number(12.5));
        assert_eq!(v.as_number(), Some(12.5));
    }

    #[test]
    fn test_field_value_numeric_string_parses() {
        let v = FieldValue::from_value(&json!("102.75"));
        assert_eq!(v, FieldValue::Text("102.75".to_string()));
        assert_eq!(v.as_number(), Some(102.75));
        assert!(v.is_numeric());
    }

    #[test]
    fn test_field_value_text_is_not_numeric() {
        let v = FieldValue::from_value(&json!("cosmos1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu"));
        assert_eq!(v.as_number(), None);
        assert!(!v.is_numeric());
    }

    #[test]
    fn test_field_value_blank_string_counts_as_zero() {
        assert_eq!(FieldValue::Text("  ".to_string()).as_number(), Some(0.0));
        assert_eq!(FieldValue::Text(String::new()).as_number(), Some(0.0));
    }

    #[test]
    fn test_field_value_null_is_zero() {
        assert_eq!(
            FieldValue::from_value(&Value::Null),
            FieldValue::Number(0.0)
        );
    }

    #[test]
    fn test_account_details_from_json() {
        let details = AccountDetails::from_json(&json!({
            "address": "pool1xyz",
            "balance": 100.0,
            "delegated": "50",
            "unbonding": 7.5,
            "stake_reward": 2.5,
        }));

        assert_eq!(details.address, FieldValue::Text("pool1xyz".to_string()));
        assert_eq!(details.balance.as_number(), Some(100.0));
        assert_eq!(details.delegated.as_number(), Some(50.0));
        assert_eq!(details.address_text(), "pool1xyz");
    }

    #[test]
    fn test_numeric_total_skips_address() {
        let details = AccountDetails::from_json(&json!({
            "address": "pool1xyz",
            "balance": 100.0,
            "delegated": 50.0,
            "unbonding": 7.5,
            "stake_reward": 2.5,
        }));

        // 100 + 50 + 7.5 + 2.5; the non-numeric address contributes nothing
        assert!((details.numeric_total() - 160.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_numeric_total_counts_unbonding() {
        // The generic total includes unbonding even though the displayed
        // "total amount" row does not.
        let details = AccountDetails::from_json(&json!({
            "address": "pool1xyz",
            "balance": 0,
            "delegated": 0,
            "unbonding": 3.0,
            "stake_reward": 0,
        }));

        assert!((details.numeric_total() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_field_lookup() {
        let details = AccountDetails::from_json(&json!({
            "address": "a",
            "balance": 1.0,
            "delegated": 2.0,
            "unbonding": 3.0,
            "stake_reward": 4.0,
        }));

        assert_eq!(details.field("delegated").unwrap().as_number(), Some(2.0));
        assert!(details.field("missing").is_none());
    }
}
