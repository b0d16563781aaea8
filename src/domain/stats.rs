//! Network-wide meta statistics.

use serde_json::Value;

use super::account::FieldValue;

// ============================================================================
// Meta Stats
// ============================================================================

/// Network meta statistics from the stats endpoint.
///
/// Only the current token price matters here: it converts the displayed
/// token total into a fiat equivalent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetaStats {
    /// Current token price in USD. Arrives as a number or decimal string.
    pub current_price: FieldValue,
}

impl MetaStats {
    /// Parses meta stats from the raw JSON response.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        Self {
            current_price: FieldValue::from_value(&value["current_price"]),
        }
    }

    /// The price as a number, zero while unresolved or unparseable.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.current_price.as_number().unwrap_or(0.0)
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
    fn test_price_from_number() {
        let stats = MetaStats::from_json(&json!({"current_price": 1.42}));
        assert!((stats.price() - 1.42).abs() < f64::EPSILON);
    }

    #[test]
    fn test_price_from_string() {
        let stats = MetaStats::from_json(&json!({"current_price": "0.073"}));
        assert!((stats.price() - 0.073).abs() < f64::EPSILON);
    }

    #[test]
    fn test_price_missing_is_zero() {
        let stats = MetaStats::from_json(&json!({}));
        assert_eq!(stats.price(), 0.0);
    }

    #[test]
    fn test_price_garbage_is_zero() {
        let stats = MetaStats::from_json(&json!({"current_price": "n/a"}));
        assert_eq!(stats.price(), 0.0);
    }
}
