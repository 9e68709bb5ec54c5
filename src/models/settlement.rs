//! The settlement transfer model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single directed payment that reduces one debtor's and one creditor's
/// outstanding balance.
///
/// Ids refer either to a person or to a merged couple unit; the display
/// names are carried alongside so callers can render transfers without a
/// roster lookup (a couple's name is both members joined with `" & "`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// Id of the paying unit (the debtor).
    pub from: String,
    /// Id of the receiving unit (the creditor).
    pub to: String,
    /// Display name of the paying unit.
    pub from_name: String,
    /// Display name of the receiving unit.
    pub to_name: String,
    /// The transfer amount, positive and rounded to cents.
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_settlement_serde_round_trip() {
        let settlement = Settlement {
            from: "p_002".to_string(),
            to: "couple_p_001_p_003".to_string(),
            from_name: "Bob".to_string(),
            to_name: "Alice & Cara".to_string(),
            amount: Decimal::from_str("12.34").unwrap(),
        };

        let json = serde_json::to_string(&settlement).unwrap();
        assert!(json.contains("\"amount\":\"12.34\""));

        let deserialized: Settlement = serde_json::from_str(&json).unwrap();
        assert_eq!(settlement, deserialized);
    }
}
