//! Tip and discount specifications.
//!
//! This module defines how the caller describes the bill-level adjustment:
//! a tip and a discount, each in one of a closed set of modes. The engine
//! resolves both into concrete amounts and spreads the net adjustment
//! (tip minus discount) proportionally across participants.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the tip is specified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum TipSpec {
    /// A fixed tip amount.
    Amount(Decimal),
    /// A percentage of the bill's pre-tax subtotal (15 means 15%).
    Percent(Decimal),
    /// Solve for the tip that makes the grand total equal this target
    /// figure, as read off the bottom of the printed bill. The resolved
    /// tip never goes below zero.
    TargetTotal(Decimal),
}

impl Default for TipSpec {
    /// No tip.
    fn default() -> Self {
        Self::Amount(Decimal::ZERO)
    }
}

/// How the discount is specified.
///
/// Unlike the tip, the discount has no target-total mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum DiscountSpec {
    /// A fixed discount amount.
    Amount(Decimal),
    /// A percentage of the bill's pre-tax subtotal (10 means 10%).
    Percent(Decimal),
}

impl Default for DiscountSpec {
    /// No discount.
    fn default() -> Self {
        Self::Amount(Decimal::ZERO)
    }
}
