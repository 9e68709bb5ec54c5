//! Aggregate bill totals and the engine's computed breakdown.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::settlement::Settlement;

/// Mapping from person id to the final amount that person owes, tax and
/// adjustment inclusive. Values may carry fractional cents; rounding
/// happens only when settlement amounts are emitted.
pub type CostMap = HashMap<String, Decimal>;

/// Aggregate totals over all bill items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillTotals {
    /// Sum of all item prices before tax.
    pub subtotal: Decimal,
    /// Sum of the tax added on top of item prices. Tax-included items
    /// contribute nothing here: their tax is embedded in the price, not
    /// separately reported.
    pub tax: Decimal,
    /// Sum of all taxed item totals.
    pub total: Decimal,
}

/// The full result of one settlement computation.
///
/// Produced by [`crate::calculation::compute`]; everything a caller needs
/// to render costs, totals, and the settle-up plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillBreakdown {
    /// Final cost per person id.
    pub cost_map: CostMap,
    /// Aggregate item totals before tip and discount.
    pub totals: BillTotals,
    /// `totals.total` plus the effective tip minus the effective discount.
    pub grand_total: Decimal,
    /// The transfers that settle all balances, in emission order.
    pub settlements: Vec<Settlement>,
    /// The tip amount the engine resolved from the tip specification.
    pub effective_tip: Decimal,
    /// The discount amount the engine resolved from the discount
    /// specification.
    pub effective_discount: Decimal,
}
