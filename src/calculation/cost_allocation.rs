//! Proportional per-person cost allocation.
//!
//! This module distributes each item's taxed total across the people
//! sharing it, then spreads the net tip/discount adjustment across all
//! people in proportion to their pre-adjustment share of the whole bill.

use rust_decimal::Decimal;

use crate::config::TaxRates;
use crate::models::{BillItem, CostMap, Roster};

use super::tax_totals::{aggregate_totals, item_total};

/// Allocates the bill's costs across the roster.
///
/// Every roster member starts at zero. Each item with a non-empty sharing
/// set divides its taxed total evenly per head among its sharers (per
/// head, not per couple, and not weighted by consumption). Items with an
/// empty sharing set count toward the bill's aggregate totals but are
/// charged to nobody: the deliberate pass-through for lump-sum entries
/// that have not yet been assigned. Sharing ids that are not on the
/// roster are skipped: the per-head divisor still counts them, but their
/// share is charged to nobody.
///
/// When the bill total is positive, each person then receives
/// `(their pre-adjustment cost / bill total) × net_adjustment`. The
/// denominator is always the whole bill's total, not the sum of allocated
/// costs, so with unassigned items the proportions do not sum to 1 and
/// part of the adjustment stays undistributed. A zero bill total skips
/// the step entirely.
///
/// No rounding happens here; fractional-cent values flow on to the
/// settlement stage.
///
/// # Arguments
///
/// * `roster` - The bill participants
/// * `items` - All bill items
/// * `net_adjustment` - Tip minus discount; may be negative
/// * `rates` - The flat rates of the active tax jurisdiction
pub fn allocate_costs(
    roster: &Roster,
    items: &[BillItem],
    net_adjustment: Decimal,
    rates: &TaxRates,
) -> CostMap {
    let mut costs: CostMap = roster
        .people()
        .iter()
        .map(|p| (p.id.clone(), Decimal::ZERO))
        .collect();

    for item in items {
        if item.shared_with.is_empty() {
            continue;
        }
        let share = item_total(item, rates) / Decimal::from(item.shared_with.len() as u64);
        for person_id in &item.shared_with {
            if let Some(cost) = costs.get_mut(person_id) {
                *cost += share;
            }
        }
    }

    let bill_total = aggregate_totals(items, rates).total;
    if bill_total > Decimal::ZERO {
        for cost in costs.values_mut() {
            let proportion = *cost / bill_total;
            *cost += proportion * net_adjustment;
        }
    }

    costs
}
