//! The settlement engine façade.
//!
//! This module orchestrates the full computation: totals, tip and
//! discount resolution, cost allocation, balance derivation, couple
//! merging, and debt settlement. It contains no calculation logic of its
//! own.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::config::TaxConfig;
use crate::models::{BillBreakdown, BillItem, BillTotals, DiscountSpec, Roster, TipSpec};

use super::cost_allocation::allocate_costs;
use super::debt_settlement::solve_settlements;
use super::pair_merge::merge_couples;
use super::tax_totals::aggregate_totals;

/// Computes the full bill breakdown for one input snapshot.
///
/// The computation is pure, synchronous, and deterministic: identical
/// inputs always produce identical outputs, so it is safe to call on
/// every change to the inputs.
///
/// # Arguments
///
/// * `roster` - The bill participants and their couple pairings
/// * `items` - All bill items
/// * `payments` - Amount each person has already paid toward the bill
///   (missing entries count as zero)
/// * `tip` - How the tip is specified
/// * `discount` - How the discount is specified
/// * `config` - The active tax configuration
///
/// # Examples
///
/// ```
/// use bill_engine::calculation::compute;
/// use bill_engine::config::TaxConfig;
/// use bill_engine::models::{BillItem, DiscountSpec, Person, Roster, TaxCategory, TipSpec};
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let mut roster = Roster::new();
/// roster.add_person(Person::new("a", "Alice")).unwrap();
/// roster.add_person(Person::new("b", "Bob")).unwrap();
///
/// let mut item = BillItem::new("i_001", "Ramen", Decimal::from(20), TaxCategory::Standard);
/// item.share_with_all(&roster);
///
/// let breakdown = compute(
///     &roster,
///     &[item],
///     &HashMap::new(),
///     &TipSpec::default(),
///     &DiscountSpec::default(),
///     &TaxConfig::default(),
/// );
/// assert_eq!(breakdown.grand_total, Decimal::new(2100, 2));
/// ```
pub fn compute(
    roster: &Roster,
    items: &[BillItem],
    payments: &HashMap<String, Decimal>,
    tip: &TipSpec,
    discount: &DiscountSpec,
    config: &TaxConfig,
) -> BillBreakdown {
    let rates = config.rates();

    let totals = aggregate_totals(items, rates);
    let effective_discount = resolve_discount(discount, &totals);
    let effective_tip = resolve_tip(tip, &totals, effective_discount);

    let cost_map = allocate_costs(roster, items, effective_tip - effective_discount, rates);

    let mut balances: HashMap<String, Decimal> = HashMap::new();
    for person in roster.people() {
        let paid = payments.get(&person.id).copied().unwrap_or(Decimal::ZERO);
        let owed = cost_map.get(&person.id).copied().unwrap_or(Decimal::ZERO);
        balances.insert(person.id.clone(), paid - owed);
    }

    let settlements = solve_settlements(&merge_couples(roster, &balances));
    let grand_total = totals.total + effective_tip - effective_discount;

    BillBreakdown {
        cost_map,
        totals,
        grand_total,
        settlements,
        effective_tip,
        effective_discount,
    }
}

/// Resolves the tip specification into a concrete amount.
///
/// In target-total mode the tip is whatever makes the grand total land on
/// the target figure, clamped at zero so it never turns into a hidden
/// discount.
fn resolve_tip(tip: &TipSpec, totals: &BillTotals, effective_discount: Decimal) -> Decimal {
    match tip {
        TipSpec::Amount(amount) => *amount,
        TipSpec::Percent(percent) => totals.subtotal * *percent / Decimal::ONE_HUNDRED,
        TipSpec::TargetTotal(target) => {
            (*target - totals.total + effective_discount).max(Decimal::ZERO)
        }
    }
}

/// Resolves the discount specification into a concrete amount.
fn resolve_discount(discount: &DiscountSpec, totals: &BillTotals) -> Decimal {
    match discount {
        DiscountSpec::Amount(amount) => *amount,
        DiscountSpec::Percent(percent) => totals.subtotal * *percent / Decimal::ONE_HUNDRED,
    }
}
