//! Greedy multi-party debt settlement.
//!
//! This module turns a set of net balances into an ordered list of
//! payer-to-payee transfers that zero out all balances. It matches the
//! largest creditor against the largest debtor at each step: a practical
//! heuristic that keeps transfer counts low, not a provably
//! minimal-transaction solver (minimal-transaction settlement is a harder
//! combinatorial problem).

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Settlement;

use super::pair_merge::SettlementUnit;

/// The 1-cent epsilon that absorbs floating-point noise.
///
/// Balances within one cent of zero are treated as already settled, and
/// no transfer at or below one cent is ever emitted.
pub fn settlement_epsilon() -> Decimal {
    Decimal::new(1, 2)
}

/// Produces the transfers that settle all balances.
///
/// Creditors (balance above the epsilon) are sorted largest-surplus
/// first, debtors (balance below the negative epsilon) largest-deficit
/// first, and the two lists are walked with cursors: each step transfers
/// the smaller of the current creditor's remaining surplus and the
/// current debtor's remaining deficit, emitting a [`Settlement`] rounded
/// to cents whenever the transfer exceeds the epsilon. Ties keep their
/// unit order, so identical inputs always produce identical output.
///
/// For balance sets summing to zero, each unit's emitted transfers add up
/// to its original surplus or deficit within rounding tolerance, modulo
/// the epsilon-discarded dust.
///
/// # Arguments
///
/// * `units` - Net balances per settlement unit, typically the output of
///   [`super::merge_couples`]
///
/// # Examples
///
/// ```
/// use bill_engine::calculation::{solve_settlements, SettlementUnit};
/// use rust_decimal::Decimal;
///
/// let units = vec![
///     SettlementUnit { id: "a".into(), display_name: "Alice".into(), balance: Decimal::from(15) },
///     SettlementUnit { id: "b".into(), display_name: "Bob".into(), balance: Decimal::from(-5) },
///     SettlementUnit { id: "c".into(), display_name: "Cara".into(), balance: Decimal::from(-10) },
/// ];
///
/// let settlements = solve_settlements(&units);
/// assert_eq!(settlements.len(), 2);
/// assert_eq!(settlements[0].from, "c");
/// assert_eq!(settlements[0].to, "a");
/// ```
pub fn solve_settlements(units: &[SettlementUnit]) -> Vec<Settlement> {
    let epsilon = settlement_epsilon();

    let mut creditors: Vec<&SettlementUnit> =
        units.iter().filter(|u| u.balance > epsilon).collect();
    creditors.sort_by(|a, b| b.balance.cmp(&a.balance));

    let mut debtors: Vec<&SettlementUnit> =
        units.iter().filter(|u| u.balance < -epsilon).collect();
    debtors.sort_by(|a, b| a.balance.cmp(&b.balance));

    let mut credit_remaining: Vec<Decimal> = creditors.iter().map(|u| u.balance).collect();
    let mut debit_remaining: Vec<Decimal> = debtors.iter().map(|u| u.balance).collect();

    let mut settlements = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < creditors.len() && j < debtors.len() {
        let amount = credit_remaining[i].min(-debit_remaining[j]);

        if amount > epsilon {
            settlements.push(Settlement {
                from: debtors[j].id.clone(),
                to: creditors[i].id.clone(),
                from_name: debtors[j].display_name.clone(),
                to_name: creditors[i].display_name.clone(),
                amount: amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            });
        }

        credit_remaining[i] -= amount;
        debit_remaining[j] += amount;

        if credit_remaining[i] < epsilon {
            i += 1;
        }
        if debit_remaining[j] > -epsilon {
            j += 1;
        }
    }

    settlements
}
