//! Calculation logic for the Bill Settlement Engine.
//!
//! This module contains all the calculation functions for settling a
//! shared bill, including tax-aware item totalling, aggregate bill
//! totals, proportional per-person cost allocation, couple balance
//! merging, greedy multi-party debt settlement, and the façade that
//! orchestrates the full computation.

mod cost_allocation;
mod debt_settlement;
mod engine;
mod pair_merge;
mod tax_totals;

pub use cost_allocation::allocate_costs;
pub use debt_settlement::{settlement_epsilon, solve_settlements};
pub use engine::compute;
pub use pair_merge::{SettlementUnit, couple_id, merge_couples};
pub use tax_totals::{aggregate_totals, item_total};
