//! Couple balance merging.
//!
//! This module folds the balances of paired people into single settlement
//! units so a couple pays and receives as one party.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::models::Roster;

/// One entry in the merged balance list: a solo person or a couple acting
/// as a single settlement party.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementUnit {
    /// The person id, or a synthesized couple id.
    pub id: String,
    /// The person's name, or both members' names joined with `" & "`.
    pub display_name: String,
    /// The unit's net balance: paid minus owed, summed over its members.
    pub balance: Decimal,
}

/// Synthesizes the id of a couple unit from its two member ids.
///
/// The result is order-independent: the member ids are arranged
/// lexicographically, so the same couple always yields the same id within
/// one computation regardless of roster order.
///
/// # Examples
///
/// ```
/// use bill_engine::calculation::couple_id;
///
/// assert_eq!(couple_id("p_002", "p_001"), "couple_p_001_p_002");
/// assert_eq!(couple_id("p_001", "p_002"), "couple_p_001_p_002");
/// ```
pub fn couple_id(a: &str, b: &str) -> String {
    if a <= b {
        format!("couple_{}_{}", a, b)
    } else {
        format!("couple_{}_{}", b, a)
    }
}

/// Merges paired people's balances into single settlement units.
///
/// Walks the roster in order. A person with a partner produces one
/// combined unit carrying the sum of both balances and a joined display
/// name, and both members are marked visited; an unpaired person carries
/// through unchanged. Every roster member ends up represented in exactly
/// one output unit. Missing balance entries count as zero.
///
/// # Arguments
///
/// * `roster` - The bill participants and their pairing table
/// * `balances` - Net balance (paid minus owed) per person id
pub fn merge_couples(roster: &Roster, balances: &HashMap<String, Decimal>) -> Vec<SettlementUnit> {
    let mut units = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();

    for person in roster.people() {
        if visited.contains(person.id.as_str()) {
            continue;
        }
        visited.insert(&person.id);

        let balance = balances.get(&person.id).copied().unwrap_or(Decimal::ZERO);

        let partner = roster
            .partner_of(&person.id)
            .and_then(|partner_id| roster.person(partner_id));
        match partner {
            Some(partner) => {
                visited.insert(&partner.id);
                let partner_balance = balances.get(&partner.id).copied().unwrap_or(Decimal::ZERO);
                units.push(SettlementUnit {
                    id: couple_id(&person.id, &partner.id),
                    display_name: format!("{} & {}", person.name, partner.name),
                    balance: balance + partner_balance,
                });
            }
            None => units.push(SettlementUnit {
                id: person.id.clone(),
                display_name: person.name.clone(),
                balance,
            }),
        }
    }

    units
}
