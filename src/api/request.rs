//! Request types for the Bill Settlement Engine API.
//!
//! This module defines the JSON request structures for the `/settle`
//! endpoint.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{BillItem, DiscountSpec, Person, Roster, TaxCategory, TipSpec};

/// Request body for the `/settle` endpoint.
///
/// Contains the full input snapshot the engine needs: the roster, the
/// couple pairings, the bill items, the payments made, and the tip and
/// discount specifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettleRequest {
    /// The bill participants.
    pub people: Vec<PersonRequest>,
    /// Couple pairings as pairs of person ids.
    #[serde(default)]
    pub couples: Vec<(String, String)>,
    /// The bill items.
    #[serde(default)]
    pub items: Vec<BillItemRequest>,
    /// Amount each person has already paid toward the bill.
    #[serde(default)]
    pub payments: HashMap<String, Decimal>,
    /// How the tip is specified. Defaults to no tip.
    #[serde(default)]
    pub tip: TipSpec,
    /// How the discount is specified. Defaults to no discount.
    #[serde(default)]
    pub discount: DiscountSpec,
}

/// Person information in a settle request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRequest {
    /// Unique identifier for the person.
    pub id: String,
    /// Display name for the person.
    pub name: String,
}

/// Bill item information in a settle request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillItemRequest {
    /// Unique identifier for the item.
    pub id: String,
    /// Display name for the item.
    pub name: String,
    /// The pre-tax subtotal contribution.
    pub price: Decimal,
    /// Which flat rates this item draws.
    pub tax_category: TaxCategory,
    /// If true, `price` already contains tax.
    #[serde(default)]
    pub is_tax_included: bool,
    /// Ids of the people consuming this item.
    #[serde(default)]
    pub shared_with: Vec<String>,
}

impl SettleRequest {
    /// Assembles the roster from the request's people and couples.
    ///
    /// # Errors
    ///
    /// Returns the pairing-table errors: `DuplicatePerson` for repeated
    /// ids, and `PersonNotFound`, `SelfPairing`, or `AlreadyPaired` for
    /// invalid couples.
    pub fn roster(&self) -> EngineResult<Roster> {
        let mut roster = Roster::new();
        for person in &self.people {
            roster.add_person(person.clone().into())?;
        }
        for (a, b) in &self.couples {
            roster.link_partners(a, b)?;
        }
        Ok(roster)
    }
}

impl From<PersonRequest> for Person {
    fn from(req: PersonRequest) -> Self {
        Person {
            id: req.id,
            name: req.name,
        }
    }
}

impl From<BillItemRequest> for BillItem {
    fn from(req: BillItemRequest) -> Self {
        BillItem {
            id: req.id,
            name: req.name,
            price: req.price,
            tax_category: req.tax_category,
            is_tax_included: req.is_tax_included,
            shared_with: req.shared_with,
        }
    }
}
