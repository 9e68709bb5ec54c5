//! Bill item model and tax categories.
//!
//! This module defines the [`BillItem`] struct and the [`TaxCategory`]
//! enum describing which flat rates an item draws.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::person::Roster;

/// The tax treatment of a bill item.
///
/// The category is a closed enum rather than a free-text string so rate
/// lookups stay exhaustive and compiler-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxCategory {
    /// Draws the primary flat rate only (e.g. dine-in food, GST 5%).
    Standard,
    /// Draws the primary rate plus the container surcharge
    /// (e.g. takeout containers, GST 5% + PST 7%).
    Container,
}

/// A single line item on the shared bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillItem {
    /// Unique identifier for the item.
    pub id: String,
    /// Display name for the item.
    pub name: String,
    /// The pre-tax subtotal contribution. Negative and zero prices are
    /// accepted and pass through arithmetically.
    pub price: Decimal,
    /// Which flat rates this item draws.
    pub tax_category: TaxCategory,
    /// If true, `price` already contains tax and no further tax is added.
    #[serde(default)]
    pub is_tax_included: bool,
    /// Ids of the people consuming this item. May legally be empty: an
    /// unassigned item counts toward the bill's totals but is charged to
    /// nobody.
    #[serde(default)]
    pub shared_with: Vec<String>,
}

impl BillItem {
    /// Creates a new, unshared item with tax to be added on top.
    ///
    /// # Examples
    ///
    /// ```
    /// use bill_engine::models::{BillItem, TaxCategory};
    /// use rust_decimal::Decimal;
    ///
    /// let item = BillItem::new("i_001", "Ramen", Decimal::new(1850, 2), TaxCategory::Standard);
    /// assert!(item.shared_with.is_empty());
    /// assert!(!item.is_tax_included);
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        tax_category: TaxCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            tax_category,
            is_tax_included: false,
            shared_with: Vec::new(),
        }
    }

    /// Returns true if the given person shares this item.
    pub fn is_shared_by(&self, person_id: &str) -> bool {
        self.shared_with.iter().any(|id| id == person_id)
    }

    /// Adds the person to the sharing set if absent, removes them if
    /// present.
    pub fn toggle_sharer(&mut self, person_id: &str) {
        if self.is_shared_by(person_id) {
            self.remove_sharer(person_id);
        } else {
            self.shared_with.push(person_id.to_string());
        }
    }

    /// Strips the person from the sharing set.
    ///
    /// Called for every item when a person is removed from the roster.
    pub fn remove_sharer(&mut self, person_id: &str) {
        self.shared_with.retain(|id| id != person_id);
    }

    /// Replaces the sharing set with every person on the roster.
    pub fn share_with_all(&mut self, roster: &Roster) {
        self.shared_with = roster.people().iter().map(|p| p.id.clone()).collect();
    }
}
