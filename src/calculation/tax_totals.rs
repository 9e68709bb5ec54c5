//! Tax-aware item totalling.
//!
//! This module computes the taxed total of a single bill item and the
//! aggregate subtotal, tax, and total over a list of items.

use rust_decimal::Decimal;

use crate::config::TaxRates;
use crate::models::{BillItem, BillTotals, TaxCategory};

/// Computes the taxed total of a single item.
///
/// If the item is tax-included, the price stands as entered. Otherwise the
/// price is grossed up by the primary rate, plus the container surcharge
/// for container items. Negative and zero prices pass through
/// arithmetically; validation, if any, belongs to the input-producing
/// collaborator.
///
/// # Arguments
///
/// * `item` - The bill item to total
/// * `rates` - The flat rates of the active tax jurisdiction
///
/// # Examples
///
/// ```
/// use bill_engine::calculation::item_total;
/// use bill_engine::config::TaxRates;
/// use bill_engine::models::{BillItem, TaxCategory};
/// use rust_decimal::Decimal;
///
/// let item = BillItem::new("i_001", "Ramen", Decimal::from(20), TaxCategory::Standard);
/// assert_eq!(item_total(&item, &TaxRates::default()), Decimal::new(21, 0));
/// ```
pub fn item_total(item: &BillItem, rates: &TaxRates) -> Decimal {
    if item.is_tax_included {
        return item.price;
    }

    let surcharge = match item.tax_category {
        TaxCategory::Standard => Decimal::ZERO,
        TaxCategory::Container => rates.container_surcharge,
    };

    item.price * (Decimal::ONE + rates.primary + surcharge)
}

/// Computes the aggregate subtotal, tax, and total over all items.
///
/// `subtotal` sums the entered prices; `tax` sums only the tax added on
/// top (tax-included items contribute nothing, their tax being embedded
/// rather than separately reported); `total` sums the taxed item totals.
///
/// # Arguments
///
/// * `items` - The bill items to aggregate
/// * `rates` - The flat rates of the active tax jurisdiction
pub fn aggregate_totals(items: &[BillItem], rates: &TaxRates) -> BillTotals {
    let mut subtotal = Decimal::ZERO;
    let mut tax = Decimal::ZERO;

    for item in items {
        subtotal += item.price;
        if !item.is_tax_included {
            tax += item.price * rates.primary;
            if item.tax_category == TaxCategory::Container {
                tax += item.price * rates.container_surcharge;
            }
        }
    }

    BillTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}
