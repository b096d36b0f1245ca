//! Order pricing: subtotal, volume discount, sales tax and delivery.
//!
//! Rules are applied in a fixed order:
//!
//! 1. Subtotal = sum of `price * quantity` over every order line.
//! 2. If the subtotal is strictly greater than the threshold (100.00), take
//!    10% off. A subtotal of exactly 100.00 gets no discount.
//! 3. Add 8.25% tax on the discounted amount.
//! 4. If delivery was requested, add a flat 10.00 fee (untaxed).
//!
//! All arithmetic is exact decimal. Nothing is rounded until a [`Price`] is
//! displayed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::order::OrderLines;
use crate::types::{Price, ProductId};

/// Errors that can occur while pricing an order.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// An order line refers to a product the catalog does not have.
    #[error("order references unknown product id {0}")]
    UnknownProduct(ProductId),
    /// An amount exceeded the range of a decimal.
    #[error("order total is too large to compute")]
    Overflow,
}

/// Discount, tax and delivery parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRules {
    /// Subtotals strictly above this get the discount.
    pub discount_threshold: Price,
    /// Fraction taken off, e.g. `0.10`.
    pub discount_rate: Decimal,
    /// Fraction added as tax, e.g. `0.0825`.
    pub tax_rate: Decimal,
    /// Flat fee added after tax when delivery is requested.
    pub delivery_fee: Price,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            discount_threshold: Price::from_cents(10_000),
            discount_rate: Decimal::new(10, 2),
            tax_rate: Decimal::new(825, 4),
            delivery_fee: Price::from_cents(1_000),
        }
    }
}

/// Every intermediate amount of a priced order.
///
/// `subtotal - discount + tax + delivery_fee == total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub subtotal: Price,
    pub discount: Price,
    pub tax: Price,
    pub delivery_fee: Price,
    pub total: Price,
}

impl PricingRules {
    /// Price `lines` against `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::UnknownProduct`] if any line names a product id
    /// that is not in `catalog`, and [`PricingError::Overflow`] if an amount
    /// does not fit in a decimal.
    pub fn breakdown(
        &self,
        lines: &OrderLines,
        catalog: &Catalog,
        delivery: bool,
    ) -> Result<PriceBreakdown, PricingError> {
        let subtotal = lines.iter().try_fold(Price::ZERO, |acc, (id, quantity)| {
            let product = catalog.get(id).ok_or(PricingError::UnknownProduct(id))?;
            product
                .price
                .checked_mul(quantity.as_decimal())
                .and_then(|line| acc.checked_add(line))
                .ok_or(PricingError::Overflow)
        })?;

        let discount = if subtotal > self.discount_threshold {
            subtotal
                .checked_mul(self.discount_rate)
                .ok_or(PricingError::Overflow)?
        } else {
            Price::ZERO
        };
        let discounted = Price::new(subtotal.amount() - discount.amount());

        let tax = discounted
            .checked_mul(self.tax_rate)
            .ok_or(PricingError::Overflow)?;
        let taxed = discounted
            .checked_mul(Decimal::ONE + self.tax_rate)
            .ok_or(PricingError::Overflow)?;

        let delivery_fee = if delivery {
            self.delivery_fee
        } else {
            Price::ZERO
        };

        Ok(PriceBreakdown {
            subtotal,
            discount,
            tax,
            delivery_fee,
            total: taxed
                .checked_add(delivery_fee)
                .ok_or(PricingError::Overflow)?,
        })
    }

    /// Final amount for `lines`.
    ///
    /// # Errors
    ///
    /// See [`PricingRules::breakdown`].
    pub fn total(
        &self,
        lines: &OrderLines,
        catalog: &Catalog,
        delivery: bool,
    ) -> Result<Price, PricingError> {
        self.breakdown(lines, catalog, delivery).map(|b| b.total)
    }
}

/// Final amount for `lines` under the standard [`PricingRules`].
///
/// ```
/// use order_desk_core::{Catalog, OrderLines, ProductId, Quantity, calculate_total};
///
/// let mut lines = OrderLines::new();
/// lines.set(ProductId::new(1), Quantity::new(2).unwrap());
/// lines.set(ProductId::new(3), Quantity::new(1).unwrap());
///
/// let total = calculate_total(&lines, &Catalog::standard(), true).unwrap();
/// assert_eq!(total.display(), "$118.25");
/// ```
///
/// # Errors
///
/// Returns [`PricingError::UnknownProduct`] if any line names a product id
/// that is not in `catalog`.
pub fn calculate_total(
    lines: &OrderLines,
    catalog: &Catalog,
    delivery: bool,
) -> Result<Price, PricingError> {
    PricingRules::default().total(lines, catalog, delivery)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::types::Quantity;

    fn lines(entries: &[(u32, u32)]) -> OrderLines {
        entries
            .iter()
            .map(|&(id, n)| (ProductId::new(id), Quantity::new(n).unwrap()))
            .collect()
    }

    fn dec(num: i64, scale: u32) -> Decimal {
        Decimal::new(num, scale)
    }

    #[test]
    fn test_subtotal_of_exactly_100_gets_no_discount() {
        let catalog = Catalog::standard();
        let order = lines(&[(1, 2), (3, 1)]);

        let without = calculate_total(&order, &catalog, false).unwrap();
        assert_eq!(without.amount(), dec(10825, 2));

        let with = calculate_total(&order, &catalog, true).unwrap();
        assert_eq!(with.amount(), dec(11825, 2));
        assert_eq!(with.display(), "$118.25");
    }

    #[test]
    fn test_discount_then_tax() {
        let breakdown = PricingRules::default()
            .breakdown(&lines(&[(3, 3)]), &Catalog::standard(), false)
            .unwrap();

        assert_eq!(breakdown.subtotal.amount(), dec(150, 0));
        assert_eq!(breakdown.discount.amount(), dec(15, 0));
        assert_eq!(breakdown.tax.amount(), dec(111375, 4));
        assert_eq!(breakdown.delivery_fee, Price::ZERO);
        assert_eq!(breakdown.total.amount(), dec(1461375, 4));
        assert_eq!(breakdown.total.display(), "$146.14");
    }

    #[test]
    fn test_delivery_fee_is_not_taxed() {
        let catalog = Catalog::standard();
        let order = lines(&[(5, 1)]);
        let rules = PricingRules::default();

        let pickup = rules.total(&order, &catalog, false).unwrap();
        let delivered = rules.breakdown(&order, &catalog, true).unwrap();

        assert_eq!(delivered.delivery_fee, Price::from_cents(1_000));
        assert_eq!(delivered.total.amount() - pickup.amount(), dec(10, 0));
    }

    #[test]
    fn test_just_over_threshold_is_discounted() {
        let catalog = Catalog::new(vec![Product::new(
            ProductId::new(1),
            "Penny",
            Price::from_cents(10_001),
        )])
        .unwrap();

        let breakdown = PricingRules::default()
            .breakdown(&lines(&[(1, 1)]), &catalog, false)
            .unwrap();
        assert_eq!(breakdown.discount.amount(), dec(100_010, 4));
    }

    #[test]
    fn test_empty_order() {
        let catalog = Catalog::standard();
        let empty = OrderLines::new();

        assert_eq!(
            calculate_total(&empty, &catalog, false).unwrap(),
            Price::ZERO
        );
        assert_eq!(
            calculate_total(&empty, &catalog, true).unwrap().display(),
            "$10.00"
        );
    }

    #[test]
    fn test_unknown_product_is_an_error() {
        let order = lines(&[(1, 1), (9, 1)]);
        let result = calculate_total(&order, &Catalog::standard(), false);
        assert_eq!(result, Err(PricingError::UnknownProduct(ProductId::new(9))));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let catalog = Catalog::new(vec![Product::new(
            ProductId::new(1),
            "Everything",
            Price::new(Decimal::MAX),
        )])
        .unwrap();

        let result = calculate_total(&lines(&[(1, 2)]), &catalog, false);
        assert_eq!(result, Err(PricingError::Overflow));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let catalog = Catalog::standard();
        let order = lines(&[(2, 4), (4, 3)]);

        let first = calculate_total(&order, &catalog, true).unwrap();
        let second = calculate_total(&order, &catalog, true).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_breakdown_parts_sum_to_total() {
        let order = lines(&[(1, 3), (2, 2), (4, 1)]);
        let b = PricingRules::default()
            .breakdown(&order, &Catalog::standard(), true)
            .unwrap();
        let sum = b.subtotal.amount() - b.discount.amount()
            + b.tax.amount()
            + b.delivery_fee.amount();
        assert_eq!(sum, b.total.amount());
    }
}
