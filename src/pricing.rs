//! Pricing

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// A monetary amount in one of the ISO currencies.
pub type Price = Money<'static, Currency>;

/// Errors that can occur while calculating line totals, subtotals or tax.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// An amount could not be represented in minor units.
    #[error("amount overflowed minor units")]
    Overflow,
}

/// Sales tax applied at checkout, as a fraction of the subtotal (8%).
pub fn sales_tax_rate() -> Percentage {
    Percentage::from(Decimal::new(8, 2))
}

/// Price of `quantity` units at `price` each.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the product does not fit in minor units.
pub fn line_total(price: &Price, quantity: u32) -> Result<Price, PricingError> {
    let minor = price
        .to_minor_units()
        .checked_mul(i64::from(quantity))
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor, price.currency()))
}

/// Sums `price × quantity` over the given lines.
///
/// An empty iterator yields zero in `currency`.
///
/// # Errors
///
/// - [`PricingError::Money`]: a line is priced in a currency other than `currency`.
/// - [`PricingError::Overflow`]: a line total overflowed.
pub fn total_price<'p, I>(lines: I, currency: &'static Currency) -> Result<Price, PricingError>
where
    I: IntoIterator<Item = (&'p Price, u32)>,
{
    lines.into_iter().try_fold(
        Money::from_minor(0, currency),
        |acc, (price, quantity)| -> Result<Price, PricingError> {
            Ok(acc.add(line_total(price, quantity)?)?)
        },
    )
}

/// Tax owed on `subtotal` at `rate`, rounded half away from zero to the minor unit.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the tax cannot be represented in minor units.
pub fn tax_on(subtotal: &Price, rate: Percentage) -> Result<Price, PricingError> {
    let applied = (rate * Decimal::ONE)
        .checked_mul(Decimal::from(subtotal.to_minor_units()))
        .ok_or(PricingError::Overflow)?;

    let minor = applied
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor, subtotal.currency()))
}

/// Totals shown on the checkout screen. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSummary {
    /// Sum of all purchasable cart lines.
    pub subtotal: Price,

    /// Sales tax on the subtotal.
    pub tax: Price,

    /// Subtotal plus tax.
    pub total: Price,
}

impl CheckoutSummary {
    /// Derive tax and grand total from a cart subtotal.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the tax or the grand total cannot be computed.
    pub fn from_subtotal(subtotal: Price) -> Result<Self, PricingError> {
        let tax = tax_on(&subtotal, sales_tax_rate())?;
        let total = subtotal.add(tax)?;

        Ok(Self {
            subtotal,
            tax,
            total,
        })
    }
}
