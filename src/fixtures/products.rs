//! Product Fixtures

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    pricing::Price,
    products::{Product, ProductId},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products in listing order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: u64,

    /// Product name
    pub name: String,

    /// Product description
    #[serde(default)]
    pub description: String,

    /// Product price (e.g., "29.99 USD")
    pub price: String,

    /// Image URI
    #[serde(default)]
    pub image_url: String,

    /// Category label
    pub category: String,

    /// Units on hand
    #[serde(default)]
    pub stock: u32,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId::new(fixture.id),
            price: parse_price(&fixture.price)?,
            name: fixture.name,
            description: fixture.description,
            image_url: fixture.image_url,
            category: fixture.category,
            stock: fixture.stock,
        })
    }
}

/// Parse price string (e.g., "29.99 USD") into money
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal, if it carries more decimal
/// places than the currency's minor unit, or if the currency code is not
/// recognized.
pub fn parse_price(s: &str) -> Result<Price, FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = match currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_owned())),
    };

    let mut amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_owned()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidPrice(s.to_owned()));
    }

    // Finer than the currency's minor unit
    if amount.normalize().scale() > currency.exponent {
        return Err(FixtureError::InvalidPrice(format!(
            "More than {} decimal places for {currency_code}: {s}",
            currency.exponent
        )));
    }

    amount.rescale(currency.exponent);

    let minor_units = i64::try_from(amount.mantissa())
        .ok()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_owned()))?;

    Ok(Money::from_minor(minor_units, currency))
}
