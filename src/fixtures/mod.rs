//! Fixtures
//!
//! The seed catalog every storefront starts from, written as YAML.

use std::{collections::HashSet, fs, path::Path};

use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{catalog::CatalogError, products::Product};

pub mod products;

pub use products::{CatalogFixture, ProductFixture, parse_price};

/// Built-in seed catalog.
const SEED_CATALOG: &str = include_str!("../../fixtures/catalog.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Two products share an identifier
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(u64),

    /// The fixture lists no products, so the store currency is unknown
    #[error("No products in catalog fixture; currency unknown")]
    NoProducts,

    /// The parsed products could not seed a catalog
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Products parsed from a catalog fixture, all in one currency.
#[derive(Debug, Clone)]
pub struct SeedCatalog {
    /// Products in listing order
    pub products: Vec<Product>,

    /// Currency shared by every product
    pub currency: &'static Currency,
}

/// Parse the built-in seed catalog.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the built-in fixture is malformed.
pub fn seed_catalog() -> Result<SeedCatalog, FixtureError> {
    parse_catalog(SEED_CATALOG)
}

/// Read and parse a catalog fixture file.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the file cannot be read or parsed.
pub fn load_catalog(path: &Path) -> Result<SeedCatalog, FixtureError> {
    let contents = fs::read_to_string(path)?;

    parse_catalog(&contents)
}

/// Parse catalog fixture YAML.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the YAML is malformed, a price is invalid,
/// products disagree on currency, identifiers repeat, or no products are listed.
pub fn parse_catalog(yaml: &str) -> Result<SeedCatalog, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    let mut products = Vec::with_capacity(fixture.products.len());
    let mut seen = HashSet::new();
    let mut currency: Option<&'static Currency> = None;

    for product_fixture in fixture.products {
        if !seen.insert(product_fixture.id) {
            return Err(FixtureError::DuplicateProduct(product_fixture.id));
        }

        let product = Product::try_from(product_fixture)?;
        let product_currency = product.price.currency();

        if let Some(existing) = currency
            && existing != product_currency
        {
            return Err(FixtureError::CurrencyMismatch(
                existing.iso_alpha_code.to_owned(),
                product_currency.iso_alpha_code.to_owned(),
            ));
        }

        currency = Some(product_currency);
        products.push(product);
    }

    let currency = currency.ok_or(FixtureError::NoProducts)?;

    Ok(SeedCatalog { products, currency })
}
