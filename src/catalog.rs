//! Catalog

use std::collections::HashSet;

use rusty_money::iso::Currency;
use thiserror::Error;

use crate::products::{NewProduct, Product, ProductId};

/// Errors raised when seeding a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share an identifier
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// A product is priced in a currency the store does not sell in
    #[error("Product {product} is priced in {found}, expected {expected}")]
    CurrencyMismatch {
        /// Offending product
        product: ProductId,

        /// Store currency code
        expected: &'static str,

        /// Currency code of the product's price
        found: &'static str,
    },
}

/// In-memory product catalog.
///
/// Identifiers come from a counter that only moves forward, so a removed
/// product's identifier is never handed out again.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    next_id: u64,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a catalog seeded with existing products priced in `currency`.
    ///
    /// New identifiers start one past the largest seeded identifier.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateProduct`]: two products share an identifier.
    /// - [`CatalogError::CurrencyMismatch`]: a product is priced in another currency.
    pub fn with_products(
        products: impl Into<Vec<Product>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let products = products.into();
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }

            let found = product.price.currency();

            if found != currency {
                return Err(CatalogError::CurrencyMismatch {
                    product: product.id,
                    expected: currency.iso_alpha_code,
                    found: found.iso_alpha_code,
                });
            }
        }

        let next_id = products
            .iter()
            .map(|product| product.id.get())
            .max()
            .map_or(1, |max| max.saturating_add(1));

        Ok(Self { products, next_id })
    }

    /// Add a product under a fresh identifier, placing it first in the listing.
    pub fn add(&mut self, product: NewProduct) -> Product {
        let id = ProductId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);

        let product = Product::from_new(id, product);
        self.products.insert(0, product.clone());

        product
    }

    /// Replace the stored product with the same identifier.
    ///
    /// Returns `false` and leaves the catalog untouched when no product matches.
    pub fn update(&mut self, product: Product) -> bool {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product;
                true
            }
            None => false,
        }
    }

    /// Remove a product, returning it if it was present.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;

        Some(self.products.remove(index))
    }

    /// Look up a product by identifier.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in listing order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Products whose name or category contains `query`, ignoring case.
    ///
    /// A blank query returns every product.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim();

        if query.is_empty() {
            return self.products.iter().collect();
        }

        self.products.iter().filter(|p| p.matches(query)).collect()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
