//! Products

use std::fmt::{self, Display, Formatter};

use crate::pricing::Price;

/// Catalog-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(u64);

impl ProductId {
    /// Wrap a raw identifier.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Identifier, immutable once assigned.
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Unit price
    pub price: Price,

    /// Image URI
    pub image_url: String,

    /// Category label
    pub category: String,

    /// Units on hand. Displayed only; never reserved or decremented.
    pub stock: u32,
}

impl Product {
    /// Attach an identifier to product details.
    pub fn from_new(id: ProductId, product: NewProduct) -> Self {
        let NewProduct {
            name,
            description,
            price,
            image_url,
            category,
            stock,
        } = product;

        Self {
            id,
            name,
            description,
            price,
            image_url,
            category,
            stock,
        }
    }

    /// Whether any stock is on hand.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Stock label shown on the product detail screen.
    pub fn availability(&self) -> String {
        if self.in_stock() {
            format!("{} in stock", self.stock)
        } else {
            "Out of stock".to_owned()
        }
    }

    /// Case-insensitive match of `query` against the name or the category.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();

        self.name.to_lowercase().contains(&query) || self.category.to_lowercase().contains(&query)
    }
}

/// Product details before the catalog has assigned an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Product name
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Unit price
    pub price: Price,

    /// Image URI
    pub image_url: String,

    /// Category label
    pub category: String,

    /// Units on hand
    pub stock: u32,
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};

    use super::*;

    fn lamp() -> Product {
        Product::from_new(
            ProductId::new(7),
            NewProduct {
                name: "Aurora Desk Lamp".to_owned(),
                description: String::new(),
                price: Money::from_minor(49_99, USD),
                image_url: "https://example.com/lamp.jpg".to_owned(),
                category: "Home Office".to_owned(),
                stock: 3,
            },
        )
    }

    #[test]
    fn matches_name_and_category_ignoring_case() {
        let product = lamp();

        assert!(product.matches("aurora"), "name should match");
        assert!(product.matches("OFFICE"), "category should match");
        assert!(!product.matches("kettle"), "unrelated query should not match");
    }

    #[test]
    fn availability_reports_stock() {
        let mut product = lamp();

        assert_eq!(product.availability(), "3 in stock");

        product.stock = 0;

        assert_eq!(product.availability(), "Out of stock");
    }

    #[test]
    fn product_id_displays_raw_value() {
        assert_eq!(ProductId::new(42).to_string(), "42");
    }
}
