//! Cart

use rusty_money::iso::Currency;

use crate::{
    pricing::{Price, PricingError, line_total, total_price},
    products::{Product, ProductId},
};

/// A product and how many units of it the shopper wants.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    product: Product,
    quantity: u32,
    withdrawn: bool,
}

impl CartItem {
    /// Last known product data for this line.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Units requested, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether the product has been removed from the catalog.
    ///
    /// Withdrawn lines stay visible so the shopper can remove them, but they
    /// cannot be purchased and count towards neither totals nor the badge.
    pub fn is_withdrawn(&self) -> bool {
        self.withdrawn
    }

    /// Price of this line.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the line total overflows.
    pub fn total(&self) -> Result<Price, PricingError> {
        line_total(&self.product.price, self.quantity)
    }
}

/// The shopper's cart.
#[derive(Debug, Clone)]
pub struct Cart {
    items: Vec<CartItem>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` units of `product`.
    ///
    /// Quantities for a product already in the cart are summed. A line whose
    /// summed quantity drops to zero or below is removed.
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        if let Some(item) = self.get(product.id) {
            let summed = i64::from(item.quantity).saturating_add(quantity);
            self.set_quantity(product.id, summed);

            return;
        }

        if let Some(quantity) = positive_quantity(quantity) {
            self.items.push(CartItem {
                product: product.clone(),
                quantity,
                withdrawn: false,
            });
        }
    }

    /// Replace the quantity of the line for `product`.
    ///
    /// Zero or a negative quantity removes the line. Does nothing when the
    /// product is not in the cart.
    pub fn set_quantity(&mut self, product: ProductId, quantity: i64) {
        let Some(quantity) = positive_quantity(quantity) else {
            self.items.retain(|item| item.product.id != product);
            return;
        };

        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == product) {
            item.quantity = quantity;
        }
    }

    /// Replace the product data held by the matching line.
    pub fn refresh(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == product.id) {
            item.product = product.clone();
        }
    }

    /// Mark the line for `product` as no longer purchasable.
    pub fn withdraw(&mut self, product: ProductId) {
        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == product) {
            item.withdrawn = true;
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// All lines, including withdrawn ones, in the order they were added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Lines that can still be bought.
    pub fn purchasable(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter().filter(|item| !item.withdrawn)
    }

    /// Look up the line for a product.
    pub fn get(&self, product: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == product)
    }

    /// Sum of price × quantity over purchasable lines.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a line is in another currency or a total overflows.
    pub fn subtotal(&self) -> Result<Price, PricingError> {
        total_price(
            self.purchasable()
                .map(|item| (&item.product.price, item.quantity)),
            self.currency,
        )
    }

    /// Total units across purchasable lines, as shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.purchasable().map(|item| u64::from(item.quantity)).sum()
    }

    /// Number of lines, including withdrawn ones.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currency the cart is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

fn positive_quantity(quantity: i64) -> Option<u32> {
    if quantity <= 0 {
        return None;
    }

    Some(u32::try_from(quantity).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use crate::products::NewProduct;

    use super::*;

    fn product(id: u64, price_minor: i64) -> Product {
        Product::from_new(
            ProductId::new(id),
            NewProduct {
                name: format!("Product {id}"),
                description: String::new(),
                price: Money::from_minor(price_minor, USD),
                image_url: String::new(),
                category: "Test".to_owned(),
                stock: 5,
            },
        )
    }

    #[test]
    fn repeated_adds_sum_into_one_line() {
        let a = product(1, 10_00);
        let mut cart = Cart::new(USD);

        cart.add_item(&a, 1);
        cart.add_item(&a, 2);
        cart.add_item(&a, 4);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(a.id).map(CartItem::quantity), Some(7));
    }

    #[test]
    fn add_then_remove_by_zero_quantity() -> TestResult {
        let a = product(1, 10_00);
        let mut cart = Cart::new(USD);

        cart.add_item(&a, 2);

        assert_eq!(cart.subtotal()?, Money::from_minor(20_00, USD));
        assert_eq!(cart.item_count(), 2);

        cart.set_quantity(a.id, 0);

        assert!(cart.is_empty());
        assert_eq!(cart.subtotal()?, Money::from_minor(0, USD));

        Ok(())
    }

    #[test]
    fn negative_quantity_removes_line() {
        let a = product(1, 10_00);
        let mut cart = Cart::new(USD);

        cart.add_item(&a, 3);
        cart.set_quantity(a.id, -2);

        assert!(cart.get(a.id).is_none());
    }

    #[test]
    fn set_quantity_replaces_rather_than_adds() {
        let a = product(1, 10_00);
        let mut cart = Cart::new(USD);

        cart.add_item(&a, 3);
        cart.set_quantity(a.id, 5);

        assert_eq!(cart.get(a.id).map(CartItem::quantity), Some(5));
    }

    #[test]
    fn set_quantity_for_missing_product_is_a_no_op() {
        let a = product(1, 10_00);
        let mut cart = Cart::new(USD);

        cart.set_quantity(a.id, 4);

        assert!(cart.is_empty());
    }

    #[test]
    fn adding_non_positive_quantity_never_stores_it() {
        let a = product(1, 10_00);
        let mut cart = Cart::new(USD);

        cart.add_item(&a, 0);
        cart.add_item(&a, -3);

        assert!(cart.is_empty());

        cart.add_item(&a, 2);
        cart.add_item(&a, -5);

        assert!(cart.is_empty());
    }

    #[test]
    fn refresh_picks_up_catalog_price_changes() -> TestResult {
        let mut a = product(1, 10_00);
        let mut cart = Cart::new(USD);
        cart.add_item(&a, 2);

        a.price = Money::from_minor(8_00, USD);
        cart.refresh(&a);

        assert_eq!(cart.subtotal()?, Money::from_minor(16_00, USD));

        Ok(())
    }

    #[test]
    fn withdrawn_lines_are_inert() -> TestResult {
        let a = product(1, 10_00);
        let b = product(2, 5_00);
        let mut cart = Cart::new(USD);
        cart.add_item(&a, 2);
        cart.add_item(&b, 1);

        cart.withdraw(a.id);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.subtotal()?, Money::from_minor(5_00, USD));
        assert_eq!(cart.purchasable().count(), 1);

        Ok(())
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = Cart::new(USD);
        cart.add_item(&product(1, 1_00), 1);
        cart.add_item(&product(2, 1_00), 1);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }
}
