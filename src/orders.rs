//! Orders

use std::fmt::{self, Display, Formatter};

use jiff::Timestamp;
use rusty_money::iso::Currency;
use uuid::Uuid;

use crate::{
    cart::CartItem,
    pricing::{Price, PricingError, line_total, total_price},
    products::Product,
    session::UserId,
};

/// Order identifier.
///
/// Backed by a time-ordered UUID so identifiers stay unique however quickly
/// orders are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// The underlying UUID.
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "order-{}", self.0.simple())
    }
}

/// Fulfilment status. Orders are created `Pending`; later states are set
/// outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    /// Placed, not yet shipped.
    #[default]
    Pending,

    /// Handed to a carrier.
    Shipped,

    /// Received by the customer.
    Delivered,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "Pending",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
        })
    }
}

/// A purchased product, frozen as it was when the order was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// Product data at placement time.
    pub product: Product,

    /// Units bought.
    pub quantity: u32,
}

impl OrderItem {
    /// Price of this line at placement time.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the line total overflows.
    pub fn total(&self) -> Result<Price, PricingError> {
        line_total(&self.product.price, self.quantity)
    }
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product: item.product().clone(),
            quantity: item.quantity(),
        }
    }
}

/// A placed order. Never modified after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Unique identifier.
    pub id: OrderId,

    /// Owner of the order.
    pub user_id: UserId,

    /// Snapshot of the purchased lines.
    pub items: Vec<OrderItem>,

    /// Sum of the lines, fixed at placement.
    pub total: Price,

    /// When the order was placed.
    pub placed_at: Timestamp,

    /// Where the order ships to.
    pub shipping_address: String,

    /// Fulfilment status.
    pub status: OrderStatus,
}

impl Order {
    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

/// Append-only record of placed orders.
#[derive(Debug, Clone)]
pub struct Ledger {
    orders: Vec<Order>,
    currency: &'static Currency,
}

impl Ledger {
    /// Create an empty ledger recording totals in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            orders: Vec::new(),
            currency,
        }
    }

    /// Record a new `Pending` order for `user_id`.
    ///
    /// The total is computed from `items` here and never recalculated.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the total cannot be computed; nothing is
    /// recorded in that case.
    pub fn place(
        &mut self,
        user_id: UserId,
        items: Vec<OrderItem>,
        shipping_address: String,
    ) -> Result<Order, PricingError> {
        let total = total_price(
            items
                .iter()
                .map(|item| (&item.product.price, item.quantity)),
            self.currency,
        )?;

        let order = Order {
            id: OrderId::generate(),
            user_id,
            items,
            total,
            placed_at: Timestamp::now(),
            shipping_address,
            status: OrderStatus::Pending,
        };

        self.orders.push(order.clone());

        Ok(order)
    }

    /// Orders owned by `user_id`, oldest first.
    pub fn list_for_user<'a>(&'a self, user_id: &'a UserId) -> impl Iterator<Item = &'a Order> {
        self.orders
            .iter()
            .filter(move |order| &order.user_id == user_id)
    }

    /// Every order, oldest first.
    pub fn list_all(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order by identifier.
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Number of orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no orders have been placed.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use crate::products::{NewProduct, ProductId};

    use super::*;

    fn item(id: u64, price_minor: i64, quantity: u32) -> OrderItem {
        OrderItem {
            product: Product::from_new(
                ProductId::new(id),
                NewProduct {
                    name: format!("Product {id}"),
                    description: String::new(),
                    price: Money::from_minor(price_minor, USD),
                    image_url: String::new(),
                    category: "Test".to_owned(),
                    stock: 5,
                },
            ),
            quantity,
        }
    }

    #[test]
    fn place_computes_total_and_starts_pending() -> TestResult {
        let mut ledger = Ledger::new(USD);
        let customer = UserId::new("customer-123");

        let order = ledger.place(
            customer.clone(),
            vec![item(1, 10_00, 2), item(2, 3_50, 1)],
            "1 Main Street".to_owned(),
        )?;

        assert_eq!(order.total, Money::from_minor(23_50, USD));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.user_id, customer);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.shipping_address, "1 Main Street");

        Ok(())
    }

    #[test]
    fn list_for_user_filters_by_owner() -> TestResult {
        let mut ledger = Ledger::new(USD);
        let alice = UserId::new("alice");
        let bob = UserId::new("bob");

        let first = ledger.place(alice.clone(), vec![item(1, 1_00, 1)], "A".to_owned())?.id;
        ledger.place(bob.clone(), vec![item(1, 1_00, 1)], "B".to_owned())?;
        let third = ledger.place(alice.clone(), vec![item(2, 2_00, 1)], "A".to_owned())?.id;

        let alice_orders: Vec<_> = ledger.list_for_user(&alice).map(|o| o.id).collect();

        assert_eq!(alice_orders, vec![first, third]);
        assert_eq!(ledger.list_for_user(&bob).count(), 1);
        assert_eq!(ledger.list_all().len(), 3);

        Ok(())
    }

    #[test]
    fn identifiers_are_unique_under_rapid_placement() -> TestResult {
        let mut ledger = Ledger::new(USD);
        let user = UserId::new("customer-123");

        let mut ids = HashSet::new();

        for _ in 0..500 {
            let id = ledger.place(user.clone(), vec![item(1, 1_00, 1)], "A".to_owned())?.id;
            ids.insert(id);
        }

        assert_eq!(ids.len(), 500);

        Ok(())
    }

    #[test]
    fn failed_placement_records_nothing() {
        let mut ledger = Ledger::new(USD);

        let result = ledger.place(
            UserId::new("customer-123"),
            vec![item(1, i64::MAX, 2)],
            "A".to_owned(),
        );

        assert!(result.is_err(), "overflowing total should fail");
        assert!(ledger.is_empty());
    }

    #[test]
    fn order_id_displays_with_prefix() {
        assert!(OrderId::generate().to_string().starts_with("order-"));
    }
}
