//! Screens

use crate::{
    cart::CartItem,
    orders::Order,
    pricing::{CheckoutSummary, Price},
    products::Product,
};

/// What to present for the current view, after applying render fallbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'a> {
    /// Product listing
    Catalog {
        /// Products in listing order
        products: &'a [Product],
    },

    /// A single product
    ProductDetail {
        /// The selected product
        product: &'a Product,
    },

    /// Cart contents
    Cart {
        /// Every line, withdrawn ones included
        items: &'a [CartItem],

        /// Subtotal of purchasable lines
        subtotal: Price,
    },

    /// Checkout form and totals
    Checkout {
        /// Lines that will be ordered
        items: Vec<&'a CartItem>,

        /// Subtotal, tax and grand total
        summary: CheckoutSummary,
    },

    /// The signed-in user's orders
    OrderHistory {
        /// Orders, oldest first
        orders: Vec<&'a Order>,
    },

    /// Order history was requested with nobody signed in.
    SignInRequired,

    /// Operator dashboard
    AdminDashboard {
        /// Every product
        products: &'a [Product],

        /// Every order
        orders: &'a [Order],
    },
}
