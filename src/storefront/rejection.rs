//! Intent rejections

use thiserror::Error;

use crate::{forms::FormError, pricing::PricingError, products::ProductId};

/// Why an intent was refused. Displays as the message shown to the visitor.
///
/// A rejected intent leaves every store unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum Rejection {
    /// Placing an order requires a signed-in user.
    #[error("Please log in to place an order.")]
    NotSignedIn,

    /// Catalog management requires the operator role.
    #[error("Only operators can manage the catalog.")]
    OperatorOnly,

    /// The product is not in the catalog.
    #[error("Product {0} is not in the catalog.")]
    UnknownProduct(ProductId),

    /// There is nothing purchasable in the cart.
    #[error("Your cart is empty.")]
    EmptyCart,

    /// A checkout field was left blank.
    #[error("Please fill out all fields.")]
    IncompleteShipping,

    /// A product was priced in a currency the store does not sell in.
    #[error("Prices must be in {expected}, got {found}.")]
    CurrencyMismatch {
        /// Store currency code
        expected: &'static str,

        /// Currency code supplied
        found: &'static str,
    },

    /// A required product field is blank or the price is negative.
    #[error(transparent)]
    InvalidProduct(#[from] FormError),

    /// The order total could not be computed.
    #[error("Unable to price the order.")]
    Pricing(#[from] PricingError),
}
