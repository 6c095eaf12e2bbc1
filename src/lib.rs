//! Storefront
//!
//! State and navigation core for a small online store: a product catalog,
//! a shopping cart, an order ledger, role-based sign-in and a view router,
//! driven through the intents on [`storefront::Storefront`].

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod descriptions;
pub mod fixtures;
pub mod forms;
pub mod observability;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod router;
pub mod session;
pub mod storefront;
