//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartItem},
    catalog::{Catalog, CatalogError},
    checkout::ShippingDetails,
    config::{GeneratorConfig, LogFormat, LoggingConfig, StorefrontConfig},
    descriptions::{Copywriter, DescriptionError, DescriptionGenerator},
    fixtures::{FixtureError, SeedCatalog},
    forms::{
        FormError, FormMode, GenerationOutcome, GenerationTicket, ProductForm, ProductSubmission,
        QuantityPicker,
    },
    orders::{Ledger, Order, OrderId, OrderItem, OrderStatus},
    pricing::{CheckoutSummary, Price, PricingError},
    products::{NewProduct, Product, ProductId},
    router::{Router, View},
    session::{Role, Session, User, UserId},
    storefront::{
        Change, ChangeLog, NoopObserver, Rejection, Screen, Storefront, StorefrontObserver,
    },
};
