//! Storefront
//!
//! The composition root. [`Storefront`] owns the catalog, cart, order ledger,
//! session and router, and is the only way to change any of them. Each intent
//! runs to completion before returning: it either succeeds and notifies the
//! observer, or returns a [`Rejection`] and leaves every store as it was.

use rusty_money::iso::Currency;
use tracing::{debug, info, warn};

use crate::{
    cart::{Cart, CartItem},
    catalog::{Catalog, CatalogError},
    checkout::ShippingDetails,
    config::StorefrontConfig,
    fixtures::{self, FixtureError},
    forms::{self, ProductSubmission},
    orders::{Ledger, Order, OrderItem},
    pricing::{CheckoutSummary, Price, PricingError},
    products::{NewProduct, Product, ProductId},
    router::{Router, View},
    session::{Role, Session, User},
};

mod observer;
mod rejection;
mod screen;

pub use observer::{Change, ChangeLog, NoopObserver, StorefrontObserver};
pub use rejection::Rejection;
pub use screen::Screen;

/// Storefront application state and intents.
#[derive(Debug)]
pub struct Storefront<O: StorefrontObserver = NoopObserver> {
    catalog: Catalog,
    cart: Cart,
    ledger: Ledger,
    session: Session,
    router: Router,
    currency: &'static Currency,
    observer: O,
}

impl Storefront<NoopObserver> {
    /// A storefront selling `products`, priced in `currency`, with an empty
    /// cart and ledger and nobody signed in.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if product identifiers repeat or a product is
    /// priced in another currency.
    pub fn new(
        products: impl Into<Vec<Product>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        Self::with_observer(products, currency, NoopObserver)
    }

    /// A storefront seeded from the configured catalog fixture.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the catalog file cannot be read, parsed
    /// or seeded.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, FixtureError> {
        let seed = match config.catalog.as_deref() {
            Some(path) => fixtures::load_catalog(path)?,
            None => fixtures::seed_catalog()?,
        };

        let store = Self::new(seed.products, seed.currency)?;

        info!(
            products = store.catalog.len(),
            currency = store.currency.iso_alpha_code,
            "catalog seeded"
        );

        Ok(store)
    }
}

impl<O: StorefrontObserver> Storefront<O> {
    /// A storefront that reports changes to `observer`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if product identifiers repeat or a product is
    /// priced in another currency.
    pub fn with_observer(
        products: impl Into<Vec<Product>>,
        currency: &'static Currency,
        observer: O,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            catalog: Catalog::with_products(products, currency)?,
            cart: Cart::new(currency),
            ledger: Ledger::new(currency),
            session: Session::new(),
            router: Router::new(),
            currency,
            observer,
        })
    }

    /// The same storefront, reporting changes to `observer` instead.
    pub fn observed_by<P: StorefrontObserver>(self, observer: P) -> Storefront<P> {
        Storefront {
            catalog: self.catalog,
            cart: self.cart,
            ledger: self.ledger,
            session: self.session,
            router: self.router,
            currency: self.currency,
            observer,
        }
    }

    /// Sign in as `role` and return to the catalog.
    pub fn login(&mut self, role: Role) -> User {
        let user = self.session.login(role).clone();
        self.router.reset();

        info!(user = %user.id, %role, "signed in");

        self.notify(&[Change::Session, Change::View]);

        user
    }

    /// Sign out and return to the catalog. The cart is kept.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.logout() {
            info!(user = %user.id, "signed out");
        }

        self.router.reset();

        self.notify(&[Change::Session, Change::View]);
    }

    /// Move to `target`, returning the view actually entered.
    ///
    /// The admin dashboard silently redirects to the catalog for anyone but
    /// an operator.
    pub fn navigate(&mut self, target: View) -> View {
        let entered = self.router.navigate(target, &self.session);

        if entered == target {
            debug!(view = %entered, "navigated");
        } else {
            warn!(requested = %target, view = %entered, "navigation redirected");
        }

        self.notify(&[Change::View]);

        entered
    }

    /// Show the detail view for `product`.
    ///
    /// The identifier is not checked here; an unknown product renders as the
    /// catalog.
    pub fn view_product(&mut self, product: ProductId) {
        self.router.view_product(product);

        debug!(%product, "viewing product");

        self.notify(&[Change::View]);
    }

    /// Go back one fixed step: detail and cart to catalog, checkout to cart.
    pub fn back(&mut self) -> View {
        let view = self.router.back();

        self.notify(&[Change::View]);

        view
    }

    /// Add `quantity` units of a catalog product to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::UnknownProduct`] if the product is not in the catalog.
    pub fn add_to_cart(&mut self, product: ProductId, quantity: i64) -> Result<(), Rejection> {
        let Some(found) = self.catalog.get(product) else {
            warn!(%product, "add to cart rejected: unknown product");
            return Err(Rejection::UnknownProduct(product));
        };

        self.cart.add_item(found, quantity);

        debug!(%product, quantity, "added to cart");

        self.notify(&[Change::Cart]);

        Ok(())
    }

    /// Set the quantity of a cart line. Zero or less removes it.
    pub fn update_quantity(&mut self, product: ProductId, quantity: i64) {
        self.cart.set_quantity(product, quantity);

        debug!(%product, quantity, "cart quantity updated");

        self.notify(&[Change::Cart]);
    }

    /// Place an order for everything purchasable in the cart.
    ///
    /// On success the cart is emptied and the order history is shown.
    ///
    /// # Errors
    ///
    /// - [`Rejection::NotSignedIn`]: nobody is signed in.
    /// - [`Rejection::IncompleteShipping`]: a shipping field is blank.
    /// - [`Rejection::EmptyCart`]: the cart has no purchasable lines.
    /// - [`Rejection::Pricing`]: the order total could not be computed.
    pub fn place_order(&mut self, shipping: &ShippingDetails) -> Result<Order, Rejection> {
        let Some(user) = self.session.user() else {
            warn!("order rejected: not signed in");
            return Err(Rejection::NotSignedIn);
        };

        if !shipping.is_complete() {
            warn!(user = %user.id, "order rejected: incomplete shipping details");
            return Err(Rejection::IncompleteShipping);
        }

        let items: Vec<OrderItem> = self.cart.purchasable().map(OrderItem::from).collect();

        if items.is_empty() {
            warn!(user = %user.id, "order rejected: empty cart");
            return Err(Rejection::EmptyCart);
        }

        let order = self.ledger.place(
            user.id.clone(),
            items,
            shipping.address.trim().to_owned(),
        )?;

        self.cart.clear();
        self.router.navigate(View::OrderHistory, &self.session);

        info!(
            order = %order.id,
            user = %order.user_id,
            total = %order.total,
            items = order.item_count(),
            "order placed"
        );

        self.notify(&[Change::Orders, Change::Cart, Change::View]);

        Ok(order)
    }

    /// Add a product to the catalog.
    ///
    /// # Errors
    ///
    /// - [`Rejection::OperatorOnly`]: the visitor is not an operator.
    /// - [`Rejection::CurrencyMismatch`]: the price is in another currency.
    /// - [`Rejection::InvalidProduct`]: a required field is blank or the price is negative.
    pub fn add_product(&mut self, product: NewProduct) -> Result<ProductId, Rejection> {
        self.require_operator()?;
        self.require_currency(&product.price)?;
        Self::require_details(
            &product.name,
            &product.category,
            &product.image_url,
            &product.price,
        )?;

        let added = self.catalog.add(product);

        info!(product = %added.id, name = %added.name, "product added");

        self.notify(&[Change::Catalog]);

        Ok(added.id)
    }

    /// Replace a catalog product. Any cart line for it picks up the new data.
    ///
    /// # Errors
    ///
    /// - [`Rejection::OperatorOnly`]: the visitor is not an operator.
    /// - [`Rejection::CurrencyMismatch`]: the price is in another currency.
    /// - [`Rejection::InvalidProduct`]: a required field is blank or the price is negative.
    /// - [`Rejection::UnknownProduct`]: no product has this identifier.
    pub fn update_product(&mut self, product: Product) -> Result<(), Rejection> {
        self.require_operator()?;
        self.require_currency(&product.price)?;
        Self::require_details(
            &product.name,
            &product.category,
            &product.image_url,
            &product.price,
        )?;

        let id = product.id;

        if self.catalog.get(id).is_none() {
            warn!(product = %id, "update rejected: unknown product");
            return Err(Rejection::UnknownProduct(id));
        }

        self.cart.refresh(&product);
        self.catalog.update(product);

        info!(product = %id, "product updated");

        self.notify(&[Change::Catalog, Change::Cart]);

        Ok(())
    }

    /// Remove a product from the catalog. A cart line for it becomes inert.
    ///
    /// # Errors
    ///
    /// - [`Rejection::OperatorOnly`]: the visitor is not an operator.
    /// - [`Rejection::UnknownProduct`]: no product has this identifier.
    pub fn delete_product(&mut self, product: ProductId) -> Result<(), Rejection> {
        self.require_operator()?;

        let Some(removed) = self.catalog.remove(product) else {
            warn!(%product, "delete rejected: unknown product");
            return Err(Rejection::UnknownProduct(product));
        };

        self.cart.withdraw(product);

        info!(%product, name = %removed.name, "product deleted");

        self.notify(&[Change::Catalog, Change::Cart]);

        Ok(())
    }

    /// Apply a submitted product form as an add or an update.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] of the underlying add or update.
    pub fn submit_product(&mut self, submission: ProductSubmission) -> Result<ProductId, Rejection> {
        match submission {
            ProductSubmission::Create(product) => self.add_product(product),
            ProductSubmission::Update(product) => {
                let id = product.id;
                self.update_product(product).map(|()| id)
            }
        }
    }

    /// The current view.
    pub fn view(&self) -> View {
        self.router.view()
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.session.user()
    }

    /// Currency the store sells in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// The catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Products matching a search box query.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        self.catalog.search(query)
    }

    /// The product selected for the detail view, if it still exists.
    pub fn selected_product(&self) -> Option<&Product> {
        self.router
            .selected_product()
            .and_then(|id| self.catalog.get(id))
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Units in the cart, for the header badge.
    pub fn cart_item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Subtotal of purchasable cart lines.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the subtotal cannot be computed.
    pub fn cart_subtotal(&self) -> Result<Price, PricingError> {
        self.cart.subtotal()
    }

    /// Subtotal, 8% tax and grand total for the checkout screen.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if any amount cannot be computed.
    pub fn checkout_summary(&self) -> Result<CheckoutSummary, PricingError> {
        CheckoutSummary::from_subtotal(self.cart.subtotal()?)
    }

    /// Orders placed by the signed-in user, or `None` when signed out.
    pub fn my_orders(&self) -> Option<Vec<&Order>> {
        let user = self.session.user()?;

        Some(self.ledger.list_for_user(&user.id).collect())
    }

    /// Every order, or `None` unless an operator is signed in.
    pub fn all_orders(&self) -> Option<&[Order]> {
        self.session
            .is_operator()
            .then(|| self.ledger.list_all())
    }

    /// Read-only access to the order ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The observer receiving change notifications.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer, e.g. to drain recorded changes.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Resolve the current view into what should be presented.
    ///
    /// A detail view whose product no longer exists shows the catalog. Order
    /// history without a session shows a sign-in prompt. The admin dashboard
    /// without the operator role shows the catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if cart or checkout totals cannot be computed.
    pub fn screen(&self) -> Result<Screen<'_>, PricingError> {
        let catalog = Screen::Catalog {
            products: self.catalog.list(),
        };

        let screen = match self.router.view() {
            View::Catalog => catalog,
            View::ProductDetail => match self.selected_product() {
                Some(product) => Screen::ProductDetail { product },
                None => catalog,
            },
            View::Cart => Screen::Cart {
                items: self.cart.items(),
                subtotal: self.cart.subtotal()?,
            },
            View::Checkout => Screen::Checkout {
                items: self.cart.purchasable().collect::<Vec<&CartItem>>(),
                summary: self.checkout_summary()?,
            },
            View::OrderHistory => match self.my_orders() {
                Some(orders) => Screen::OrderHistory { orders },
                None => Screen::SignInRequired,
            },
            View::AdminDashboard => match self.all_orders() {
                Some(orders) => Screen::AdminDashboard {
                    products: self.catalog.list(),
                    orders,
                },
                None => catalog,
            },
        };

        Ok(screen)
    }

    fn require_operator(&self) -> Result<(), Rejection> {
        if self.session.is_operator() {
            return Ok(());
        }

        warn!("catalog change rejected: operator role required");

        Err(Rejection::OperatorOnly)
    }

    fn require_currency(&self, price: &Price) -> Result<(), Rejection> {
        let found = price.currency();

        if found == self.currency {
            return Ok(());
        }

        Err(Rejection::CurrencyMismatch {
            expected: self.currency.iso_alpha_code,
            found: found.iso_alpha_code,
        })
    }

    fn require_details(
        name: &str,
        category: &str,
        image_url: &str,
        price: &Price,
    ) -> Result<(), Rejection> {
        forms::check_details(name, category, image_url, price).map_err(|source| {
            warn!("catalog change rejected: {source}");
            Rejection::InvalidProduct(source)
        })
    }

    fn notify(&mut self, changes: &[Change]) {
        for change in changes {
            self.observer.on_change(*change);
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};

    use crate::forms::FormError;
    use testresult::TestResult;

    use super::*;

    fn lamp() -> Product {
        Product::from_new(
            ProductId::new(1),
            NewProduct {
                name: "Aurora Lamp".to_owned(),
                description: "Warm light".to_owned(),
                price: Money::from_minor(10_00, USD),
                image_url: "https://example.com/lamp.jpg".to_owned(),
                category: "Home".to_owned(),
                stock: 5,
            },
        )
    }

    fn store() -> Result<Storefront<ChangeLog>, CatalogError> {
        Storefront::with_observer(vec![lamp()], USD, ChangeLog::default())
    }

    fn shipping() -> ShippingDetails {
        ShippingDetails::new("Ada", "ada@example.com", "1 Main Street")
    }

    #[test]
    fn rejected_intents_notify_nothing() -> TestResult {
        let mut store = store()?;

        let result = store.place_order(&shipping());

        assert_eq!(result, Err(Rejection::NotSignedIn));
        assert!(store.observer().changes().is_empty());

        Ok(())
    }

    #[test]
    fn successful_order_notifies_every_changed_area() -> TestResult {
        let mut store = store()?;
        store.login(Role::Customer);
        store.add_to_cart(ProductId::new(1), 1)?;
        store.observer_mut().drain();

        store.place_order(&shipping())?;

        assert_eq!(
            store.observer().changes(),
            &[Change::Orders, Change::Cart, Change::View]
        );

        Ok(())
    }

    #[test]
    fn incomplete_shipping_is_rejected_without_changes() -> TestResult {
        let mut store = store()?;
        store.login(Role::Customer);
        store.add_to_cart(ProductId::new(1), 2)?;

        let result = store.place_order(&ShippingDetails::new("Ada", "", "1 Main Street"));

        assert_eq!(result, Err(Rejection::IncompleteShipping));
        assert_eq!(store.cart_item_count(), 2);
        assert!(store.ledger().is_empty());

        Ok(())
    }

    #[test]
    fn empty_cart_is_rejected() -> TestResult {
        let mut store = store()?;
        store.login(Role::Customer);

        assert_eq!(store.place_order(&shipping()), Err(Rejection::EmptyCart));

        Ok(())
    }

    #[test]
    fn customers_cannot_manage_the_catalog() -> TestResult {
        let mut store = store()?;
        store.login(Role::Customer);

        assert_eq!(
            store.delete_product(ProductId::new(1)),
            Err(Rejection::OperatorOnly)
        );
        assert_eq!(store.catalog().len(), 1);

        Ok(())
    }

    #[test]
    fn foreign_currency_prices_are_rejected() -> TestResult {
        let mut store = store()?;
        store.login(Role::Operator);

        let mut product = lamp();
        product.price = Money::from_minor(10_00, rusty_money::iso::EUR);

        assert_eq!(
            store.update_product(product),
            Err(Rejection::CurrencyMismatch {
                expected: "USD",
                found: "EUR",
            })
        );

        Ok(())
    }

    #[test]
    fn login_and_logout_return_to_catalog() -> TestResult {
        let mut store = store()?;
        store.navigate(View::Cart);

        store.login(Role::Customer);
        assert_eq!(store.view(), View::Catalog);

        store.navigate(View::OrderHistory);
        store.logout();
        assert_eq!(store.view(), View::Catalog);
        assert!(store.current_user().is_none());

        Ok(())
    }

    #[test]
    fn observed_by_keeps_state() -> TestResult {
        let mut plain = Storefront::new(vec![lamp()], USD)?;
        plain.add_to_cart(ProductId::new(1), 3)?;

        let mut store = plain.observed_by(ChangeLog::default());
        store.update_quantity(ProductId::new(1), 1);

        assert_eq!(store.cart_item_count(), 1);
        assert_eq!(store.observer().changes(), &[Change::Cart]);

        Ok(())
    }

    #[test]
    fn duplicate_product_ids_are_refused() {
        let result = Storefront::new(vec![lamp(), lamp()], USD);

        assert!(
            matches!(result, Err(CatalogError::DuplicateProduct(id)) if id == ProductId::new(1)),
            "expected duplicate id, got {result:?}"
        );
    }

    #[test]
    fn negative_prices_are_refused() -> TestResult {
        let mut store = store()?;
        store.login(Role::Operator);

        let mut product = lamp();
        product.price = Money::from_minor(-5_00, USD);

        assert_eq!(
            store.update_product(product),
            Err(Rejection::InvalidProduct(FormError::NegativePrice))
        );
        assert_eq!(
            store.catalog().get(ProductId::new(1)).map(|p| p.price),
            Some(Money::from_minor(10_00, USD))
        );
        assert!(store.observer().changes().iter().all(|c| *c != Change::Catalog));

        Ok(())
    }
}
