//! Router

use std::fmt::{self, Display, Formatter};

use crate::{products::ProductId, session::Session};

/// Views the storefront can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Product listing
    #[default]
    Catalog,

    /// A single product
    ProductDetail,

    /// Cart contents
    Cart,

    /// Shipping details and totals
    Checkout,

    /// Orders placed by the signed-in user
    OrderHistory,

    /// Catalog management and all orders; operators only
    AdminDashboard,
}

impl View {
    /// The view "back" returns to, if this view has one.
    pub const fn predecessor(self) -> Option<Self> {
        match self {
            Self::ProductDetail | Self::Cart => Some(Self::Catalog),
            Self::Checkout => Some(Self::Cart),
            Self::Catalog | Self::OrderHistory | Self::AdminDashboard => None,
        }
    }

    /// Whether entering this view requires the operator role.
    pub const fn requires_operator(self) -> bool {
        matches!(self, Self::AdminDashboard)
    }
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Catalog => "catalog",
            Self::ProductDetail => "product_detail",
            Self::Cart => "cart",
            Self::Checkout => "checkout",
            Self::OrderHistory => "order_history",
            Self::AdminDashboard => "admin_dashboard",
        })
    }
}

/// Current view plus the product selected for [`View::ProductDetail`].
#[derive(Debug, Clone, Default)]
pub struct Router {
    view: View,
    selected: Option<ProductId>,
}

impl Router {
    /// Start on the catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current view.
    pub fn view(&self) -> View {
        self.view
    }

    /// The selected product, only while on [`View::ProductDetail`].
    pub fn selected_product(&self) -> Option<ProductId> {
        match self.view {
            View::ProductDetail => self.selected,
            _ => None,
        }
    }

    /// Move to `target` and return the view actually entered.
    ///
    /// Operator-only views redirect to the catalog when `session` lacks the
    /// operator role.
    pub fn navigate(&mut self, target: View, session: &Session) -> View {
        let view = if target.requires_operator() && !session.is_operator() {
            View::Catalog
        } else {
            target
        };

        self.enter(view);

        view
    }

    /// Show the detail view for `product`.
    pub fn view_product(&mut self, product: ProductId) {
        self.view = View::ProductDetail;
        self.selected = Some(product);
    }

    /// Return to the predecessor of the current view. Views without one stay put.
    pub fn back(&mut self) -> View {
        if let Some(previous) = self.view.predecessor() {
            self.enter(previous);
        }

        self.view
    }

    /// Return to the catalog, dropping any selection.
    pub fn reset(&mut self) {
        self.enter(View::Catalog);
    }

    fn enter(&mut self, view: View) {
        if view != View::ProductDetail {
            self.selected = None;
        }

        self.view = view;
    }
}
