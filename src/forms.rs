//! Operator product form

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    pricing::Price,
    products::{NewProduct, Product, ProductId},
};

/// Errors raised by the product form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// The name is blank.
    #[error("Please enter a product name first.")]
    MissingName,

    /// The category is blank.
    #[error("Please enter a category.")]
    MissingCategory,

    /// The image URL is blank.
    #[error("Please enter an image URL.")]
    MissingImage,

    /// The price is below zero.
    #[error("Price cannot be negative.")]
    NegativePrice,
}

/// Check the required product fields.
///
/// # Errors
///
/// Returns the [`FormError`] for the first blank required field, or
/// [`FormError::NegativePrice`] if the price is below zero.
pub fn check_details(
    name: &str,
    category: &str,
    image_url: &str,
    price: &Price,
) -> Result<(), FormError> {
    if name.trim().is_empty() {
        return Err(FormError::MissingName);
    }

    if category.trim().is_empty() {
        return Err(FormError::MissingCategory);
    }

    if image_url.trim().is_empty() {
        return Err(FormError::MissingImage);
    }

    if price.to_minor_units() < 0 {
        return Err(FormError::NegativePrice);
    }

    Ok(())
}

/// Whether the form creates a product or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Adding a new product
    Create,

    /// Editing the product with this identifier
    Edit(ProductId),
}

/// Identifies one description-generation request issued from a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket(u64);

/// What happened to a finished generation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The description field was replaced.
    Applied,

    /// The form was closed or a newer request was issued; the text was dropped.
    Stale,
}

/// What submitting the form asks the catalog to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductSubmission {
    /// Add a new product
    Create(NewProduct),

    /// Replace an existing product
    Update(Product),
}

/// Add/edit form state for a single product.
#[derive(Debug, Clone)]
pub struct ProductForm {
    mode: FormMode,

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

    latest_ticket: u64,
    generating: bool,
    open: bool,
}

impl ProductForm {
    /// An empty form for a new product priced in `currency`.
    pub fn create(currency: &'static Currency) -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            description: String::new(),
            price: Money::from_minor(0, currency),
            image_url: String::new(),
            category: String::new(),
            stock: 0,
            latest_ticket: 0,
            generating: false,
            open: true,
        }
    }

    /// A form pre-filled from an existing product.
    pub fn edit(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit(product.id),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            category: product.category.clone(),
            stock: product.stock,
            latest_ticket: 0,
            generating: false,
            open: true,
        }
    }

    /// Create or edit.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Start a description request for the current name.
    ///
    /// Issuing a new request supersedes any request still in flight.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingName`] if the name is blank.
    pub fn begin_generation(&mut self) -> Result<GenerationTicket, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }

        self.latest_ticket = self.latest_ticket.wrapping_add(1);
        self.generating = true;

        Ok(GenerationTicket(self.latest_ticket))
    }

    /// Deliver the text for a request started with [`Self::begin_generation`].
    ///
    /// Only the latest request on an open form may replace the description.
    pub fn finish_generation(
        &mut self,
        ticket: GenerationTicket,
        description: String,
    ) -> GenerationOutcome {
        if !self.open || ticket.0 != self.latest_ticket {
            return GenerationOutcome::Stale;
        }

        self.description = description;
        self.generating = false;

        GenerationOutcome::Applied
    }

    /// Whether a request is in flight.
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Close the form; results arriving afterwards are discarded.
    pub fn close(&mut self) {
        self.open = false;
        self.generating = false;
    }

    /// Whether the form is still open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Turn the form contents into a catalog request.
    ///
    /// The form is left untouched so a refused submission can be corrected.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] if a required field is blank or the price is
    /// negative.
    pub fn submit(&self) -> Result<ProductSubmission, FormError> {
        check_details(&self.name, &self.category, &self.image_url, &self.price)?;

        let details = NewProduct {
            name: self.name.trim().to_owned(),
            description: self.description.clone(),
            price: self.price,
            image_url: self.image_url.trim().to_owned(),
            category: self.category.trim().to_owned(),
            stock: self.stock,
        };

        Ok(match self.mode {
            FormMode::Create => ProductSubmission::Create(details),
            FormMode::Edit(id) => ProductSubmission::Update(Product::from_new(id, details)),
        })
    }
}

/// Quantity chooser on the product detail view.
///
/// Starts at one and never drops below one. Stock is not consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityPicker(u32);

impl QuantityPicker {
    /// Current quantity.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Raise the quantity by one.
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Lower the quantity by one, stopping at one.
    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1).max(1);
    }
}

impl Default for QuantityPicker {
    fn default() -> Self {
        Self(1)
    }
}
