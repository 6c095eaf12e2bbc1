//! Storefront Walkthrough
//!
//! Drives a storefront through a customer purchase and an operator edit.
//!
//! Use `--catalog` (or `STOREFRONT_CATALOG`) to seed from another YAML file
//! Set `API_KEY` to draft the new product's description with the hosted model

use anyhow::Result;
use rusty_money::Money;

use storefront::{
    checkout::ShippingDetails,
    config::StorefrontConfig,
    descriptions::Copywriter,
    forms::ProductForm,
    observability::init_subscriber,
    router::View,
    session::Role,
    storefront::{ChangeLog, Storefront},
};

/// Storefront Walkthrough
#[tokio::main]
#[expect(clippy::print_stdout, reason = "Example code")]
pub async fn main() -> Result<()> {
    let config = StorefrontConfig::load()?;

    init_subscriber(&config.logging)?;

    let mut store = Storefront::from_config(&config)?.observed_by(ChangeLog::default());
    let copywriter = Copywriter::from_config(&config.generator);

    println!("Catalog ({}):", store.currency().iso_alpha_code);

    for product in store.catalog().list() {
        println!(
            "  #{:<3} {:<24} {:>10}  {}",
            product.id,
            product.name,
            product.price.to_string(),
            product.availability()
        );
    }

    let picks: Vec<_> = store.catalog().list().iter().take(2).map(|p| p.id).collect();

    store.login(Role::Customer);

    for (quantity, id) in (1..).zip(picks) {
        store.view_product(id);
        store.add_to_cart(id, quantity)?;
        store.back();
    }

    store.navigate(View::Cart);
    store.navigate(View::Checkout);

    let summary = store.checkout_summary()?;

    println!();
    println!("Checkout: {} items", store.cart_item_count());
    println!("  Subtotal {}", summary.subtotal);
    println!("  Tax      {}", summary.tax);
    println!("  Total    {}", summary.total);

    let order = store.place_order(&ShippingDetails::new(
        "Ada Lovelace",
        "ada@example.com",
        "12 Analytical Way, London",
    ))?;

    println!();
    println!(
        "Placed {} for {} ({}), now viewing {}",
        order.id,
        order.total,
        order.status,
        store.view()
    );

    store.login(Role::Operator);

    let mut form = ProductForm::create(store.currency());
    form.name = "Orbit Kettle".to_owned();
    form.price = Money::from_minor(39_00, store.currency());
    form.image_url = "https://picsum.photos/seed/kettle/600/400".to_owned();
    form.category = "Kitchen".to_owned();
    form.stock = 12;

    let ticket = form.begin_generation()?;
    let description = copywriter.describe(&form.name).await;
    form.finish_generation(ticket, description);

    let added = store.submit_product(form.submit()?)?;

    println!();

    if let Some(product) = store.catalog().get(added) {
        println!("Added #{} {}: {}", product.id, product.name, product.description);
    }

    store.navigate(View::AdminDashboard);

    println!(
        "Dashboard: {} products, {} orders",
        store.catalog().len(),
        store.all_orders().map_or(0, <[_]>::len)
    );
    println!("Changes observed: {:?}", store.observer().changes());

    Ok(())
}
