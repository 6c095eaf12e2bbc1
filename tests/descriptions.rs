//! Integration tests for description generation on the product form

use std::sync::Arc;

use rusty_money::iso::USD;
use testresult::TestResult;

use storefront::{
    descriptions::{
        Copywriter, DescriptionError, FAILED_FALLBACK, MockDescriptionGenerator,
        NOT_CONFIGURED_FALLBACK,
    },
    forms::{FormError, GenerationOutcome, ProductForm},
};

#[tokio::test]
async fn generated_text_fills_the_form() -> TestResult {
    let mut generator = MockDescriptionGenerator::new();

    generator
        .expect_generate()
        .once()
        .withf(|name| name == "Widget")
        .return_once(|_| Ok("A sleek widget for modern living.\n".to_owned()));

    let copywriter = Copywriter::new(Arc::new(generator));

    let mut form = ProductForm::create(USD);
    form.name = "Widget".to_owned();

    let ticket = form.begin_generation()?;
    assert!(form.is_generating());

    let text = copywriter.describe(&form.name).await;

    assert_eq!(form.finish_generation(ticket, text), GenerationOutcome::Applied);
    assert!(!form.is_generating());
    assert_eq!(form.description, "A sleek widget for modern living.");

    Ok(())
}

#[tokio::test]
async fn result_after_closing_the_form_is_discarded() -> TestResult {
    let mut generator = MockDescriptionGenerator::new();

    generator
        .expect_generate()
        .once()
        .return_once(|_| Ok("Too late.".to_owned()));

    let copywriter = Copywriter::new(Arc::new(generator));

    let mut form = ProductForm::create(USD);
    form.name = "Widget".to_owned();
    form.description = "Written by hand".to_owned();

    let ticket = form.begin_generation()?;
    form.close();

    let text = copywriter.describe("Widget").await;

    assert_eq!(form.finish_generation(ticket, text), GenerationOutcome::Stale);
    assert_eq!(form.description, "Written by hand");

    Ok(())
}

#[tokio::test]
async fn upstream_failure_yields_failed_fallback() {
    let mut generator = MockDescriptionGenerator::new();

    generator.expect_generate().once().return_once(|_| {
        Err(DescriptionError::UnexpectedResponse(
            "generateContent failed with status 500".to_owned(),
        ))
    });

    let copywriter = Copywriter::new(Arc::new(generator));

    assert_eq!(copywriter.describe("Widget").await, FAILED_FALLBACK);
}

#[tokio::test]
async fn missing_credentials_yield_placeholder() {
    let copywriter = Copywriter::unconfigured();

    assert_eq!(copywriter.describe("Widget").await, NOT_CONFIGURED_FALLBACK);
}

#[test]
fn generation_needs_a_name() {
    let mut form = ProductForm::create(USD);
    form.name = "   ".to_owned();

    let result = form.begin_generation();

    assert_eq!(result, Err(FormError::MissingName));
    assert_eq!(
        FormError::MissingName.to_string(),
        "Please enter a product name first."
    );
    assert!(!form.is_generating());
}
