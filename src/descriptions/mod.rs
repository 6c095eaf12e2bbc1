//! Product Descriptions
//!
//! Operators can ask a hosted language model to draft a product description.
//! [`Copywriter`] always yields text: missing credentials and upstream failures
//! resolve to fixed fallback messages instead of errors.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, error, warn};

use crate::config::GeneratorConfig;

pub mod errors;
pub mod gemini;

pub use errors::DescriptionError;
pub use gemini::{GeminiClient, GeminiConfig};

/// Returned when no API key is configured.
pub const NOT_CONFIGURED_FALLBACK: &str = "API Key not configured. Please set the API_KEY \
     environment variable. For now, here's a placeholder description for your product.";

/// Returned when the generator fails for any reason.
pub const FAILED_FALLBACK: &str = "Failed to generate AI description. Please write one manually.";

/// Source of generated product copy.
#[automock]
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    /// Draft a short promotional paragraph for `product_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream request fails or yields no text.
    async fn generate(&self, product_name: &str) -> Result<String, DescriptionError>;
}

/// Turns generator results into description text, absorbing failures.
#[derive(Clone)]
pub struct Copywriter {
    generator: Option<Arc<dyn DescriptionGenerator>>,
}

impl std::fmt::Debug for Copywriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Copywriter")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl Copywriter {
    /// A copywriter backed by `generator`.
    pub fn new(generator: Arc<dyn DescriptionGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// A copywriter with no generator; every request yields the
    /// not-configured fallback.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self { generator: None }
    }

    /// Build from configuration. A missing or blank API key leaves the
    /// copywriter unconfigured.
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let Some(api_key) = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
        else {
            warn!("API_KEY not set; product descriptions will use a placeholder");
            return Self::unconfigured();
        };

        Self::new(Arc::new(GeminiClient::new(GeminiConfig {
            endpoint: config.endpoint.clone(),
            api_key: api_key.to_owned(),
            model: config.model.clone(),
        })))
    }

    /// Whether a generator is available.
    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// Description text for `product_name`. Never fails.
    pub async fn describe(&self, product_name: &str) -> String {
        let Some(generator) = &self.generator else {
            return NOT_CONFIGURED_FALLBACK.to_owned();
        };

        match generator.generate(product_name).await {
            Ok(text) => {
                debug!(product = product_name, "description generated");
                text.trim().to_owned()
            }
            Err(source) => {
                error!(product = product_name, "description generation failed: {source}");
                FAILED_FALLBACK.to_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn describe_trims_generated_text() {
        let mut generator = MockDescriptionGenerator::new();

        generator
            .expect_generate()
            .once()
            .withf(|name| name == "Widget")
            .return_once(|_| Ok("  A bold new widget.\n".to_owned()));

        let copywriter = Copywriter::new(Arc::new(generator));

        assert_eq!(copywriter.describe("Widget").await, "A bold new widget.");
    }

    #[tokio::test]
    async fn describe_absorbs_generator_failures() {
        let mut generator = MockDescriptionGenerator::new();

        generator
            .expect_generate()
            .once()
            .return_once(|_| Err(DescriptionError::EmptyResponse));

        let copywriter = Copywriter::new(Arc::new(generator));

        assert_eq!(copywriter.describe("Widget").await, FAILED_FALLBACK);
    }

    #[tokio::test]
    async fn unconfigured_copywriter_uses_placeholder() {
        let copywriter = Copywriter::unconfigured();

        assert!(!copywriter.is_configured());
        assert_eq!(copywriter.describe("Widget").await, NOT_CONFIGURED_FALLBACK);
    }

    #[test]
    fn blank_api_key_is_unconfigured() {
        let config = GeneratorConfig {
            api_key: Some("   ".to_owned()),
            model: "gemini-2.5-flash".to_owned(),
            endpoint: "https://example.com".to_owned(),
        };

        assert!(!Copywriter::from_config(&config).is_configured());
    }

    #[test]
    fn api_key_configures_gemini() {
        let config = GeneratorConfig {
            api_key: Some("secret".to_owned()),
            model: "gemini-2.5-flash".to_owned(),
            endpoint: "https://example.com".to_owned(),
        };

        assert!(Copywriter::from_config(&config).is_configured());
    }
}
