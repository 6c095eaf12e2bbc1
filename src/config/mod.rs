//! Storefront configuration module

use std::path::PathBuf;

use clap::Parser;

pub use crate::config::{
    generator::GeneratorConfig,
    logging::{LogFormat, LoggingConfig},
};

pub(crate) mod generator;
pub(crate) mod logging;

/// Storefront configuration
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront state and navigation core", long_about = None)]
pub struct StorefrontConfig {
    /// YAML catalog fixture replacing the built-in seed catalog
    #[arg(long, env = "STOREFRONT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Product description generator settings.
    #[command(flatten)]
    pub generator: GeneratorConfig,
}

impl StorefrontConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
