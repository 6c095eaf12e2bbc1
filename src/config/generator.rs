//! Generator Config

use clap::Args;

/// Default Generative Language API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for product descriptions.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Description generator settings.
#[derive(Debug, Clone, Args)]
pub struct GeneratorConfig {
    /// Generative Language API key; descriptions fall back to a placeholder when unset
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model name
    #[arg(long = "generator-model", env = "GENERATOR_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// API base URL
    #[arg(
        long = "generator-endpoint",
        env = "GENERATOR_ENDPOINT",
        default_value = DEFAULT_ENDPOINT
    )]
    pub endpoint: String,
}
