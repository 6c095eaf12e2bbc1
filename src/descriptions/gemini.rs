//! Generative Language API client for product descriptions.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::descriptions::{DescriptionError, DescriptionGenerator};

const TEMPERATURE: f32 = 0.8;
const TOP_P: f32 = 0.9;

/// Configuration for the Generative Language API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API base URL, e.g. `"https://generativelanguage.googleapis.com/v1beta"`.
    pub endpoint: String,

    /// API key sent with every request.
    pub api_key: String,

    /// Model name, e.g. `"gemini-2.5-flash"`.
    pub model: String,
}

/// HTTP client that asks a hosted model to write product copy.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http: Client,
}

impl GeminiClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

/// Instruction sent to the model for `product_name`.
#[must_use]
pub fn prompt(product_name: &str) -> String {
    format!(
        "Generate a compelling, short e-commerce product description for a product named \
         \"{product_name}\". The description should be one paragraph, between 20-40 words. \
         Focus on modern, exciting features. Do not use markdown."
    )
}

#[async_trait]
impl DescriptionGenerator for GeminiClient {
    async fn generate(&self, product_name: &str) -> Result<String, DescriptionError> {
        let text = prompt(product_name);

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: &text }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
            },
        };

        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(DescriptionError::UnexpectedResponse(format!(
                "generateContent failed with status {status}: {text}"
            )));
        }

        let parsed: GenerateResponse = response.json().await?;

        parsed.text().ok_or(DescriptionError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text parts of the first candidate, concatenated.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;

        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        (!text.trim().is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn prompt_names_the_product() {
        let prompt = prompt("Widget");

        assert!(prompt.contains("a product named \"Widget\""));
        assert!(prompt.contains("between 20-40 words"));
        assert!(prompt.ends_with("Do not use markdown."));
    }

    #[test]
    fn request_body_uses_camel_case_sampling_options() -> TestResult {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
            },
        };

        let value = serde_json::to_value(&body)?;

        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert!(value["generationConfig"]["topP"].is_number());
        assert!(value["generationConfig"]["temperature"].is_number());

        Ok(())
    }

    #[test]
    fn response_text_joins_first_candidate_parts() -> TestResult {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Sleek " }, { "text": "and bold." }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))?;

        assert_eq!(response.text().as_deref(), Some("Sleek and bold."));

        Ok(())
    }

    #[test]
    fn response_without_candidates_has_no_text() -> TestResult {
        let response: GenerateResponse = serde_json::from_value(json!({}))?;

        assert_eq!(response.text(), None);

        Ok(())
    }

    #[test]
    fn url_joins_endpoint_and_model() {
        let client = GeminiClient::new(GeminiConfig {
            endpoint: "https://example.com/v1beta/".to_owned(),
            api_key: "key".to_owned(),
            model: "gemini-2.5-flash".to_owned(),
        });

        assert_eq!(
            client.url(),
            "https://example.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
