//! Description Generator Errors

use thiserror::Error;

/// Errors that can occur when requesting a product description.
#[derive(Debug, Error)]
pub enum DescriptionError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-2xx response.
    #[error("unexpected response from generator: {0}")]
    UnexpectedResponse(String),

    /// The API answered without any text.
    #[error("generator returned no text")]
    EmptyResponse,
}
