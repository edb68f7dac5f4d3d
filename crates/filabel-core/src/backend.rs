//! The chat backend capability consumed by kind classifiers.

use async_trait::async_trait;
use thiserror::Error;

/// Failure of a [`ChatBackend`] call.
///
/// Terminal for the current classification attempt; the core performs no
/// retries and imposes no timeout of its own — callers wrap the backend if
/// they need either, and any resulting failure surfaces here.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced a response.
    #[error("backend request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The backend answered, but not with decodable text.
    #[error("malformed backend response: {0}")]
    Malformed(String),
}

/// A language-model chat service with plain-text and image-grounded generation.
///
/// Concrete backends implement both operations; tests substitute a double
/// returning fixed strings without network access.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Generate free text from a prompt.
    async fn generate_text(&self, prompt: &str) -> Result<String, BackendError>;

    /// Generate free text from a prompt grounded in one image.
    async fn generate_with_image(
        &self,
        image: &[u8],
        prompt: &str,
    ) -> Result<String, BackendError>;
}
