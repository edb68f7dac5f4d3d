//! Ollama chat backend.
//!
//! Speaks Ollama's `/api/generate` endpoint with streaming disabled: one
//! request per generation, one JSON body carrying the full response text.
//! Image attachments travel base64-encoded in the request's `images` array.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use tracing::info;

use filabel_core::{BackendError, ChatBackend};

/// Default endpoint for a local Ollama install.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Chat backend driving one fixed Ollama model.
///
/// No retries and no timeout of its own: a failed call is terminal, and
/// callers wanting a deadline configure it on their side of the socket.
pub struct OllamaChat {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    images: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaChat {
    /// Create a backend for `model` at the given base URL.
    ///
    /// `base_url` should be like `http://localhost:11434` (no trailing slash).
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    async fn generate(&self, request: &GenerateRequest<'_>) -> Result<String, BackendError> {
        let url = format!("{}/api/generate", self.base_url);

        info!(url = %url, model = %self.model, "requesting generation");
        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Transport(Box::new(e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))?;
        Ok(body.response)
    }
}

#[async_trait]
impl ChatBackend for OllamaChat {
    async fn generate_text(&self, prompt: &str) -> Result<String, BackendError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            images: None,
        };
        self.generate(&request).await
    }

    async fn generate_with_image(
        &self,
        image: &[u8],
        prompt: &str,
    ) -> Result<String, BackendError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            images: Some(vec![STANDARD.encode(image)]),
        };
        self.generate(&request).await
    }
}
