//! Ollama generation client.
//!
//! Talks to an Ollama-compatible server: `POST /api/generate` for text
//! completion and `GET /api/tags` for model listing. The generate call is
//! non-streaming, makes exactly one attempt, and enforces a per-request
//! timeout.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{RagError, Result};

/// Default Ollama server URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "llama2";

/// Default per-request timeout for generation calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A text-generation capability: prompt in, generated text out.
///
/// On network failure, non-200 status, or timeout the call fails with a
/// descriptive [`RagError::Generation`] rather than blocking or returning
/// an empty string.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate text for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// List the model names the backend reports. Diagnostics only; the
    /// retrieval core never calls this.
    async fn list_models(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

/// A [`Generator`] backed by an Ollama-compatible HTTP endpoint.
///
/// # Example
///
/// ```rust,ignore
/// use ollama_rag::ollama::OllamaClient;
///
/// let client = OllamaClient::new("http://localhost:11434")
///     .with_model("llama2")
///     .with_timeout(std::time::Duration::from_secs(30));
/// let answer = client.generate("Why is the sky blue?").await?;
/// ```
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OllamaClient {
    /// Create a client for the given base URL (e.g. `http://localhost:11434`).
    ///
    /// Uses the default model and timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the model name passed in generation requests.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the per-request timeout for generation calls.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn generation_error(&self, message: String) -> RagError {
        RagError::Generation { endpoint: self.base_url.clone(), message }
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Deserialize)]
struct TagsResponse {
    models: Vec<ModelDescriptor>,
}

#[derive(Deserialize)]
struct ModelDescriptor {
    name: String,
}

#[async_trait]
impl Generator for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(model = %self.model, prompt_len = prompt.len(), "sending generation request");

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .timeout(self.timeout)
            .json(&GenerateRequest { model: &self.model, prompt, stream: false })
            .send()
            .await
            .map_err(|e| {
                error!(endpoint = %self.base_url, error = %e, "generation request failed");
                self.generation_error(format!("request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(endpoint = %self.base_url, %status, "generation endpoint returned error");
            return Err(self.generation_error(format!("endpoint returned {status}: {body}")));
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| {
            error!(endpoint = %self.base_url, error = %e, "failed to parse generation response");
            self.generation_error(format!("failed to parse response: {e}"))
        })?;

        Ok(parsed.response)
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.generation_error(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(self.generation_error(format!("endpoint returned {status}")));
        }

        let parsed: TagsResponse = response
            .json()
            .await
            .map_err(|e| self.generation_error(format!("failed to parse response: {e}")))?;

        Ok(parsed.models.into_iter().map(|m| m.name).collect())
    }
}
