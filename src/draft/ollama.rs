//! Draft generator backed by a local Ollama server.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AiConfig;
use crate::draft::prompt::{build_prompt, parse_candidate};
use crate::draft::{DraftCandidate, DraftFuture, DraftGenerator, DraftOptions};
use crate::error::{GitCommitError, Result};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Ollama generate request body
#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    format: &'a str,
    options: GenerateOptions,
}

#[derive(Serialize, Debug)]
struct GenerateOptions {
    temperature: f32,
}

/// Ollama generate response body
#[derive(Deserialize, Debug)]
struct GenerateResponse {
    response: String,
    #[serde(default)]
    model: Option<String>,
}

/// Client for a local Ollama server
pub struct OllamaGenerator {
    client: Client,
    config: AiConfig,
}

impl OllamaGenerator {
    /// Create a generator from explicit settings
    pub fn new(config: AiConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| GitCommitError::draft(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn probe(&self) -> bool {
        let url = self.url("/api/tags");
        debug!(url = %url, "probing draft service");

        match self
            .client
            .get(&url)
            .timeout(self.config.probe_timeout())
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(error = %e, "draft service probe failed");
                false
            }
        }
    }

    async fn request_draft(&self, diff: &str, options: &DraftOptions) -> Result<DraftCandidate> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt: build_prompt(diff, options, self.config.max_diff_chars),
            stream: false,
            format: "json",
            options: GenerateOptions {
                temperature: self.config.temperature,
            },
        };

        let url = self.url("/api/generate");
        info!(url = %url, model = %self.config.model, "requesting commit draft");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .timeout(self.config.generate_timeout())
            .send()
            .await
            .map_err(|e| GitCommitError::draft(format!("request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GitCommitError::draft(format!(
                "HTTP {}: {}",
                status,
                error_text.trim()
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GitCommitError::draft(format!("invalid response body: {}", e)))?;

        debug!(
            model = ?body.model,
            response_len = body.response.len(),
            "received commit draft"
        );

        parse_candidate(&body.response)
    }
}

impl DraftGenerator for OllamaGenerator {
    fn is_available<'a>(&'a self) -> DraftFuture<'a, bool> {
        Box::pin(self.probe())
    }

    fn generate<'a>(
        &'a self,
        diff: &'a str,
        options: &'a DraftOptions,
    ) -> DraftFuture<'a, Result<DraftCandidate>> {
        Box::pin(self.request_draft(diff, options))
    }
}
