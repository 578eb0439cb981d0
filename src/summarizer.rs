//! Chunked headline summarization against a local Ollama server

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::SummarizerConfig;
use crate::error::SummarizeError;

/// Returned when there is nothing to summarize
pub const NO_CONTENT: &str = "No news available to summarize.";

#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: String,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: Option<String>,
}

pub struct Summarizer {
    client: Client,
    config: SummarizerConfig,
}

impl Summarizer {
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizeError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Text returned when the inference server cannot be reached
    pub fn connection_guidance(&self) -> String {
        format!(
            "Could not connect to Ollama. Is it running? Run: `ollama run {}`",
            self.config.model
        )
    }

    /// Summarize `headlines` chunk by chunk and join the partial summaries.
    ///
    /// Per-chunk failures become inline placeholders. Only an unreachable
    /// server aborts the whole call, returning [`Self::connection_guidance`].
    pub async fn summarize(&self, headlines: &[String], topic: &str) -> String {
        if headlines.is_empty() {
            return NO_CONTENT.to_string();
        }

        let chunks = headlines.chunks(self.config.chunk_size.max(1));
        let total = chunks.len();
        let mut summaries = Vec::with_capacity(total);

        for (i, chunk) in chunks.enumerate() {
            info!(
                "Summarizing chunk {}/{} ({} headlines) with {}",
                i + 1,
                total,
                chunk.len(),
                self.config.model
            );

            match self.summarize_chunk(chunk, topic).await {
                Ok(Some(part)) => summaries.push(part),
                Ok(None) => debug!("Chunk {} produced an empty summary", i + 1),
                Err(SummarizeError::Unreachable(e)) => {
                    warn!("Ollama unreachable at {}: {}", self.config.endpoint, e);
                    return self.connection_guidance();
                }
                Err(e) => {
                    warn!("Chunk {} failed: {}", i + 1, e);
                    summaries.push(e.to_string());
                }
            }
        }

        summaries.join("\n\n").trim().to_string()
    }

    /// Send a single chunk to the generate endpoint.
    ///
    /// Returns `Ok(None)` when the model answered with empty text.
    pub async fn summarize_chunk(
        &self,
        chunk: &[String],
        topic: &str,
    ) -> Result<Option<String>, SummarizeError> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt: build_prompt(chunk, topic),
            stream: false,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SummarizeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let generated: GenerateResponse = serde_json::from_str(&body)?;
        let text = generated.response.unwrap_or_default();
        let text = text.trim();

        Ok((!text.is_empty()).then(|| text.to_string()))
    }
}

/// Instruction sent for one chunk, one headline per line
pub fn build_prompt(chunk: &[String], topic: &str) -> String {
    format!(
        "Summarize the following recent news headlines about '{}' in clear bullet points:\n\n{}",
        topic,
        chunk.join("\n")
    )
}
