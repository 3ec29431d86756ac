use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Sends a prompt to a text-generation backend and returns the raw text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerFetcher: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> AppResult<String>;
}

/// Responses shorter than this (after trimming) count as failed fetches.
pub const MIN_RESPONSE_CHARS: usize = 10;

/// Races one fetch against `cancel`.
///
/// `Ok(None)` means the fetch failed or came back near-empty; callers decide
/// how to degrade. Only cancellation is returned as an error.
pub async fn fetch_or_cancel(
    fetcher: &dyn AnswerFetcher,
    prompt: &str,
    cancel: &CancellationToken,
) -> AppResult<Option<String>> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            log::info!("Generation cancelled while waiting for the model");
            Err(AppError::Cancelled("generation was cancelled".to_string()))
        }
        result = fetcher.generate_text(prompt) => match result {
            Ok(text) if text.trim().chars().count() >= MIN_RESPONSE_CHARS => Ok(Some(text)),
            Ok(text) => {
                log::warn!("Model returned a near-empty response ({} chars)", text.trim().len());
                Ok(None)
            }
            Err(e) => {
                log::warn!("Model request failed: {}", e);
                Ok(None)
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "topK")]
    top_k: i32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: i32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

pub struct GeminiModelService {
    client: Client,
    api_key: SecretString,
    endpoint: String,
}

impl GeminiModelService {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.model_request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.gemini_api_key.clone(),
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.gemini_base_url.trim_end_matches('/'),
                config.gemini_model
            ),
        })
    }

    fn request_body(prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: 0.7,
                top_k: 40,
                top_p: 0.9,
                max_output_tokens: 8192,
            },
        }
    }
}

/// First text part of the first candidate.
fn first_candidate_text(response: GeminiResponse) -> AppResult<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| AppError::ServiceError("invalid response format".to_string()))
}

#[async_trait]
impl AnswerFetcher for GeminiModelService {
    async fn generate_text(&self, prompt: &str) -> AppResult<String> {
        log::debug!("Sending {} char prompt to {}", prompt.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&Self::request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log::error!("Gemini request failed with {}: {}", status, body);
            return Err(AppError::ServiceError(format!(
                "model endpoint returned {}",
                status
            )));
        }

        let envelope: GeminiResponse = response.json().await?;
        first_candidate_text(envelope)
    }
}
