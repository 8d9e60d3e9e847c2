use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

#[cfg(test)]
use mockall::automock;

/// Boundary to the hosted generative-text endpoint. The prompt is forwarded
/// unmodified; the return value is the raw completion text.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
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
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<SecretString>,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.gemini_api_base.trim_end_matches('/'),
            config.gemini_model
        );

        Self {
            http: reqwest::Client::new(),
            api_key: config.gemini_api_key.clone(),
            endpoint,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        // A missing credential fails the request before any network traffic.
        let api_key = self.api_key.as_ref().ok_or(AppError::MissingCredential)?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let response_text = response
                .text()
                .await
                .unwrap_or_else(|_| "could not read response body".to_string());
            log::error!("Model endpoint returned {}: {}", status, response_text);
            return Err(AppError::upstream_with_details(
                format!("Model endpoint returned {}", status),
                response_text,
            ));
        }

        let completion: GenerateContentResponse = response.json().await.map_err(|e| {
            AppError::upstream_with_details("Model response was not valid JSON", e.to_string())
        })?;

        extract_completion_text(completion)
    }
}

fn extract_completion_text(response: GenerateContentResponse) -> AppResult<String> {
    if let Some(feedback) = response.prompt_feedback {
        if let Some(reason) = feedback.block_reason {
            return Err(AppError::upstream_with_details(
                "Prompt was blocked by the model",
                reason,
            ));
        }
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AppError::upstream("Model returned no candidates"))?;

    let content = candidate
        .content
        .ok_or_else(|| AppError::upstream("Model candidate had no content"))?;

    let text: String = content.parts.into_iter().map(|part| part.text).collect();
    if text.is_empty() {
        return Err(AppError::upstream("Model returned an empty completion"));
    }

    Ok(text)
}
