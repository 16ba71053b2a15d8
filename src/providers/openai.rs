// src/providers/openai.rs

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::errors::{Result, SolveError};
use crate::providers::{ChatMessage, CompletionClient, ProviderConfig};

/// Talks to any backend exposing the OpenAI chat-completions API.
#[derive(Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

impl OpenAICompatibleClient {
    /// Creates a new `OpenAICompatibleClient`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl CompletionClient for OpenAICompatibleClient {
    async fn complete(&self, provider: &ProviderConfig, messages: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/chat/completions", provider.endpoint().trim_end_matches('/'));

        log::info!(
            "📡 Calling {}: {} with model: {}",
            provider.provider.display_name(),
            url,
            provider.model_name
        );

        let body = ChatCompletionRequest {
            model: provider.model_name,
            messages,
        };

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&provider.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::info!(
            "📥 {} response status: {} ({}ms)",
            provider.provider.display_name(),
            status,
            latency_ms
        );

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(SolveError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let completion: ChatCompletionResponse = resp.json().await?;

        completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| SolveError::UnexpectedResponse("No choices in response".to_string()))?
            .message
            .content
            .ok_or_else(|| SolveError::UnexpectedResponse("First choice has no message content".to_string()))
    }
}
