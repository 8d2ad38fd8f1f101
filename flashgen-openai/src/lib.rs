//! Chat-completion client
//!
//! Sends the flashcard prompt as a single user message and returns the text
//! found at `choices[0].message.content`.

use async_trait::async_trait;
use flashgen_core::{CompletionClient, GenerateError};
use serde::{Deserialize, Serialize};

pub mod config;

pub use config::ChatConfig;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Clone, Debug)]
pub struct ChatClient {
    http: reqwest::Client,
    config: ChatConfig,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Result<Self, GenerateError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GenerateError::request_failed(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionClient for ChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage { role: "user", content: prompt }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let endpoint = self.config.endpoint();
        tracing::debug!(%endpoint, model = %self.config.model, "posting chat completion");

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::request_failed(format!("transport error: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::request_failed(format!(
                "chat endpoint returned {status}: {body}"
            )));
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::request_failed(format!("unreadable response body: {e}")))?;

        reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GenerateError::request_failed("no content returned from model"))
    }
}
