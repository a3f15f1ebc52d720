//! Chat-completion client for the remote suggestion provider

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::SuggestionConfig;
use crate::error::{Result, ScanError};

const SYSTEM_PROMPT: &str = "You are a helpful web development assistant focused on modern web standards and browser compatibility. Always respond with valid JSON.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// `{ choices: [{ message: { content } }] }`; everything else is ignored
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Prompt sent for one API occurrence
pub fn build_prompt(api: &str, context: &str) -> String {
    format!(
        "You are a web development expert specializing in browser compatibility and modern web standards.

API: {api}
Code Context: {context}

This API is either deprecated or not part of the Baseline web platform. Please provide a JSON response with:
1. \"alternative\": A modern, Baseline-supported alternative
2. \"explanation\": Brief explanation of why the original API should be avoided
3. \"codeExample\": A practical code example showing the replacement
4. \"browserSupport\": Browser support information for the suggested alternative

Keep the response concise and practical for developers. Format as valid JSON."
    )
}

/// Client for an OpenAI-compatible chat-completion endpoint
pub struct ChatCompletionClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl ChatCompletionClient {
    /// Build a client; `None` when the config carries no credential
    pub fn from_config(config: &SuggestionConfig) -> Result<Option<Self>> {
        let Some(api_key) = config.credential() else {
            return Ok(None);
        };

        let client = reqwest::Client::builder()
            .user_agent(concat!("baseline-scanner/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Some(Self {
            client,
            url: format!("{}/chat/completions", config.endpoint.trim_end_matches('/')),
            api_key: api_key.to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }))
    }

    /// Ask for a suggestion and return the raw message content
    pub async fn complete(&self, api: &str, context: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_prompt(api, context),
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScanError::ProviderStatus {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        extract_content(&body)
    }
}

/// Pull `choices[0].message.content` out of a response body
fn extract_content(body: &str) -> Result<String> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| ScanError::MalformedResponse {
            message: e.to_string(),
        })?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| ScanError::MalformedResponse {
            message: "response has no message content".to_string(),
        })
}
