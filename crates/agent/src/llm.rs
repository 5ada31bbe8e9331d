use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use pathwise_core::config::{LlmConfig, LlmProvider};

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

/// Chat-completions client for OpenAI-compatible endpoints.
///
/// All three supported providers expose the same wire shape: OpenAI natively,
/// Anthropic and Ollama through their compatibility endpoints.
pub struct HttpLlmClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    max_retries: u32,
}

impl HttpLlmClient {
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let base_url = match (&config.base_url, config.provider) {
            (Some(base_url), _) => base_url.trim_end_matches('/').to_string(),
            (None, LlmProvider::OpenAi) => "https://api.openai.com".to_string(),
            (None, LlmProvider::Anthropic) => "https://api.anthropic.com".to_string(),
            (None, LlmProvider::Ollama) => {
                return Err(anyhow!("ollama provider requires a base_url"));
            }
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build llm http client")?;

        Ok(Self {
            http,
            endpoint: format!("{base_url}/v1/chat/completions"),
            api_key: config.api_key.as_ref().map(|key| key.expose_secret().to_string()),
            model: config.model.clone(),
            max_retries: config.max_retries,
        })
    }

    async fn attempt(&self, request: &ChatRequest<'_>) -> Result<String> {
        let mut builder = self.http.post(&self.endpoint).json(request);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await.context("llm request failed")?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("llm endpoint returned {status}: {body}"));
        }

        let parsed: ChatResponse =
            response.json().await.context("llm response was not valid json")?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| anyhow!("llm response contained no completion text"))?;

        Ok(content)
    }
}

#[async_trait]
impl LlmClient for HttpLlmClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: system_prompt },
                ChatMessage { role: "user", content: user_prompt },
            ],
            temperature: 0.2,
            max_tokens: 1500,
        };

        let mut last_error = None;
        for attempt in 0..=self.max_retries {
            match self.attempt(&request).await {
                Ok(content) => return Ok(content),
                Err(error) => {
                    tracing::warn!(
                        event_name = "llm_attempt_failed",
                        attempt,
                        max_retries = self.max_retries,
                        error = %error,
                    );
                    last_error = Some(error);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("llm completion failed")))
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
