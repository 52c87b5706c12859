//! Blocking client for OpenAI-compatible chat completion endpoints.

use std::time::Duration;

use lift_config::AssistantSettings;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::{AssistantError, CompletionService};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

pub struct ChatCompletionClient {
    client: Client,
    settings: AssistantSettings,
    api_key: String,
}

impl ChatCompletionClient {
    pub fn new(
        settings: AssistantSettings,
        api_key: impl Into<String>,
    ) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            settings,
            api_key: api_key.into(),
        })
    }

    /// Read the API key from the environment variable named in `settings`.
    pub fn from_env(settings: AssistantSettings) -> Result<Self, AssistantError> {
        let api_key = std::env::var(&settings.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AssistantError::MissingApiKey(settings.api_key_env.clone()))?;
        Self::new(settings, api_key)
    }
}

impl CompletionService for ChatCompletionClient {
    fn complete(&self, system: &str, prompt: &str) -> Result<String, AssistantError> {
        let request = ChatRequest {
            model: &self.settings.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        tracing::debug!(
            endpoint = %self.settings.endpoint,
            model = %self.settings.model,
            "requesting completion"
        );
        let response: ChatResponse = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AssistantError::MalformedResponse("no message content in first choice".to_string())
            })
    }
}
