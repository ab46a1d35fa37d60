use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Sends one prompt to a chat-completion service and returns the text of the
/// first choice.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn complete<'a>(&self, prompt: &str, system: Option<&'a str>) -> AppResult<String>;
}

pub struct OpenAiGenerationClient {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
}

impl OpenAiGenerationClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret())
            .with_api_base(&config.openai_api_base);

        // A zero budget makes the first failure final.
        let no_retry = backoff::ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };

        Self {
            client: Client::with_config(openai_config).with_backoff(no_retry),
            model: config.llm_model.clone(),
            temperature: config.llm_temperature,
            max_tokens: config.llm_max_tokens,
            timeout: config.llm_timeout(),
        }
    }

    fn messages(
        &self,
        prompt: &str,
        system: Option<&str>,
    ) -> AppResult<Vec<ChatCompletionRequestMessage>> {
        let mut messages = Vec::with_capacity(2);

        if let Some(system) = system {
            let system_message = ChatCompletionRequestSystemMessageArgs::default()
                .content(system)
                .build()?;
            messages.push(ChatCompletionRequestMessage::System(system_message));
        }

        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?;
        messages.push(ChatCompletionRequestMessage::User(user_message));

        Ok(messages)
    }
}

#[async_trait]
impl GenerationClient for OpenAiGenerationClient {
    async fn complete<'a>(&self, prompt: &str, system: Option<&'a str>) -> AppResult<String> {
        log::debug!(
            "Calling model {} with a {} character prompt",
            self.model,
            prompt.chars().count()
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(self.messages(prompt, system)?)
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()?;

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| {
                AppError::GenerationService(format!(
                    "Model {} did not respond within {}s",
                    self.model,
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| {
                log::warn!("Chat completion request failed: {}", e);
                AppError::from(e)
            })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::GenerationService("Model returned no completion content".to_string())
            })?;

        log::debug!("Received {} characters from {}", content.chars().count(), self.model);
        Ok(content.trim().to_string())
    }
}
