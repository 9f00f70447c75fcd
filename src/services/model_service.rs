use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    errors::{GenerationError, GenerationResult},
};

/// The outbound boundary of the generation core: one system instruction, one
/// user instruction, one text completion back. Everything behind it (auth,
/// transport, rate limits) is opaque and surfaces as a provider error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> GenerationResult<String>;
}

/// OpenAI chat-completion backed provider. Holds only read-only
/// configuration; safe to share across concurrent requests.
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiProvider {
    pub fn new(config: &Config) -> Self {
        let openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, system: &str, user: &str) -> GenerationResult<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system)
                    .build()
                    .map_err(|e| GenerationError::Provider(e.to_string()))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user)
                    .build()
                    .map_err(|e| GenerationError::Provider(e.to_string()))?
                    .into(),
            ])
            .build()
            .map_err(|e| GenerationError::Provider(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| GenerationError::Provider(e.to_string()))?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| GenerationError::Provider("completion had no content".to_string()))
    }
}
