use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::{
    config::QuizConfig,
    error::{AppError, Result},
    models::{
        chat::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Role},
        prompt::ChatPrompt,
    },
};

/// Something that can turn a system + user prompt into completion text.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, api_key: &str, prompt: &ChatPrompt) -> Result<String>;
}

pub struct OpenAiClient {
    http: Client,
    url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiClient {
    pub fn new(config: &QuizConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            url: config.completions_url(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn request_body<'a>(&'a self, prompt: &'a ChatPrompt) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: Role::System, content: &prompt.system },
                ChatMessage { role: Role::User, content: &prompt.user },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl ChatBackend for OpenAiClient {
    async fn complete(&self, api_key: &str, prompt: &ChatPrompt) -> Result<String> {
        debug_log_preview(prompt);
        let resp = self
            .http
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await?;
            tracing::warn!(status = status.as_u16(), "chat completion rejected");
            return Err(AppError::Upstream { status: status.as_u16(), body });
        }

        let parsed: ChatCompletionResponse = resp.json().await?;
        let content = parsed
            .first_content()
            .ok_or_else(|| AppError::External("OpenAI response missing choices[0].message.content".into()))?;
        tracing::debug!(len = content.len(), "chat completion received");
        Ok(content)
    }
}

fn debug_log_preview(prompt: &ChatPrompt) {
    tracing::debug!(
        system.len = prompt.system.len(),
        user.len = prompt.user.len(),
        user.preview = %prompt.user.chars().take(80).collect::<String>(),
        "sending chat completion"
    );
}
