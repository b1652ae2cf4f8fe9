//! Groq client
//!
//! Groq serves an OpenAI-compatible API under `/openai/v1`.

use crate::providers::{
    build_http_client, execute_chat, execute_json, require_input, status_text, ChatCompletionRequest,
    ChatProvider, Completion, ProviderError,
};
use crate::storage::settings::AppSettings;
use crate::types::{ChatMessage, ModelInfo};
use async_trait::async_trait;
use serde::Deserialize;

const PROVIDER: &str = "Groq";

#[derive(Debug, Deserialize)]
struct ModelList {
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
}

#[derive(Debug, Clone)]
pub struct GroqClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GroqClient {
    /// Client with default settings and an explicit key
    pub fn new(api_key: Option<String>) -> Result<Self, ProviderError> {
        Ok(Self {
            api_key,
            ..Self::from_settings(&AppSettings::default())?
        })
    }

    pub fn from_settings(settings: &AppSettings) -> Result<Self, ProviderError> {
        Ok(Self {
            http: build_http_client(settings.request_timeout_secs)?,
            api_key: settings.groq_key(),
            base_url: settings.groq_base_url.clone(),
            model: settings.groq_model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.groq_max_tokens,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Generate content for `prompt`
    pub async fn generate_content(
        &self,
        prompt: &str,
        model: Option<&str>,
    ) -> Result<Completion, ProviderError> {
        let api_key = require_input(PROVIDER, self.api_key.as_deref(), prompt)?;
        let model = model.filter(|m| !m.trim().is_empty()).unwrap_or(self.model.as_str());

        let body = ChatCompletionRequest {
            model,
            messages: vec![ChatMessage::user(prompt)],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        tracing::info!("Sending prompt to Groq ({})", model);
        let request = self
            .http
            .post(self.endpoint("chat/completions"))
            .bearer_auth(api_key)
            .json(&body);

        execute_chat(request, PROVIDER, model, status_text).await
    }

    /// Models the key has access to
    ///
    /// Display names are the id up to the first `:`.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ProviderError::MissingApiKey(PROVIDER))?;

        let request = self.http.get(self.endpoint("models")).bearer_auth(api_key);
        let list: ModelList = execute_json(request, PROVIDER).await.map_err(|e| {
            tracing::error!("Error fetching Groq models: {}", e);
            e
        })?;

        Ok(list
            .data
            .into_iter()
            .map(|entry| {
                let name = entry.id.split(':').next().unwrap_or(&entry.id).to_string();
                ModelInfo::new(entry.id, name)
            })
            .collect())
    }
}

#[async_trait]
impl ChatProvider for GroqClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn default_model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str, model: Option<&str>) -> Result<Completion, ProviderError> {
        self.generate_content(prompt, model).await
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        GroqClient::list_models(self).await
    }
}
