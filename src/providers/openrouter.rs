//! OpenRouter client
//!
//! OpenRouter proxies many vendors behind one OpenAI-compatible endpoint and
//! asks callers to identify themselves with `HTTP-Referer` and `X-Title`.

use crate::providers::{
    build_http_client, execute_chat, require_input, ChatCompletionRequest, ChatProvider, Completion,
    ProviderError,
};
use crate::storage::settings::AppSettings;
use crate::types::{ChatMessage, ModelInfo, ModelPricing};
use async_trait::async_trait;

const PROVIDER: &str = "OpenRouter";

// ============================================================================
// Model catalog
// ============================================================================

/// (id, name, description, prompt price, completion price) per million tokens
const POPULAR_MODELS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "openai/gpt-4o",
        "GPT-4 Omni",
        "Most capable GPT-4 model with vision",
        "$5.00",
        "$15.00",
    ),
    (
        "openai/gpt-4o-mini",
        "GPT-4 Omni Mini",
        "Fast and efficient GPT-4 variant",
        "$0.15",
        "$0.60",
    ),
    (
        "anthropic/claude-3.5-sonnet",
        "Claude 3.5 Sonnet",
        "Latest Claude model with enhanced capabilities",
        "$3.00",
        "$15.00",
    ),
    (
        "anthropic/claude-3-haiku",
        "Claude 3 Haiku",
        "Fastest Claude model for quick tasks",
        "$0.25",
        "$1.25",
    ),
    (
        "meta-llama/llama-3.1-70b-instruct",
        "Llama 3.1 70B",
        "Most capable open-source Llama model",
        "$0.59",
        "$0.79",
    ),
    (
        "meta-llama/llama-3.1-8b-instruct",
        "Llama 3.1 8B",
        "Fast and efficient Llama model",
        "$0.07",
        "$0.07",
    ),
];

/// Models offered in the picker
pub fn popular_models() -> Vec<ModelInfo> {
    POPULAR_MODELS
        .iter()
        .map(|(id, name, description, prompt, completion)| ModelInfo {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            pricing: Some(ModelPricing {
                prompt: prompt.to_string(),
                completion: completion.to_string(),
            }),
        })
        .collect()
}

/// Catalog entry for `id`, if it is one of the popular models
pub fn find_model(id: &str) -> Option<ModelInfo> {
    popular_models().into_iter().find(|m| m.id == id)
}

// ============================================================================
// OpenRouterClient
// ============================================================================

#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    referer: String,
    title: String,
}

impl OpenRouterClient {
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
            api_key: settings.openrouter_key(),
            base_url: settings.openrouter_base_url.clone(),
            model: settings.openrouter_model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.openrouter_max_tokens,
            referer: settings.app_url.clone(),
            title: settings.app_title.clone(),
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

        tracing::info!("Sending prompt to OpenRouter ({})", model);
        let request = self
            .http
            .post(format!(
                "{}/chat/completions",
                self.base_url.trim_end_matches('/')
            ))
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&body);

        execute_chat(request, PROVIDER, model, |_| {
            "Failed to generate content".to_string()
        })
        .await
    }
}

#[async_trait]
impl ChatProvider for OpenRouterClient {
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
        Ok(popular_models())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::test_support::{client, serve_once};
    use crate::storage::settings::DEFAULT_OPENROUTER_MODEL;

    fn stub_client(base: &str) -> OpenRouterClient {
        OpenRouterClient::new(Some("sk-or-test".to_string()))
            .unwrap()
            .with_http_client(client())
            .with_base_url(base)
    }

    #[test]
    fn test_catalog() {
        let models = popular_models();
        assert_eq!(models.len(), 6);
        assert!(models.iter().any(|m| m.id == DEFAULT_OPENROUTER_MODEL));

        let haiku = find_model("anthropic/claude-3-haiku").unwrap();
        assert_eq!(haiku.pricing.unwrap().completion, "$1.25");
        assert!(find_model("openrouter/unknown").is_none());
    }

    #[tokio::test]
    async fn test_generate_sends_identification_headers() {
        let (base, server) = serve_once(
            200,
            r#"{"model":"anthropic/claude-3-haiku","choices":[{"message":{"role":"assistant","content":"Bonjour"}}]}"#,
        )
        .await;

        let completion = stub_client(&base)
            .generate_content("Translate hello", Some("anthropic/claude-3-haiku"))
            .await
            .unwrap();
        assert_eq!(completion.content, "Bonjour");
        assert_eq!(completion.model, "anthropic/claude-3-haiku");
        assert!(completion.usage.is_none());

        let captured = server.await.unwrap();
        assert_eq!(captured.header("x-title").as_deref(), Some("AI Prompt Engineering Tool"));
        assert_eq!(
            captured.header("http-referer").as_deref(),
            Some("https://github.com/markpad/markpad")
        );
        assert_eq!(captured.header("authorization").as_deref(), Some("Bearer sk-or-test"));

        let body = captured.json();
        assert_eq!(body["model"], "anthropic/claude-3-haiku");
        assert_eq!(body["max_tokens"], 2048);
    }

    #[tokio::test]
    async fn test_default_model_used() {
        let (base, server) = serve_once(200, r#"{"choices":[{"message":{"content":"ok"}}]}"#).await;

        let completion = stub_client(&base).generate_content("hi", None).await.unwrap();
        assert_eq!(completion.model, DEFAULT_OPENROUTER_MODEL);
        assert_eq!(server.await.unwrap().json()["model"], DEFAULT_OPENROUTER_MODEL);
    }

    #[tokio::test]
    async fn test_error_fallback_message() {
        let (base, _server) = serve_once(500, "upstream exploded").await;

        let err = stub_client(&base).generate_content("hi", None).await.unwrap_err();
        assert_eq!(err.to_string(), "OpenRouter API error: Failed to generate content");
    }

    #[tokio::test]
    async fn test_error_inside_success_body() {
        let (base, _server) = serve_once(200, r#"{"error":{"message":"No credits left"}}"#).await;

        let err = stub_client(&base).generate_content("hi", None).await.unwrap_err();
        assert_eq!(err.to_string(), "OpenRouter API error: No credits left");
    }

    #[tokio::test]
    async fn test_blank_prompt_rejected() {
        let err = OpenRouterClient::new(Some("k".into()))
            .unwrap()
            .generate_content("   ", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::EmptyPrompt));
    }
}
