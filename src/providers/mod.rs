//! Chat-completion providers
//!
//! Thin clients for OpenAI-compatible chat-completion APIs. Each call sends a
//! single user message and returns the first choice.

pub mod groq;
pub mod openrouter;

use crate::types::{ChatMessage, ModelInfo};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub use groq::GroqClient;
pub use openrouter::OpenRouterClient;

/// Provider errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Please enter your {0} API key")]
    MissingApiKey(&'static str),
    #[error("Please enter a prompt")]
    EmptyPrompt,
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{provider} API error: {message}")]
    Api {
        provider: &'static str,
        message: String,
    },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Unknown provider: {0} (expected groq or openrouter)")]
    UnknownProvider(String),
}

/// Token accounting reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Generated text plus what the provider said about it
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub content: String,
    /// Model that answered; the requested one when the provider doesn't say
    pub model: String,
    pub usage: Option<Usage>,
}

/// A chat-completion backend
#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &'static str;
    fn default_model(&self) -> &str;
    /// Send `prompt` as a single user message; `None` uses the default model
    async fn generate(&self, prompt: &str, model: Option<&str>) -> Result<Completion, ProviderError>;
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError>;
}

/// Which backend to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Groq,
    OpenRouter,
}

impl ProviderKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "Groq",
            ProviderKind::OpenRouter => "OpenRouter",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProviderKind::Groq => "groq",
            ProviderKind::OpenRouter => "openrouter",
        })
    }
}

impl FromStr for ProviderKind {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "groq" => Ok(ProviderKind::Groq),
            "openrouter" | "open-router" => Ok(ProviderKind::OpenRouter),
            other => Err(ProviderError::UnknownProvider(other.to_string())),
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    model: Option<String>,
    usage: Option<Usage>,
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Client shared by every request a provider makes
pub(crate) fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client, ProviderError> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}

/// Blank keys count as missing; blank prompts are rejected before any request
pub(crate) fn require_input<'a>(
    provider: &'static str,
    api_key: Option<&'a str>,
    prompt: &str,
) -> Result<&'a str, ProviderError> {
    let key = api_key
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or(ProviderError::MissingApiKey(provider))?;

    if prompt.trim().is_empty() {
        return Err(ProviderError::EmptyPrompt);
    }

    Ok(key)
}

/// `error.message` from an error body, if there is one
fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .ok()?
        .error?
        .message
        .filter(|m| !m.trim().is_empty())
}

/// Send a prepared chat-completion request and pull out the first choice
pub(crate) async fn execute_chat(
    request: reqwest::RequestBuilder,
    provider: &'static str,
    requested_model: &str,
    fallback_message: impl FnOnce(reqwest::StatusCode) -> String,
) -> Result<Completion, ProviderError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = api_error_message(&body).unwrap_or_else(|| fallback_message(status));
        tracing::error!("Error calling {} API ({}): {}", provider, status, message);
        return Err(ProviderError::Api { provider, message });
    }

    let parsed: ChatCompletionResponse = serde_json::from_str(&body)
        .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    // Some gateways report failures inside a 200 body
    if let Some(message) = parsed.error.and_then(|e| e.message) {
        return Err(ProviderError::Api { provider, message });
    }

    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| ProviderError::InvalidResponse("No response content from model".into()))?;

    let model = parsed.model.unwrap_or_else(|| requested_model.to_string());
    tracing::debug!("{} answered with {} chars from {}", provider, content.len(), model);

    Ok(Completion {
        content,
        model,
        usage: parsed.usage,
    })
}

/// Fetch a JSON body, mapping non-success statuses like chat requests do
pub(crate) async fn execute_json<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
    provider: &'static str,
) -> Result<T, ProviderError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = api_error_message(&body).unwrap_or_else(|| status_text(status));
        return Err(ProviderError::Api { provider, message });
    }

    serde_json::from_str(&body)
        .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))
}

pub(crate) fn status_text(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

#[cfg(test)]
pub(crate) mod test_support {
    //! One-shot HTTP stub for provider tests

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// What the stub received
    pub struct Captured {
        pub head: String,
        pub body: String,
    }

    impl Captured {
        pub fn header(&self, name: &str) -> Option<String> {
            self.head.lines().skip(1).find_map(|line| {
                let (key, value) = line.split_once(':')?;
                key.trim()
                    .eq_ignore_ascii_case(name)
                    .then(|| value.trim().to_string())
            })
        }

        pub fn request_line(&self) -> &str {
            self.head.lines().next().unwrap_or_default()
        }

        pub fn json(&self) -> serde_json::Value {
            serde_json::from_str(&self.body).unwrap()
        }
    }

    /// Client without proxy settings so requests reach the stub
    pub fn client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }

    /// Answer exactly one request with `status` and a JSON `body`
    pub async fn serve_once(status: u16, body: &str) -> (String, JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let body = body.to_string();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf: Vec<u8> = Vec::new();
            let mut chunk = [0u8; 4096];

            let head_end = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before headers");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos;
                }
            };

            let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (key, value) = line.split_once(':')?;
                    key.trim()
                        .eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);

            let body_start = head_end + 4;
            while buf.len() < body_start + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before body");
                buf.extend_from_slice(&chunk[..n]);
            }
            let request_body =
                String::from_utf8_lossy(&buf[body_start..body_start + content_length]).to_string();

            let reason = match status {
                200 => "OK",
                400 => "Bad Request",
                401 => "Unauthorized",
                429 => "Too Many Requests",
                _ => "Internal Server Error",
            };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            Captured {
                head,
                body: request_body,
            }
        });

        (format!("http://{}", addr), handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parsing() {
        assert_eq!("groq".parse::<ProviderKind>().unwrap(), ProviderKind::Groq);
        assert_eq!(" OpenRouter ".parse::<ProviderKind>().unwrap(), ProviderKind::OpenRouter);
        assert!(matches!(
            "ollama".parse::<ProviderKind>(),
            Err(ProviderError::UnknownProvider(_))
        ));
        assert_eq!(ProviderKind::OpenRouter.to_string(), "openrouter");
    }

    #[test]
    fn test_require_input() {
        assert!(matches!(
            require_input("Groq", None, "hi"),
            Err(ProviderError::MissingApiKey("Groq"))
        ));
        assert!(matches!(
            require_input("Groq", Some("   "), "hi"),
            Err(ProviderError::MissingApiKey(_))
        ));
        assert!(matches!(
            require_input("Groq", Some("gsk"), " \n "),
            Err(ProviderError::EmptyPrompt)
        ));
        assert_eq!(require_input("Groq", Some(" gsk "), "hi").unwrap(), "gsk");
    }

    #[test]
    fn test_api_error_message() {
        assert_eq!(
            api_error_message(r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#).as_deref(),
            Some("Invalid API Key")
        );
        assert_eq!(api_error_message(r#"{"error":{}}"#), None);
        assert_eq!(api_error_message("<html>bad gateway</html>"), None);
    }

    #[test]
    fn test_missing_key_message() {
        assert_eq!(
            ProviderError::MissingApiKey("Groq").to_string(),
            "Please enter your Groq API key"
        );
    }
}
