//! Settings storage
//!
//! Manages persistence of provider credentials and generation defaults.

use crate::storage::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";
pub const OPENROUTER_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-70b-versatile";
pub const DEFAULT_OPENROUTER_MODEL: &str = "openai/gpt-4o-mini";
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

const MAX_TOKENS_LIMIT: u32 = 32768;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Groq API key; `GROQ_API_KEY` is used when unset
    #[serde(default)]
    pub groq_api_key: Option<String>,
    /// OpenRouter API key; `OPENROUTER_API_KEY` is used when unset
    #[serde(default)]
    pub openrouter_api_key: Option<String>,
    #[serde(default = "default_groq_model")]
    pub groq_model: String,
    #[serde(default = "default_openrouter_model")]
    pub openrouter_model: String,
    /// Sampling temperature (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_groq_max_tokens")]
    pub groq_max_tokens: u32,
    #[serde(default = "default_openrouter_max_tokens")]
    pub openrouter_max_tokens: u32,
    #[serde(default = "default_groq_base_url")]
    pub groq_base_url: String,
    #[serde(default = "default_openrouter_base_url")]
    pub openrouter_base_url: String,
    /// Sent to OpenRouter as HTTP-Referer
    #[serde(default = "default_app_url")]
    pub app_url: String,
    /// Sent to OpenRouter as X-Title
    #[serde(default = "default_app_title")]
    pub app_title: String,
    /// Record every generated response in the history
    #[serde(default = "default_true")]
    pub save_responses: bool,
    /// File name for new markdown documents
    #[serde(default = "default_document_name")]
    pub document_name: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

fn default_groq_model() -> String {
    DEFAULT_GROQ_MODEL.to_string()
}

fn default_openrouter_model() -> String {
    DEFAULT_OPENROUTER_MODEL.to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_groq_max_tokens() -> u32 {
    1024
}

fn default_openrouter_max_tokens() -> u32 {
    2048
}

fn default_groq_base_url() -> String {
    DEFAULT_GROQ_BASE_URL.to_string()
}

fn default_openrouter_base_url() -> String {
    DEFAULT_OPENROUTER_BASE_URL.to_string()
}

fn default_app_url() -> String {
    "https://github.com/markpad/markpad".to_string()
}

fn default_app_title() -> String {
    "AI Prompt Engineering Tool".to_string()
}

fn default_true() -> bool {
    true
}

fn default_document_name() -> String {
    crate::storage::documents::DEFAULT_DOCUMENT_NAME.to_string()
}

fn default_timeout() -> u64 {
    120
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            openrouter_api_key: None,
            groq_model: default_groq_model(),
            openrouter_model: default_openrouter_model(),
            temperature: default_temperature(),
            groq_max_tokens: default_groq_max_tokens(),
            openrouter_max_tokens: default_openrouter_max_tokens(),
            groq_base_url: default_groq_base_url(),
            openrouter_base_url: default_openrouter_base_url(),
            app_url: default_app_url(),
            app_title: default_app_title(),
            save_responses: true,
            document_name: default_document_name(),
            request_timeout_secs: default_timeout(),
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Clamps numeric ranges and restores defaults for blank strings.
    pub fn validate(&mut self) {
        if !self.temperature.is_finite() {
            self.temperature = default_temperature();
        }
        self.temperature = self.temperature.clamp(0.0, 2.0);
        self.groq_max_tokens = self.groq_max_tokens.clamp(1, MAX_TOKENS_LIMIT);
        self.openrouter_max_tokens = self.openrouter_max_tokens.clamp(1, MAX_TOKENS_LIMIT);

        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = default_timeout();
        }

        fix_blank(&mut self.groq_model, default_groq_model);
        fix_blank(&mut self.openrouter_model, default_openrouter_model);
        fix_blank(&mut self.groq_base_url, default_groq_base_url);
        fix_blank(&mut self.openrouter_base_url, default_openrouter_base_url);
        fix_blank(&mut self.app_url, default_app_url);
        fix_blank(&mut self.app_title, default_app_title);
        fix_blank(&mut self.document_name, default_document_name);

        for key in [&mut self.groq_api_key, &mut self.openrouter_api_key] {
            if key.as_deref().is_some_and(|k| k.trim().is_empty()) {
                *key = None;
            }
        }
    }

    /// Groq key from settings, falling back to the environment
    pub fn groq_key(&self) -> Option<String> {
        resolve_key(self.groq_api_key.as_deref(), GROQ_API_KEY_ENV)
    }

    /// OpenRouter key from settings, falling back to the environment
    pub fn openrouter_key(&self) -> Option<String> {
        resolve_key(self.openrouter_api_key.as_deref(), OPENROUTER_API_KEY_ENV)
    }
}

fn fix_blank(value: &mut String, default: fn() -> String) {
    if value.trim().is_empty() {
        *value = default();
    }
}

fn resolve_key(configured: Option<&str>, env_var: &str) -> Option<String> {
    configured
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .or_else(|| {
            std::env::var(env_var)
                .ok()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
        })
}

/// Load settings from a specific file, falling back to defaults
pub fn load_settings_from(path: &Path) -> AppSettings {
    match load_settings_internal(path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

fn load_settings_internal(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to {}", path.display());
    Ok(())
}
