//! Application context
//!
//! Owns the settings and the shared store and hands out the services built on
//! top of them.

use crate::prompts::PromptLibrary;
use crate::providers::{ChatProvider, Completion, GroqClient, OpenRouterClient, ProviderError, ProviderKind};
use crate::storage::settings::{load_settings_from, save_settings_to, AppSettings};
use crate::storage::{get_data_dir, FileStore, KeyValueStore, PlanService, ResponseHistory, StorageError};
use crate::types::SavedResponse;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const SETTINGS_FILE: &str = "settings.json";

/// Result of a prompt sent through [`AppState::ask`]
#[derive(Debug, Clone)]
pub struct Answer {
    pub completion: Completion,
    /// History entry, when responses are being saved
    pub saved: Option<SavedResponse>,
}

#[derive(Clone)]
pub struct AppState {
    pub settings: AppSettings,
    store: Arc<dyn KeyValueStore>,
    data_dir: Option<PathBuf>,
}

impl AppState {
    /// Open the default data directory
    pub fn load() -> Result<Self, StorageError> {
        Ok(Self::open(&get_data_dir()?))
    }

    /// Settings from `<dir>/settings.json` and a file store under `<dir>/store`
    pub fn open(data_dir: &Path) -> Self {
        let settings = load_settings_from(&data_dir.join(SETTINGS_FILE));
        let store = FileStore::new(data_dir.join("store"));
        tracing::info!("AppState initialized (data in {})", data_dir.display());

        Self {
            settings,
            store: Arc::new(store),
            data_dir: Some(data_dir.to_path_buf()),
        }
    }

    /// In-memory or custom store, settings never written to disk
    pub fn new(settings: AppSettings, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            settings,
            store,
            data_dir: None,
        }
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Path of the settings file, when backed by a data directory
    pub fn settings_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|d| d.join(SETTINGS_FILE))
    }

    /// Validate and persist the current settings
    pub fn save_settings(&mut self) -> Result<(), StorageError> {
        self.settings.validate();
        match self.settings_path() {
            Some(path) => save_settings_to(&path, &self.settings),
            None => Ok(()),
        }
    }

    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        self.store.clone()
    }

    pub fn plans(&self) -> PlanService {
        PlanService::new(self.store.clone())
    }

    pub fn prompts(&self) -> PromptLibrary {
        PromptLibrary::new(self.store.clone())
    }

    pub fn history(&self) -> ResponseHistory {
        ResponseHistory::new(self.store.clone())
    }

    pub fn groq(&self) -> Result<GroqClient, ProviderError> {
        GroqClient::from_settings(&self.settings)
    }

    pub fn openrouter(&self) -> Result<OpenRouterClient, ProviderError> {
        OpenRouterClient::from_settings(&self.settings)
    }

    pub fn provider(&self, kind: ProviderKind) -> Result<Box<dyn ChatProvider>, ProviderError> {
        Ok(match kind {
            ProviderKind::Groq => Box::new(self.groq()?),
            ProviderKind::OpenRouter => Box::new(self.openrouter()?),
        })
    }

    /// Generate with `kind` and record the exchange when history is enabled
    pub async fn ask(
        &self,
        kind: ProviderKind,
        prompt: &str,
        model: Option<&str>,
    ) -> Result<Answer, ProviderError> {
        let provider = self.provider(kind)?;
        self.ask_with(provider.as_ref(), prompt, model).await
    }

    /// A failed history write is logged; the completion is still returned
    pub async fn ask_with(
        &self,
        provider: &dyn ChatProvider,
        prompt: &str,
        model: Option<&str>,
    ) -> Result<Answer, ProviderError> {
        let model = model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(provider.default_model());
        let completion = provider.generate(prompt, Some(model)).await?;

        let saved = if self.settings.save_responses {
            match self
                .history()
                .save_response(prompt, &completion.content, model)
            {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::error!("Response generated but not saved: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Ok(Answer { completion, saved })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::types::ModelInfo;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl ChatProvider for Echo {
        fn name(&self) -> &'static str {
            "Echo"
        }

        fn default_model(&self) -> &str {
            "echo-1"
        }

        async fn generate(&self, prompt: &str, model: Option<&str>) -> Result<Completion, ProviderError> {
            if prompt.trim().is_empty() {
                return Err(ProviderError::EmptyPrompt);
            }
            Ok(Completion {
                content: prompt.to_uppercase(),
                model: model.unwrap_or("echo-1").to_string(),
                usage: None,
            })
        }

        async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
            Ok(vec![ModelInfo::new("echo-1", "Echo")])
        }
    }

    /// Answers with a dated model id, as OpenRouter does
    struct Dated;

    #[async_trait]
    impl ChatProvider for Dated {
        fn name(&self) -> &'static str {
            "Dated"
        }

        fn default_model(&self) -> &str {
            "vendor/model"
        }

        async fn generate(&self, prompt: &str, _model: Option<&str>) -> Result<Completion, ProviderError> {
            Ok(Completion {
                content: format!("answer to {}", prompt),
                model: "vendor/model-2024-07-18".to_string(),
                usage: None,
            })
        }

        async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
            Ok(Vec::new())
        }
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }

        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    fn state(save_responses: bool) -> AppState {
        let settings = AppSettings {
            save_responses,
            ..AppSettings::default()
        };
        AppState::new(settings, Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_ask_records_history() {
        let app = state(true);
        let answer = app.ask_with(&Echo, "hello", None).await.unwrap();

        assert_eq!(answer.completion.content, "HELLO");
        let saved = answer.saved.unwrap();
        assert_eq!(saved.model, "echo-1");

        let history = app.history().get_saved_responses();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].prompt, "hello");
        assert_eq!(history[0].response, "HELLO");
    }

    #[tokio::test]
    async fn test_ask_without_history() {
        let app = state(false);
        let answer = app.ask_with(&Echo, "hello", Some("echo-2")).await.unwrap();

        assert!(answer.saved.is_none());
        assert_eq!(answer.completion.model, "echo-2");
        assert!(app.history().get_saved_responses().is_empty());
    }

    #[tokio::test]
    async fn test_failed_generation_saves_nothing() {
        let app = state(true);
        let err = app.ask_with(&Echo, "  ", None).await.unwrap_err();

        assert!(matches!(err, ProviderError::EmptyPrompt));
        assert!(app.history().get_saved_responses().is_empty());
    }

    #[test]
    fn test_open_persists_settings_and_data() {
        let dir = tempfile::tempdir().unwrap();

        let mut app = AppState::open(dir.path());
        app.settings.groq_model = "llama-3.1-8b-instant".to_string();
        app.save_settings().unwrap();
        app.history().save_response("p", "r", "m").unwrap();

        let reopened = AppState::open(dir.path());
        assert_eq!(reopened.settings.groq_model, "llama-3.1-8b-instant");
        assert_eq!(reopened.history().get_saved_responses().len(), 1);
        assert!(dir.path().join("store/groq_saved_responses.json").exists());
    }

    #[test]
    fn test_services_share_the_store() {
        let app = state(true);
        app.prompts().add_to_favorites("code-react").unwrap();
        assert!(app.prompts().get_prompt_template("code-react").unwrap().is_favorite);
        assert_eq!(app.provider(ProviderKind::OpenRouter).unwrap().name(), "OpenRouter");
    }

    #[tokio::test]
    async fn test_answer_survives_failed_history_write() {
        let app = AppState::new(AppSettings::default(), Arc::new(ReadOnlyStore));
        let answer = app.ask_with(&Echo, "keep me", None).await.unwrap();

        assert_eq!(answer.completion.content, "KEEP ME");
        assert!(answer.saved.is_none());
    }

    #[tokio::test]
    async fn test_history_records_requested_model() {
        let app = state(true);

        let answer = app.ask_with(&Dated, "q", None).await.unwrap();
        assert_eq!(answer.completion.model, "vendor/model-2024-07-18");
        assert_eq!(answer.saved.unwrap().model, "vendor/model");

        let answer = app.ask_with(&Dated, "q", Some("vendor/other")).await.unwrap();
        assert_eq!(answer.saved.unwrap().model, "vendor/other");
    }
}
