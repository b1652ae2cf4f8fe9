//! Response history
//!
//! Saved prompt/response pairs, newest first, under one store key.

use crate::storage::store::{read_json, write_json, KeyValueStore};
use crate::storage::StorageError;
use crate::types::SavedResponse;
use std::sync::Arc;

/// Store key for saved responses
pub const STORAGE_KEY: &str = "groq_saved_responses";

#[derive(Clone)]
pub struct ResponseHistory {
    store: Arc<dyn KeyValueStore>,
}

impl ResponseHistory {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Record a response at the front of the history
    pub fn save_response(
        &self,
        prompt: &str,
        response: &str,
        model: &str,
    ) -> Result<SavedResponse, StorageError> {
        let mut saved = self.get_saved_responses();

        let entry = SavedResponse {
            id: uuid::Uuid::new_v4().to_string(),
            prompt: prompt.to_string(),
            response: response.to_string(),
            model: model.to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        };

        saved.insert(0, entry.clone());
        write_json(self.store.as_ref(), STORAGE_KEY, &saved)?;

        tracing::debug!("Saved response {} from {}", entry.id, model);
        Ok(entry)
    }

    pub fn get_saved_responses(&self) -> Vec<SavedResponse> {
        match read_json::<Vec<SavedResponse>>(self.store.as_ref(), STORAGE_KEY) {
            Ok(saved) => saved.unwrap_or_default(),
            Err(e) => {
                tracing::error!("Error parsing saved responses: {}", e);
                Vec::new()
            }
        }
    }

    pub fn get_response(&self, id: &str) -> Option<SavedResponse> {
        self.get_saved_responses().into_iter().find(|r| r.id == id)
    }

    /// Returns false when no response has this id
    pub fn delete_response(&self, id: &str) -> Result<bool, StorageError> {
        let saved = self.get_saved_responses();
        let before = saved.len();
        let remaining: Vec<SavedResponse> = saved.into_iter().filter(|r| r.id != id).collect();

        if remaining.len() == before {
            return Ok(false);
        }

        write_json(self.store.as_ref(), STORAGE_KEY, &remaining)?;
        Ok(true)
    }

    pub fn clear_all_responses(&self) -> Result<(), StorageError> {
        self.store.remove_item(STORAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn history() -> (ResponseHistory, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (ResponseHistory::new(store.clone()), store)
    }

    #[test]
    fn test_newest_first() {
        let (history, _) = history();
        let first = history.save_response("p1", "r1", "m").unwrap();
        let second = history.save_response("p2", "r2", "m").unwrap();

        let saved = history.get_saved_responses();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].id, second.id);
        assert_eq!(saved[1].id, first.id);
        assert!(saved[0].timestamp >= saved[1].timestamp);
    }

    #[test]
    fn test_delete_reports_whether_removed() {
        let (history, _) = history();
        let entry = history.save_response("p", "r", "llama").unwrap();

        assert!(!history.delete_response("nope").unwrap());
        assert_eq!(history.get_saved_responses().len(), 1);

        assert!(history.delete_response(&entry.id).unwrap());
        assert!(history.get_response(&entry.id).is_none());
    }

    #[test]
    fn test_clear_removes_key() {
        let (history, store) = history();
        history.save_response("p", "r", "m").unwrap();
        history.clear_all_responses().unwrap();

        assert!(store.get_item(STORAGE_KEY).unwrap().is_none());
        assert!(history.get_saved_responses().is_empty());
    }

    #[test]
    fn test_corrupt_history_reads_as_empty() {
        let (history, store) = history();
        store.set_item(STORAGE_KEY, "[{]").unwrap();
        assert!(history.get_saved_responses().is_empty());
    }
}
