//! Favorite prompt templates
//!
//! The favorites list is an array of template ids under one store key.

use crate::storage::store::{read_json, write_json, KeyValueStore};
use crate::storage::StorageError;
use std::sync::Arc;

/// Store key for favorite template ids
pub const STORAGE_KEY: &str = "prompt_favorites";

#[derive(Clone)]
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Favorite template ids; corrupt data reads as none
    pub fn get_favorite_templates(&self) -> Vec<String> {
        match read_json::<Vec<String>>(self.store.as_ref(), STORAGE_KEY) {
            Ok(ids) => ids.unwrap_or_default(),
            Err(e) => {
                tracing::error!("Error loading favorite templates: {}", e);
                Vec::new()
            }
        }
    }

    pub fn is_favorite(&self, template_id: &str) -> bool {
        self.get_favorite_templates().iter().any(|id| id == template_id)
    }

    pub fn add_to_favorites(&self, template_id: &str) -> Result<(), StorageError> {
        let mut favorites = self.get_favorite_templates();
        if favorites.iter().any(|id| id == template_id) {
            return Ok(());
        }
        favorites.push(template_id.to_string());
        write_json(self.store.as_ref(), STORAGE_KEY, &favorites)
    }

    pub fn remove_from_favorites(&self, template_id: &str) -> Result<(), StorageError> {
        let mut favorites = self.get_favorite_templates();
        favorites.retain(|id| id != template_id);
        write_json(self.store.as_ref(), STORAGE_KEY, &favorites)
    }

    /// Flip a template's favorite state and return the new state
    pub fn toggle_favorite(&self, template_id: &str) -> Result<bool, StorageError> {
        if self.is_favorite(template_id) {
            self.remove_from_favorites(template_id)?;
            Ok(false)
        } else {
            self.add_to_favorites(template_id)?;
            Ok(true)
        }
    }
}
