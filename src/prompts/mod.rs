//! Prompt templates
//!
//! The built-in catalog, favorite flags from the store, and `{{variable}}`
//! substitution.

pub mod catalog;
pub mod engine;

use crate::storage::{FavoritesStore, KeyValueStore, StorageError};
use crate::types::PromptTemplate;
use catalog::{TemplateDef, CATALOG};
use std::collections::HashMap;
use std::sync::Arc;

pub use engine::{extract_variables, fill_template, unfilled_variables};

/// Narrowing applied by the template picker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    /// Only this category; `None` or `"all"` means every category
    pub category: Option<String>,
    pub favorites_only: bool,
}

/// Template catalog with favorites
#[derive(Clone)]
pub struct PromptLibrary {
    favorites: FavoritesStore,
}

impl PromptLibrary {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            favorites: FavoritesStore::new(store),
        }
    }

    /// All templates with their favorite flag
    pub fn get_prompt_templates(&self) -> Vec<PromptTemplate> {
        let favorites = self.favorites.get_favorite_templates();
        CATALOG
            .iter()
            .map(|def| to_template(def, &favorites))
            .collect()
    }

    pub fn get_prompt_template(&self, id: &str) -> Option<PromptTemplate> {
        let def = CATALOG.iter().find(|def| def.id == id)?;
        Some(to_template(def, &self.favorites.get_favorite_templates()))
    }

    pub fn get_prompt_templates_by_category(&self, category: &str) -> Vec<PromptTemplate> {
        self.get_prompt_templates()
            .into_iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Distinct categories in catalog order
    pub fn get_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for def in CATALOG {
            if !categories.iter().any(|c| c == def.category) {
                categories.push(def.category.to_string());
            }
        }
        categories
    }

    pub fn filter(&self, filter: &TemplateFilter) -> Vec<PromptTemplate> {
        let category = filter
            .category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != "all");

        self.get_prompt_templates()
            .into_iter()
            .filter(|t| category.map_or(true, |c| t.category == c))
            .filter(|t| !filter.favorites_only || t.is_favorite)
            .collect()
    }

    /// Fill a template's placeholders; `None` when the id is unknown
    pub fn fill_prompt_template(
        &self,
        template_id: &str,
        variables: &HashMap<String, String>,
    ) -> Option<String> {
        let def = CATALOG.iter().find(|def| def.id == template_id)?;
        Some(fill_template(def.template, variables))
    }

    pub fn get_favorite_templates(&self) -> Vec<String> {
        self.favorites.get_favorite_templates()
    }

    pub fn add_to_favorites(&self, template_id: &str) -> Result<(), StorageError> {
        self.favorites.add_to_favorites(template_id)
    }

    pub fn remove_from_favorites(&self, template_id: &str) -> Result<(), StorageError> {
        self.favorites.remove_from_favorites(template_id)
    }

    pub fn toggle_favorite(&self, template_id: &str) -> Result<bool, StorageError> {
        let now_favorite = self.favorites.toggle_favorite(template_id)?;
        tracing::debug!("Template {} favorite: {}", template_id, now_favorite);
        Ok(now_favorite)
    }

    pub fn get_all_favorite_templates(&self) -> Vec<PromptTemplate> {
        self.get_prompt_templates()
            .into_iter()
            .filter(|t| t.is_favorite)
            .collect()
    }
}

fn to_template(def: &TemplateDef, favorites: &[String]) -> PromptTemplate {
    PromptTemplate {
        id: def.id.to_string(),
        name: def.name.to_string(),
        description: def.description.to_string(),
        template: def.template.to_string(),
        category: def.category.to_string(),
        is_favorite: favorites.iter().any(|id| id == def.id),
    }
}
