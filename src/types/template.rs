//! Prompt template records

use serde::{Deserialize, Serialize};

/// A static prompt with `{{variable}}` placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub template: String,
    pub category: String,
    #[serde(default)]
    pub is_favorite: bool,
}
