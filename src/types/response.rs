//! Saved responses

use serde::{Deserialize, Serialize};

/// A prompt/response pair kept for later review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedResponse {
    pub id: String,
    pub prompt: String,
    pub response: String,
    pub model: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl SavedResponse {
    /// Local time the response was saved, for display
    pub fn saved_at(&self) -> Option<chrono::DateTime<chrono::Local>> {
        chrono::DateTime::from_timestamp_millis(self.timestamp).map(|t| t.with_timezone(&chrono::Local))
    }
}
