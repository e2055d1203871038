use serde::{Deserialize, Serialize};

/// One row from the external vector-similarity search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    /// Similarity score, higher is closer.
    pub score: f64,
    /// Backend-specific metadata (entity kind, display name, ...).
    pub metadata: serde_json::Value,
}

impl SearchHit {
    /// Display name from metadata, falling back to the id.
    pub fn name(&self) -> &str {
        self.metadata
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or(&self.id)
    }
}
