use serde::{Deserialize, Serialize};

/// A topic related to the query, found by similarity search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedTopic {
    pub topic_id: String,
    pub name: String,
    /// Similarity to the query vector, in [threshold, 1.0].
    pub similarity: f64,
}

/// A category matched against the query text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedCategory {
    pub category: String,
    /// Depth in the category hierarchy (0 = root).
    pub depth: usize,
}

/// Output of query expansion. Always produced; both lists may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpansionResult {
    /// The query vector the expansion was computed from.
    pub query_vector: Vec<f32>,
    pub query_text: Option<String>,
    /// Topics above the similarity threshold, at most `max_expansions`.
    pub related_topics: Vec<RelatedTopic>,
    /// Matched categories sorted by depth descending (deepest first).
    pub matched_categories: Vec<MatchedCategory>,
    pub has_expansions: bool,
}

impl ExpansionResult {
    pub fn empty(query_vector: Vec<f32>, query_text: Option<String>) -> Self {
        Self {
            query_vector,
            query_text,
            related_topics: Vec::new(),
            matched_categories: Vec::new(),
            has_expansions: false,
        }
    }
}
