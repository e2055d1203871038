//! Query expansion: related topics via similarity search, related
//! categories via lexical overlap with the hierarchy.
//!
//! Expansion is strictly best-effort. A failing search backend degrades to
//! an empty topic list; it never aborts planning.

use std::collections::HashSet;

use lattice_core::models::{ExpansionResult, MatchedCategory, RelatedTopic};
use lattice_core::traits::VectorSearch;
use tracing::{debug, warn};

use crate::category::CategoryGraph;

/// Minimum token-overlap ratio for a category to count as a direct match.
const CATEGORY_OVERLAP_RATIO: f64 = 0.5;

pub struct QueryExpansionEngine {
    similarity_threshold: f64,
    max_expansions: usize,
}

impl QueryExpansionEngine {
    pub fn new(similarity_threshold: f64, max_expansions: usize) -> Self {
        Self {
            similarity_threshold,
            max_expansions,
        }
    }

    /// Expand a query with related topics and categories.
    pub fn expand(
        &self,
        query_vector: &[f32],
        query_text: Option<&str>,
        search: &dyn VectorSearch,
        categories: &CategoryGraph,
    ) -> ExpansionResult {
        let related_topics = self.expand_topics(query_vector, search);
        let matched_categories = query_text
            .map(|text| self.expand_categories(text, categories))
            .unwrap_or_default();

        let has_expansions = !related_topics.is_empty() || !matched_categories.is_empty();
        ExpansionResult {
            query_vector: query_vector.to_vec(),
            query_text: query_text.map(String::from),
            related_topics,
            matched_categories,
            has_expansions,
        }
    }

    /// Similarity search for topic-type candidates: fetch twice the limit,
    /// keep those above threshold, truncate.
    fn expand_topics(&self, query_vector: &[f32], search: &dyn VectorSearch) -> Vec<RelatedTopic> {
        let hits = match search.search(query_vector, self.max_expansions * 2, Some("topic")) {
            Ok(hits) => hits,
            Err(e) => {
                // Degrade, never abort planning over a search failure.
                warn!(error = %e, "topic expansion search failed, continuing without");
                return Vec::new();
            }
        };

        let mut topics: Vec<RelatedTopic> = hits
            .into_iter()
            .filter(|hit| hit.score >= self.similarity_threshold)
            .map(|hit| RelatedTopic {
                name: hit.name().to_string(),
                topic_id: hit.id,
                similarity: hit.score,
            })
            .collect();
        topics.truncate(self.max_expansions);
        debug!(topics = topics.len(), "topic expansion complete");
        topics
    }

    /// Lexical category matching: token overlap against each known category
    /// name, plus every category within hierarchy distance 1 of a direct
    /// match. Union sorted by depth descending, deepest (most specific) first.
    fn expand_categories(&self, query_text: &str, graph: &CategoryGraph) -> Vec<MatchedCategory> {
        let query_tokens = tokenize(query_text);
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let mut matched: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for category in graph.categories() {
            let cat_tokens = tokenize(category);
            if cat_tokens.is_empty() {
                continue;
            }
            let overlap = cat_tokens
                .iter()
                .filter(|t| query_tokens.contains(*t))
                .count();
            if overlap as f64 / cat_tokens.len() as f64 >= CATEGORY_OVERLAP_RATIO
                && seen.insert(category.to_string())
            {
                matched.push(category.to_string());
            }
        }

        // Pull in the immediate hierarchy neighborhood of each direct match.
        let direct = matched.clone();
        for category in &direct {
            for (neighbor, _) in graph.related(category, 1) {
                if seen.insert(neighbor.clone()) {
                    matched.push(neighbor);
                }
            }
        }

        let mut categories: Vec<MatchedCategory> = matched
            .into_iter()
            .map(|category| MatchedCategory {
                depth: graph.depth(&category),
                category,
            })
            .collect();
        categories.sort_by(|a, b| b.depth.cmp(&a.depth));
        categories.truncate(self.max_expansions);
        categories
    }
}

/// Lowercase alphanumeric tokens.
fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
