use serde::{Deserialize, Serialize};

/// Advisory resource ceilings for the external executor. The planner never
/// enforces these itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub vector_search_ms: u64,
    pub graph_traversal_ms: u64,
    pub category_traversal_ms: u64,
    pub topic_expansion_ms: u64,
    pub vector_top_k: usize,
    pub graph_node_budget: usize,
    pub category_node_budget: usize,
    pub topic_node_budget: usize,
}

impl Budget {
    /// Scale every field by a factor, rounding node counts down but keeping
    /// at least 1 so no phase is starved to zero.
    pub fn scaled(&self, factor: f64) -> Self {
        let ms = |v: u64| ((v as f64 * factor) as u64).max(1);
        let n = |v: usize| ((v as f64 * factor) as usize).max(1);
        Self {
            vector_search_ms: ms(self.vector_search_ms),
            graph_traversal_ms: ms(self.graph_traversal_ms),
            category_traversal_ms: ms(self.category_traversal_ms),
            topic_expansion_ms: ms(self.topic_expansion_ms),
            vector_top_k: n(self.vector_top_k),
            graph_node_budget: n(self.graph_node_budget),
            category_node_budget: n(self.category_node_budget),
            topic_node_budget: n(self.topic_node_budget),
        }
    }
}
