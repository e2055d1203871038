use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Strategy;

/// Depth/budget schedule for a weighted graph walk.
///
/// Produced by the traversal planner, optionally annotated with a strategy
/// and hints by the query rewriter, and consumed by an external executor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraversalPlan {
    /// Edge types in priority order, highest weight first.
    pub edge_types: Vec<String>,
    /// Node budget per level. Length == max_depth, non-increasing.
    pub level_budgets: Vec<usize>,
    /// Maximum depth at which each edge type stays active.
    pub active_depths: HashMap<String, usize>,
    /// Relative cost of expanding one node over each edge type.
    pub edge_costs: HashMap<String, f64>,
    /// Strategy selected by the rewriter, if the query matched a pattern.
    pub strategy: Option<Strategy>,
    /// Pattern-specific executor hints (e.g. `find_common_categories`).
    pub hints: HashMap<String, serde_json::Value>,
}

impl TraversalPlan {
    /// A plan that walks nothing. Used when the graph has no data.
    pub fn empty() -> Self {
        Self {
            edge_types: Vec::new(),
            level_budgets: Vec::new(),
            active_depths: HashMap::new(),
            edge_costs: HashMap::new(),
            strategy: None,
            hints: HashMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edge_types.is_empty()
    }
}
