use serde::{Deserialize, Serialize};

use crate::constants::{MAX_EDGE_WEIGHT, MIN_EDGE_WEIGHT};
use crate::errors::{PlannerError, PlannerResult};

use super::defaults;

/// Baseline per-phase budget values, before priority/strategy multipliers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetDefaults {
    pub vector_search_ms: u64,
    pub graph_traversal_ms: u64,
    pub category_traversal_ms: u64,
    pub topic_expansion_ms: u64,
    pub vector_top_k: usize,
    pub graph_node_budget: usize,
    pub category_node_budget: usize,
    pub topic_node_budget: usize,
}

impl Default for BudgetDefaults {
    fn default() -> Self {
        Self {
            vector_search_ms: defaults::DEFAULT_VECTOR_SEARCH_MS,
            graph_traversal_ms: defaults::DEFAULT_GRAPH_TRAVERSAL_MS,
            category_traversal_ms: defaults::DEFAULT_CATEGORY_TRAVERSAL_MS,
            topic_expansion_ms: defaults::DEFAULT_TOPIC_EXPANSION_MS,
            vector_top_k: defaults::DEFAULT_VECTOR_TOP_K,
            graph_node_budget: defaults::DEFAULT_NODE_BUDGET,
            category_node_budget: defaults::DEFAULT_CATEGORY_NODE_BUDGET,
            topic_node_budget: defaults::DEFAULT_TOPIC_NODE_BUDGET,
        }
    }
}

/// Planner configuration. All fields have serde defaults so a partial TOML
/// override file only needs the keys it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Weight returned for edge types with no explicit entry.
    pub default_edge_weight: f64,
    /// Minimum similarity for expanded topics.
    pub similarity_threshold: f64,
    /// Maximum topics/categories added per expansion.
    pub max_expansions: usize,
    /// Maximum traversal depth.
    pub max_depth: usize,
    /// Total node budget shared across traversal levels.
    pub total_node_budget: usize,
    /// Learning rate for the feedback loop.
    pub learning_rate: f64,
    /// Baseline budgets.
    pub budgets: BudgetDefaults,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_edge_weight: defaults::DEFAULT_EDGE_WEIGHT,
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            max_expansions: defaults::DEFAULT_MAX_EXPANSIONS,
            max_depth: defaults::DEFAULT_MAX_DEPTH,
            total_node_budget: defaults::DEFAULT_NODE_BUDGET,
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            budgets: BudgetDefaults::default(),
        }
    }
}

impl PlannerConfig {
    /// Parse from a TOML string and validate.
    pub fn from_toml(raw: &str) -> PlannerResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| PlannerError::Configuration {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject out-of-range values at construction time rather than
    /// letting them surface as nonsense plans later.
    pub fn validate(&self) -> PlannerResult<()> {
        if !(MIN_EDGE_WEIGHT..=MAX_EDGE_WEIGHT).contains(&self.default_edge_weight) {
            return Err(PlannerError::Configuration {
                reason: format!(
                    "default_edge_weight {} outside [{MIN_EDGE_WEIGHT}, {MAX_EDGE_WEIGHT}]",
                    self.default_edge_weight
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(PlannerError::Configuration {
                reason: format!(
                    "similarity_threshold {} outside [0, 1]",
                    self.similarity_threshold
                ),
            });
        }
        if self.max_depth == 0 {
            return Err(PlannerError::Configuration {
                reason: "max_depth must be at least 1".into(),
            });
        }
        if self.total_node_budget == 0 {
            return Err(PlannerError::Configuration {
                reason: "total_node_budget must be nonzero".into(),
            });
        }
        if self.learning_rate <= 0.0 || self.learning_rate > 1.0 {
            return Err(PlannerError::Configuration {
                reason: format!("learning_rate {} outside (0, 1]", self.learning_rate),
            });
        }
        Ok(())
    }
}
