use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Budget, ExpansionResult, TraversalPlan};

/// Vector-search parameters for the executor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorSearchParams {
    pub top_k: usize,
    /// Hits below this score are discarded.
    pub min_score: f64,
}

/// How the executor should blend vector similarity against graph signals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlendWeights {
    pub vector: f64,
    pub graph: f64,
    /// Extra multiplier for results reached via hierarchical edges.
    pub hierarchical_bonus: f64,
}

/// The planner's output: everything an executor needs to run the query.
/// Serializes as a nested key-value document for handoff or logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionPlan {
    /// Identifier for metrics correlation, set when a tracer is attached.
    pub plan_id: Option<Uuid>,
    pub vector: VectorSearchParams,
    pub traversal: TraversalPlan,
    pub budget: Budget,
    pub weights: BlendWeights,
    pub expansion: Option<ExpansionResult>,
}
