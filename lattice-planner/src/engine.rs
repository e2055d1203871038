//! QueryPlanner: orchestrates the full planning pipeline.
//!
//! Fixed stage order: base weighting → expansion → rewriting → traversal
//! planning → budget allocation → optional trace emission. Every stage
//! except the query-vector check is best-effort: failures degrade the
//! stage and the plan still comes out.

use lattice_core::config::PlannerConfig;
use lattice_core::errors::{PlannerError, PlannerResult};
use lattice_core::models::{
    BlendWeights, ExecutionPlan, GraphKind, Query, TraversalPlan, VectorSearchParams,
};
use lattice_core::traits::{GraphAccess, PlanTracer, VectorSearch};
use tracing::{debug, info, warn};

use crate::budget::{BudgetAllocator, ObservedResult};
use crate::category::CategoryGraph;
use crate::classify::classify_graph;
use crate::expansion::QueryExpansionEngine;
use crate::learning::{LearningFeedbackLoop, TraversedResult};
use crate::rewrite::QueryRewriter;
use crate::traversal::TraversalPlanner;
use crate::weights::RelationshipWeightTable;

/// The main planner. Owns the session-scoped weight table and feedback
/// loop; external collaborators (search, graph, categories) are passed
/// per call so the caller keeps building them between plans.
pub struct QueryPlanner {
    config: PlannerConfig,
    weights: RelationshipWeightTable,
    expansion: QueryExpansionEngine,
    allocator: BudgetAllocator,
    learning: LearningFeedbackLoop,
    tracer: Option<Box<dyn PlanTracer>>,
}

impl QueryPlanner {
    /// Create a planner. Fails with a configuration error on out-of-range
    /// settings.
    pub fn new(config: PlannerConfig) -> PlannerResult<Self> {
        config.validate()?;
        Ok(Self {
            expansion: QueryExpansionEngine::new(
                config.similarity_threshold,
                config.max_expansions,
            ),
            allocator: BudgetAllocator::new(config.budgets.clone()),
            learning: LearningFeedbackLoop::new(config.learning_rate),
            weights: RelationshipWeightTable::with_overrides(&[], config.default_edge_weight),
            tracer: None,
            config,
        })
    }

    /// Attach a trace/metrics sink. Plans get a tracking id when set.
    pub fn with_tracer(mut self, tracer: Box<dyn PlanTracer>) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Produce an execution plan for one query.
    pub fn plan(
        &self,
        query: &Query,
        search: &dyn VectorSearch,
        graph: &dyn GraphAccess,
        categories: &CategoryGraph,
    ) -> PlannerResult<ExecutionPlan> {
        let embedding = query.embedding.as_deref().ok_or(PlannerError::InvalidQuery)?;

        // Step 1: Base vector/graph weight blend from the graph shape.
        let kind = self.resolve_graph_kind(graph);
        let blend = base_blend(kind);
        debug!(?kind, "base weighting resolved");

        // Step 2: Expand the query when text is present.
        let expansion = query.text.as_deref().map(|text| {
            self.expansion
                .expand(embedding, Some(text), search, categories)
        });

        // Step 3: Detect query-intent patterns.
        let pattern = query.text.as_deref().and_then(QueryRewriter::rewrite);

        // Step 4: Traversal schedule over the graph's edge types.
        let edge_types = match graph.relationship_types() {
            Ok(types) => types,
            Err(e) => {
                // Recoverable: plan degrades to vector-only.
                warn!(error = %e, "relationship types unavailable, planning without traversal");
                self.trace_event("graph_access_degraded", serde_json::json!({ "error": e.to_string() }));
                Vec::new()
            }
        };
        let empty_graph = match graph.entity_count() {
            Ok(count) => count == 0,
            Err(e) => {
                // Recoverable: the edge types already in hand are still
                // usable, so keep planning traversal.
                warn!(error = %e, "entity count unavailable, assuming non-empty graph");
                self.trace_event(
                    "graph_access_degraded",
                    serde_json::json!({ "error": e.to_string() }),
                );
                false
            }
        };
        let mut traversal = if empty_graph || edge_types.is_empty() {
            TraversalPlan::empty()
        } else {
            let refs: Vec<&str> = edge_types.iter().map(String::as_str).collect();
            TraversalPlanner::plan(
                &self.weights,
                &refs,
                self.config.max_depth,
                self.config.total_node_budget,
            )
        };

        // Step 5: Inject pattern hints into the schedule.
        if let Some((kind, entities)) = &pattern {
            QueryRewriter::apply_hints(&mut traversal, *kind, entities);
        }

        // Step 6: Partition the budget.
        let expansion_factor = expansion
            .as_ref()
            .filter(|e| e.has_expansions)
            .map(|_| query.expansion_factor);
        let budget = self
            .allocator
            .allocate(&traversal, query.priority, expansion_factor);

        let vector = VectorSearchParams {
            top_k: budget.vector_top_k,
            min_score: 0.0,
        };

        let mut plan = ExecutionPlan {
            plan_id: None,
            vector,
            traversal,
            budget,
            weights: blend,
            expansion,
        };

        // Step 7: Trace emission.
        if let Some(tracer) = &self.tracer {
            let params = serde_json::json!({
                "priority": query.priority,
                "has_text": query.text.is_some(),
                "pattern": pattern.as_ref().map(|(k, _)| k),
            });
            plan.plan_id = Some(tracer.start_tracking(&params));
            if let Ok(doc) = serde_json::to_value(&plan) {
                tracer.log_event("plan_created", &doc);
            }
        }

        info!(
            plan_id = ?plan.plan_id,
            edge_types = plan.traversal.edge_types.len(),
            strategy = ?plan.traversal.strategy,
            expanded = plan.expansion.as_ref().map(|e| e.has_expansions),
            "plan complete"
        );

        Ok(plan)
    }

    /// Declared graph kind, or classified from sampled relationship types.
    fn resolve_graph_kind(&self, graph: &dyn GraphAccess) -> GraphKind {
        match graph.graph_kind() {
            GraphKind::Unknown => match graph.relationship_types() {
                Ok(types) => classify_graph(&types),
                Err(e) => {
                    warn!(error = %e, "graph classification unavailable");
                    GraphKind::Unknown
                }
            },
            declared => declared,
        }
    }

    /// Feed execution results back into the weight table and history.
    pub fn record_outcome(
        &mut self,
        query_id: &str,
        results: &[TraversedResult],
        elapsed_ms: u64,
        plan_used: &ExecutionPlan,
    ) {
        self.learning
            .record_outcome(&mut self.weights, query_id, results, elapsed_ms, plan_used);
    }

    /// Early-stop check for the executor: true when confidence or
    /// diversity signals say further traversal has diminishing returns.
    pub fn should_stop_early(&self, results: &[ObservedResult], consumed: f64) -> bool {
        self.allocator.should_stop_early(results, consumed)
    }

    pub fn weights(&self) -> &RelationshipWeightTable {
        &self.weights
    }

    pub fn learning(&self) -> &LearningFeedbackLoop {
        &self.learning
    }

    fn trace_event(&self, kind: &str, payload: serde_json::Value) {
        if let Some(tracer) = &self.tracer {
            tracer.log_event(kind, &payload);
        }
    }
}

/// Vector/graph blend per graph shape: hierarchical graphs reward walking
/// the taxonomy, flat graphs lean on the vector index.
fn base_blend(kind: GraphKind) -> BlendWeights {
    match kind {
        GraphKind::Hierarchical => BlendWeights {
            vector: 0.4,
            graph: 0.6,
            hierarchical_bonus: 1.3,
        },
        GraphKind::FlatLink => BlendWeights {
            vector: 0.6,
            graph: 0.4,
            hierarchical_bonus: 1.0,
        },
        GraphKind::Unknown => BlendWeights {
            vector: 0.5,
            graph: 0.5,
            hierarchical_bonus: 1.1,
        },
    }
}

