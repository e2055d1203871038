//! Budget allocation and early stopping.
//!
//! Budgets are advisory: the executor enforces them, the planner only
//! computes them. Baselines scale with query priority, then strategy and
//! plan-shape multipliers apply on top.

use lattice_core::config::BudgetDefaults;
use lattice_core::constants::{
    EARLY_STOP_CONFIDENCE, EARLY_STOP_CONFIDENT_BUDGET, EARLY_STOP_DIVERSITY_BUDGET,
    EARLY_STOP_DIVERSITY_FLOOR, EARLY_STOP_DIVERSITY_SAMPLE, EARLY_STOP_MIN_CONFIDENT,
};
use lattice_core::models::{Budget, Priority, Strategy, TraversalPlan};
use std::collections::HashSet;
use tracing::debug;

use crate::weights::normalize_edge_type;

/// One executor-side result, as reported back for early-stop checks.
#[derive(Debug, Clone)]
pub struct ObservedResult {
    pub confidence: f64,
    /// Category the result belongs to, if it is a category-type result.
    pub category: Option<String>,
}

/// Fallback stopping rule consulted when neither specified rule fires.
pub trait StopHeuristic: Send + Sync {
    fn should_stop(&self, results: &[ObservedResult], budget_consumed_ratio: f64) -> bool;
}

/// Default base heuristic: run until the budget is spent.
pub struct NeverStop;

impl StopHeuristic for NeverStop {
    fn should_stop(&self, _results: &[ObservedResult], _consumed: f64) -> bool {
        false
    }
}

pub struct BudgetAllocator {
    defaults: BudgetDefaults,
    base_heuristic: Box<dyn StopHeuristic>,
}

impl BudgetAllocator {
    pub fn new(defaults: BudgetDefaults) -> Self {
        Self {
            defaults,
            base_heuristic: Box::new(NeverStop),
        }
    }

    pub fn with_base_heuristic(mut self, heuristic: Box<dyn StopHeuristic>) -> Self {
        self.base_heuristic = heuristic;
        self
    }

    /// Partition the budget for one plan.
    pub fn allocate(
        &self,
        plan: &TraversalPlan,
        priority: Priority,
        expansion_factor: Option<f64>,
    ) -> Budget {
        let d = &self.defaults;
        let base = Budget {
            vector_search_ms: d.vector_search_ms,
            graph_traversal_ms: d.graph_traversal_ms,
            category_traversal_ms: d.category_traversal_ms,
            topic_expansion_ms: d.topic_expansion_ms,
            vector_top_k: d.vector_top_k,
            graph_node_budget: d.graph_node_budget,
            category_node_budget: d.category_node_budget,
            topic_node_budget: d.topic_node_budget,
        };
        let mut budget = base.scaled(priority.multiplier());

        // Category-heavy walks get more room in the category phase.
        if plan.edge_types.iter().any(|e| is_category_edge(e)) {
            budget.category_traversal_ms = scale_ms(budget.category_traversal_ms, 1.5);
            budget.category_node_budget = scale_n(budget.category_node_budget, 1.5);
        }

        // Topic expansion was requested: widen that phase by the caller's factor.
        if let Some(factor) = expansion_factor {
            budget.topic_expansion_ms = scale_ms(budget.topic_expansion_ms, factor);
            budget.topic_node_budget = scale_n(budget.topic_node_budget, factor);
        }

        match plan.strategy {
            Some(Strategy::Hierarchical) => {
                budget.graph_traversal_ms = scale_ms(budget.graph_traversal_ms, 1.3);
                budget.graph_node_budget = scale_n(budget.graph_node_budget, 1.3);
            }
            Some(Strategy::TopicFocused) => {
                budget.vector_search_ms = scale_ms(budget.vector_search_ms, 1.4);
            }
            Some(Strategy::Comparison) => {
                budget.vector_search_ms = scale_ms(budget.vector_search_ms, 1.2);
                budget.graph_traversal_ms = scale_ms(budget.graph_traversal_ms, 1.2);
                budget.graph_node_budget = scale_n(budget.graph_node_budget, 1.2);
            }
            Some(Strategy::Causal) | Some(Strategy::Enumeration) | None => {}
        }

        debug!(?priority, strategy = ?plan.strategy, "budget allocated");
        budget
    }

    /// Early stopping: enough high-confidence category results with most of
    /// the budget spent, or collapsed result diversity late in the run.
    /// Otherwise defers to the base heuristic.
    pub fn should_stop_early(
        &self,
        results: &[ObservedResult],
        budget_consumed_ratio: f64,
    ) -> bool {
        let confident_categories = results
            .iter()
            .filter(|r| r.category.is_some() && r.confidence > EARLY_STOP_CONFIDENCE)
            .count();
        if confident_categories >= EARLY_STOP_MIN_CONFIDENT
            && budget_consumed_ratio >= EARLY_STOP_CONFIDENT_BUDGET
        {
            return true;
        }

        if results.len() > EARLY_STOP_DIVERSITY_SAMPLE
            && budget_consumed_ratio >= EARLY_STOP_DIVERSITY_BUDGET
        {
            let unique: HashSet<&str> = results
                .iter()
                .filter_map(|r| r.category.as_deref())
                .collect();
            let diversity = unique.len() as f64 / results.len() as f64;
            if diversity < EARLY_STOP_DIVERSITY_FLOOR {
                return true;
            }
        }

        self.base_heuristic
            .should_stop(results, budget_consumed_ratio)
    }
}

/// Category-containment relations mark a plan as category-heavy.
fn is_category_edge(edge_type: &str) -> bool {
    normalize_edge_type(edge_type).contains("category")
}

fn scale_ms(value: u64, factor: f64) -> u64 {
    ((value as f64 * factor) as u64).max(1)
}

fn scale_n(value: usize, factor: f64) -> usize {
    ((value as f64 * factor) as usize).max(1)
}
