//! Traversal scheduling: turns weighted edge-type priorities into a
//! front-loaded depth/budget schedule for the executor's graph walk.

use std::collections::HashMap;

use lattice_core::constants::{
    LEVEL_BUDGET_BASE_SHARE, LEVEL_BUDGET_DECAY, LEVEL_ZERO_BUDGET_SHARE,
};
use lattice_core::models::TraversalPlan;

use crate::weights::{normalize_edge_type, RelationshipWeightTable};

/// Relative cost of expanding one node over an edge type. Hierarchical
/// edges are cheap and high-signal; "mentions"-style edges fan out hard.
fn edge_cost(edge_type: &str) -> f64 {
    match normalize_edge_type(edge_type).as_str() {
        "subclass_of" | "instance_of" => 0.6,
        "category_contains" | "belongs_to_category" => 0.65,
        "part_of" => 0.7,
        "related_to" | "similar_to" => 1.0,
        "mentions" | "mentioned_by" => 1.5,
        _ => 1.0,
    }
}

pub struct TraversalPlanner;

impl TraversalPlanner {
    /// Build a traversal schedule: prioritized edge types, per-level node
    /// budgets, per-edge activation depths and costs.
    pub fn plan(
        weights: &RelationshipWeightTable,
        edge_types: &[&str],
        max_depth: usize,
        total_node_budget: usize,
    ) -> TraversalPlan {
        if edge_types.is_empty() || max_depth == 0 {
            return TraversalPlan::empty();
        }

        let prioritized = weights.prioritize(edge_types);

        let level_budgets = level_budgets(max_depth, total_node_budget);

        let n = prioritized.len();
        let mut active_depths = HashMap::with_capacity(n);
        let mut edge_costs = HashMap::with_capacity(n);
        for (rank, edge_type) in prioritized.iter().enumerate() {
            active_depths.insert((*edge_type).to_string(), active_depth(rank, n, max_depth));
            edge_costs.insert((*edge_type).to_string(), edge_cost(edge_type));
        }

        TraversalPlan {
            edge_types: prioritized.into_iter().map(String::from).collect(),
            level_budgets,
            active_depths,
            edge_costs,
            strategy: None,
            hints: HashMap::new(),
        }
    }
}

/// Per-level node budgets: level 0 gets 40% of the total, level L gets
/// `total * 0.2 * 0.7^L` clipped to whatever remains. Front-loaded and
/// geometrically decaying; the sum never exceeds the total.
fn level_budgets(max_depth: usize, total: usize) -> Vec<usize> {
    let mut budgets = Vec::with_capacity(max_depth);
    let mut remaining = total;
    for level in 0..max_depth {
        let share = if level == 0 {
            LEVEL_ZERO_BUDGET_SHARE
        } else {
            LEVEL_BUDGET_BASE_SHARE * LEVEL_BUDGET_DECAY.powi(level as i32)
        };
        let budget = ((total as f64 * share) as usize).min(remaining);
        remaining -= budget;
        budgets.push(budget);
    }
    budgets
}

/// Maximum depth an edge type stays active: the top-ranked type walks the
/// full depth, lower ranks drop off proportionally, never below 1.
fn active_depth(rank: usize, n: usize, max_depth: usize) -> usize {
    if n == 1 {
        return max_depth;
    }
    let fraction = 1.0 - rank as f64 / (n - 1) as f64;
    ((fraction * max_depth as f64).round() as usize).max(1)
}
