//! Feedback loop: nudges relationship weights from observed result
//! effectiveness. Online exponential-moving-style adjustment, process
//! memory only — no training set, no persistence.

use chrono::{DateTime, Utc};
use lattice_core::models::ExecutionPlan;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::weights::{normalize_edge_type, RelationshipWeightTable};

/// One executor result with the edge types walked to reach it.
#[derive(Debug, Clone, Serialize)]
pub struct TraversedResult {
    pub id: String,
    pub edge_types: Vec<String>,
}

/// Append-only per-query timing record.
#[derive(Debug, Clone, Serialize)]
pub struct QueryTiming {
    pub query_id: String,
    pub elapsed_ms: u64,
    pub result_count: usize,
    pub recorded_at: DateTime<Utc>,
}

pub struct LearningFeedbackLoop {
    learning_rate: f64,
    history: Vec<QueryTiming>,
}

impl LearningFeedbackLoop {
    pub fn new(learning_rate: f64) -> Self {
        Self {
            learning_rate,
            history: Vec::new(),
        }
    }

    /// Record an executed plan's results: adjust edge weights by observed
    /// effectiveness and append to the timing history.
    pub fn record_outcome(
        &mut self,
        weights: &mut RelationshipWeightTable,
        query_id: &str,
        results: &[TraversedResult],
        elapsed_ms: u64,
        plan_used: &ExecutionPlan,
    ) {
        let result_count = results.len();

        // Occurrences of each edge type across result paths.
        let mut occurrences: HashMap<String, usize> = HashMap::new();
        for result in results {
            for edge_type in &result.edge_types {
                *occurrences.entry(normalize_edge_type(edge_type)).or_default() += 1;
            }
        }

        for (edge_type, count) in &occurrences {
            let effectiveness = *count as f64 / result_count.max(1) as f64;
            let delta = self.learning_rate * (effectiveness - 0.5);
            weights.adjust(edge_type, delta);
        }

        debug!(
            query_id,
            plan_id = ?plan_used.plan_id,
            result_count,
            elapsed_ms,
            adjusted = occurrences.len(),
            "recorded plan outcome"
        );

        self.history.push(QueryTiming {
            query_id: query_id.to_string(),
            elapsed_ms,
            result_count,
            recorded_at: Utc::now(),
        });
    }

    pub fn history(&self) -> &[QueryTiming] {
        &self.history
    }

    /// Mean query time over the whole history.
    pub fn mean_elapsed_ms(&self) -> Option<f64> {
        if self.history.is_empty() {
            return None;
        }
        let total: u64 = self.history.iter().map(|t| t.elapsed_ms).sum();
        Some(total as f64 / self.history.len() as f64)
    }

    /// Trend: mean of the second half minus mean of the first half.
    /// Positive means queries are getting slower.
    pub fn elapsed_trend_ms(&self) -> Option<f64> {
        if self.history.len() < 2 {
            return None;
        }
        let mid = self.history.len() / 2;
        let mean = |slice: &[QueryTiming]| {
            slice.iter().map(|t| t.elapsed_ms).sum::<u64>() as f64 / slice.len() as f64
        };
        Some(mean(&self.history[mid..]) - mean(&self.history[..mid]))
    }

    /// Drop history older than the caller cares about.
    pub fn truncate_history(&mut self, keep_last: usize) {
        if self.history.len() > keep_last {
            let drop = self.history.len() - keep_last;
            self.history.drain(..drop);
        }
    }
}
