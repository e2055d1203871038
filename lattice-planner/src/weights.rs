//! Relationship weight table: per-edge-type traversal priority.
//!
//! A weight of 0.5 is neutral; hierarchical edges (subclass, instance,
//! containment) are promoted, high-fan-out associative edges demoted.
//! Weights stay inside [0.1, 2.0] at all times, including under
//! feedback-driven adjustment.

use std::collections::HashMap;

use lattice_core::config::DEFAULT_EDGE_WEIGHT;
use lattice_core::constants::{MAX_EDGE_WEIGHT, MIN_EDGE_WEIGHT};

/// Edge-type label → priority weight.
pub struct RelationshipWeightTable {
    weights: HashMap<String, f64>,
    default_weight: f64,
}

/// Normalize an edge-type label to lowercase snake_case, collapsing
/// `is_X_of` variants to `X_of` so "IsSubclassOf", "is subclass of" and
/// "subclass_of" share one entry.
pub fn normalize_edge_type(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev_lower = false;
    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            if ch.is_uppercase() {
                if prev_lower {
                    out.push('_');
                }
                out.extend(ch.to_lowercase());
                prev_lower = false;
            } else {
                out.push(ch);
                prev_lower = true;
            }
        } else if !out.ends_with('_') && !out.is_empty() {
            out.push('_');
            prev_lower = false;
        }
    }
    let out = out.trim_matches('_').to_string();
    match out.strip_prefix("is_") {
        Some(rest) if rest.ends_with("_of") => rest.to_string(),
        _ => out,
    }
}

impl RelationshipWeightTable {
    /// Create with hardcoded default weights.
    pub fn default_weights() -> Self {
        let mut weights = HashMap::new();

        // Hierarchical edges: cheap, high-signal.
        weights.insert("subclass_of".to_string(), 1.5);
        weights.insert("instance_of".to_string(), 1.4);
        weights.insert("part_of".to_string(), 1.2);
        weights.insert("category_contains".to_string(), 1.3);
        weights.insert("belongs_to_category".to_string(), 1.3);

        // Causal edges.
        weights.insert("causes".to_string(), 1.0);
        weights.insert("caused_by".to_string(), 1.0);

        // Flat associative edges.
        weights.insert("related_to".to_string(), 0.8);
        weights.insert("similar_to".to_string(), 0.7);

        // High-branching edges: demoted.
        weights.insert("mentions".to_string(), 0.4);
        weights.insert("mentioned_by".to_string(), 0.4);

        Self {
            weights,
            default_weight: DEFAULT_EDGE_WEIGHT,
        }
    }

    /// Create with explicit overrides on top of the defaults.
    pub fn with_overrides(overrides: &[(&str, f64)], default_weight: f64) -> Self {
        let mut table = Self::default_weights();
        table.default_weight = default_weight;
        for (edge_type, weight) in overrides {
            table.weights.insert(
                normalize_edge_type(edge_type),
                weight.clamp(MIN_EDGE_WEIGHT, MAX_EDGE_WEIGHT),
            );
        }
        table
    }

    /// Weight for an edge type; unknown types get the default weight.
    pub fn weight(&self, edge_type: &str) -> f64 {
        self.weights
            .get(&normalize_edge_type(edge_type))
            .copied()
            .unwrap_or(self.default_weight)
    }

    /// Sort edge types by weight descending. Stable: ties keep input order.
    pub fn prioritize<'a>(&self, edge_types: &[&'a str]) -> Vec<&'a str> {
        let mut sorted: Vec<&str> = edge_types.to_vec();
        sorted.sort_by(|a, b| {
            self.weight(b)
                .partial_cmp(&self.weight(a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        sorted
    }

    /// Keep only edge types at or above `min_weight`.
    pub fn filter_above<'a>(&self, edge_types: &[&'a str], min_weight: f64) -> Vec<&'a str> {
        edge_types
            .iter()
            .copied()
            .filter(|e| self.weight(e) >= min_weight)
            .collect()
    }

    /// Nudge an edge type's weight by `delta`, clamped to [0.1, 2.0].
    /// Adjusting an unknown type materializes it from the default weight.
    pub fn adjust(&mut self, edge_type: &str, delta: f64) {
        let key = normalize_edge_type(edge_type);
        let current = self.weights.get(&key).copied().unwrap_or(self.default_weight);
        self.weights
            .insert(key, (current + delta).clamp(MIN_EDGE_WEIGHT, MAX_EDGE_WEIGHT));
    }

    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }
}

impl Default for RelationshipWeightTable {
    fn default() -> Self {
        Self::default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_types_get_the_default() {
        let table = RelationshipWeightTable::default_weights();
        assert_eq!(table.weight("never_seen_before"), table.default_weight());
    }

    #[test]
    fn lookup_is_format_insensitive() {
        let table = RelationshipWeightTable::default_weights();
        assert_eq!(table.weight("SubclassOf"), table.weight("subclass_of"));
        assert_eq!(table.weight("is subclass of"), table.weight("subclass_of"));
        assert_eq!(table.weight("IsPartOf"), table.weight("part_of"));
    }

    #[test]
    fn prioritize_sorts_hierarchical_edges_first() {
        let table = RelationshipWeightTable::default_weights();
        let order = table.prioritize(&["mentions", "subclass_of", "instance_of", "related_to"]);
        assert_eq!(
            order,
            vec!["subclass_of", "instance_of", "related_to", "mentions"]
        );
    }

    #[test]
    fn prioritize_is_idempotent() {
        let table = RelationshipWeightTable::default_weights();
        let once = table.prioritize(&["mentions", "related_to", "subclass_of"]);
        let twice = table.prioritize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn ties_keep_input_order() {
        let table = RelationshipWeightTable::default_weights();
        // Both unknown, both default weight.
        let order = table.prioritize(&["zzz_unknown", "aaa_unknown"]);
        assert_eq!(order, vec!["zzz_unknown", "aaa_unknown"]);
    }

    #[test]
    fn adjust_clamps_to_bounds() {
        let mut table = RelationshipWeightTable::default_weights();
        table.adjust("subclass_of", 10.0);
        assert_eq!(table.weight("subclass_of"), MAX_EDGE_WEIGHT);
        table.adjust("subclass_of", -10.0);
        assert_eq!(table.weight("subclass_of"), MIN_EDGE_WEIGHT);
    }

    #[test]
    fn filter_above_drops_light_edges() {
        let table = RelationshipWeightTable::default_weights();
        let kept = table.filter_above(&["subclass_of", "mentions"], 1.0);
        assert_eq!(kept, vec!["subclass_of"]);
    }
}
