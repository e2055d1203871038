//! Multi-factor entity importance scorer (5 factors).
//!
//! Factors: connection count, reference count, category importance,
//! mention frequency, recency. Missing features score neutral (0.5)
//! rather than zero so sparse entities are not buried.

use std::collections::HashMap;

use chrono::Utc;
use lattice_core::constants::NEUTRAL_FEATURE_SCORE;
use lattice_core::models::Entity;
use lattice_core::traits::GraphAccess;
use moka::sync::Cache;
use tracing::warn;

/// Weights for the 5 scoring factors. Must sum to 1.0 for scores in [0, 1].
#[derive(Debug, Clone)]
pub struct ImportanceWeights {
    pub connections: f64,
    pub references: f64,
    pub category: f64,
    pub mentions: f64,
    pub recency: f64,
}

impl Default for ImportanceWeights {
    fn default() -> Self {
        Self {
            connections: 0.30,
            references: 0.20,
            category: 0.20,
            mentions: 0.15,
            recency: 0.15,
        }
    }
}

/// Scores entities by estimated relevance. Results are cached per entity id
/// for the life of the model instance.
pub struct EntityImportanceModel {
    weights: ImportanceWeights,
    cache: Cache<String, f64>,
}

impl EntityImportanceModel {
    pub fn new() -> Self {
        Self::with_weights(ImportanceWeights::default())
    }

    pub fn with_weights(weights: ImportanceWeights) -> Self {
        Self {
            weights,
            cache: Cache::new(10_000),
        }
    }

    /// Importance score in [0, 1].
    pub fn score(&self, entity: &Entity, category_weights: Option<&HashMap<String, f64>>) -> f64 {
        if let Some(cached) = self.cache.get(&entity.id) {
            return cached;
        }
        let score = self.compute(entity, category_weights);
        self.cache.insert(entity.id.clone(), score);
        score
    }

    fn compute(&self, entity: &Entity, category_weights: Option<&HashMap<String, f64>>) -> f64 {
        // Factor 1: Connectivity (log-scaled, saturates around 100).
        let f_connections = entity
            .connections()
            .map(|n| log_scaled(n, 100.0))
            .unwrap_or(NEUTRAL_FEATURE_SCORE);

        // Factor 2: References (log-scaled, saturates around 50).
        let f_references = entity
            .references
            .map(|n| log_scaled(n, 50.0))
            .unwrap_or(NEUTRAL_FEATURE_SCORE);

        // Factor 3: Category importance — mean of the supplied weights,
        // unknown categories count as neutral.
        let f_category = if entity.categories.is_empty() {
            NEUTRAL_FEATURE_SCORE
        } else {
            let sum: f64 = entity
                .categories
                .iter()
                .map(|cat| {
                    category_weights
                        .and_then(|w| w.get(cat))
                        .copied()
                        .unwrap_or(NEUTRAL_FEATURE_SCORE)
                })
                .sum();
            (sum / entity.categories.len() as f64).min(1.0)
        };

        // Factor 4: Explicitness — mention frequency (log-scaled).
        let f_mentions = entity
            .mentions
            .map(|n| log_scaled(n, 20.0))
            .unwrap_or(NEUTRAL_FEATURE_SCORE);

        // Factor 5: Recency — linear decay over one year.
        let f_recency = entity
            .last_modified
            .map(|ts| {
                let days = (Utc::now() - ts).num_days().max(0) as f64;
                (1.0 - days / 365.0).max(0.0)
            })
            .unwrap_or(NEUTRAL_FEATURE_SCORE);

        let score = self.weights.connections * f_connections
            + self.weights.references * f_references
            + self.weights.category * f_category
            + self.weights.mentions * f_mentions
            + self.weights.recency * f_recency;

        score.clamp(0.0, 1.0)
    }

    /// Score an entity by id through a graph accessor. A failed or missing
    /// lookup falls back to a featureless snapshot, which scores neutral.
    pub fn score_by_id(
        &self,
        graph: &dyn GraphAccess,
        id: &str,
        category_weights: Option<&HashMap<String, f64>>,
    ) -> f64 {
        let entity = match graph.entity(id) {
            Ok(Some(entity)) => entity,
            Ok(None) => Entity::new(id),
            Err(e) => {
                warn!(id, error = %e, "entity lookup failed, scoring with neutral features");
                Entity::new(id)
            }
        };
        self.score(&entity, category_weights)
    }

    /// Sort entities by importance descending.
    pub fn rank(
        &self,
        entities: Vec<Entity>,
        category_weights: Option<&HashMap<String, f64>>,
    ) -> Vec<Entity> {
        let mut scored: Vec<(f64, Entity)> = entities
            .into_iter()
            .map(|e| (self.score(&e, category_weights), e))
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().map(|(_, e)| e).collect()
    }
}

impl Default for EntityImportanceModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Log-scale a count into [0, 1], saturating at `saturation`.
fn log_scaled(count: u64, saturation: f64) -> f64 {
    ((count as f64).ln_1p() / saturation.ln_1p()).min(1.0)
}
