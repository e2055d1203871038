/// Lattice system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Edge weights are clamped to this closed interval at all times.
pub const MIN_EDGE_WEIGHT: f64 = 0.1;
pub const MAX_EDGE_WEIGHT: f64 = 2.0;

/// Share of the node budget given to traversal level 0.
pub const LEVEL_ZERO_BUDGET_SHARE: f64 = 0.4;

/// Base share for levels past the first, before geometric decay.
pub const LEVEL_BUDGET_BASE_SHARE: f64 = 0.2;

/// Geometric decay factor applied per traversal level beyond the first.
pub const LEVEL_BUDGET_DECAY: f64 = 0.7;

/// Importance sub-score used when an entity feature is absent.
pub const NEUTRAL_FEATURE_SCORE: f64 = 0.5;

/// Early stopping: confidence a result must exceed to count as high-confidence.
pub const EARLY_STOP_CONFIDENCE: f64 = 0.85;
/// Early stopping: high-confidence category results required.
pub const EARLY_STOP_MIN_CONFIDENT: usize = 3;
/// Early stopping: budget fraction consumed before confidence-based stop.
pub const EARLY_STOP_CONFIDENT_BUDGET: f64 = 0.6;
/// Early stopping: unique-category fraction below which diversity has collapsed.
pub const EARLY_STOP_DIVERSITY_FLOOR: f64 = 0.3;
/// Early stopping: result count above which diversity is measured.
pub const EARLY_STOP_DIVERSITY_SAMPLE: usize = 10;
/// Early stopping: budget fraction consumed before diversity-based stop.
pub const EARLY_STOP_DIVERSITY_BUDGET: f64 = 0.7;
