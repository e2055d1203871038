//! Named default values referenced by `Default` impls and serde defaults.

/// Weight assigned to edge types with no explicit entry.
pub const DEFAULT_EDGE_WEIGHT: f64 = 0.5;

/// Minimum similarity for an expanded topic to be kept.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.65;

/// Maximum topics/categories added per expansion.
pub const DEFAULT_MAX_EXPANSIONS: usize = 5;

/// Default maximum graph traversal depth.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Default total node budget for a traversal.
pub const DEFAULT_NODE_BUDGET: usize = 200;

/// Learning rate for feedback-driven weight adjustment.
pub const DEFAULT_LEARNING_RATE: f64 = 0.05;

/// Baseline per-phase budgets (time in ms, node counts).
pub const DEFAULT_VECTOR_SEARCH_MS: u64 = 500;
pub const DEFAULT_GRAPH_TRAVERSAL_MS: u64 = 1_000;
pub const DEFAULT_CATEGORY_TRAVERSAL_MS: u64 = 300;
pub const DEFAULT_TOPIC_EXPANSION_MS: u64 = 200;
pub const DEFAULT_VECTOR_TOP_K: usize = 20;
pub const DEFAULT_CATEGORY_NODE_BUDGET: usize = 50;
pub const DEFAULT_TOPIC_NODE_BUDGET: usize = 30;
