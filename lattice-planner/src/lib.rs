//! # lattice-planner
//!
//! Graph-aware retrieval query planner. Given a query embedding (plus
//! optional text) against a category-enriched knowledge graph, produces an
//! [`ExecutionPlan`](lattice_core::ExecutionPlan) balancing vector search
//! against graph traversal under a resource budget.
//!
//! Pipeline (fixed order): base weighting → expansion → rewriting →
//! traversal planning → budget allocation. The planner only plans; an
//! external executor runs the search and the walk.

pub mod budget;
pub mod category;
pub mod classify;
pub mod engine;
pub mod expansion;
pub mod importance;
pub mod learning;
pub mod rewrite;
pub mod traversal;
pub mod weights;

pub use engine::QueryPlanner;
pub use weights::RelationshipWeightTable;
