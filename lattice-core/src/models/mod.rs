//! Planner data model: inputs (query, entities), intermediate products
//! (expansion, traversal schedule), and the final ExecutionPlan handed to an
//! external executor.

mod budget;
mod entity;
mod execution_plan;
mod expansion_result;
mod graph_kind;
mod pattern;
mod query;
mod search_hit;
mod traversal_plan;

pub use budget::Budget;
pub use entity::Entity;
pub use execution_plan::{BlendWeights, ExecutionPlan, VectorSearchParams};
pub use expansion_result::{ExpansionResult, MatchedCategory, RelatedTopic};
pub use graph_kind::GraphKind;
pub use pattern::{PatternKind, Strategy};
pub use query::{Priority, Query};
pub use search_hit::SearchHit;
pub use traversal_plan::TraversalPlan;
