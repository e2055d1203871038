//! # lattice-core
//!
//! Foundation crate for the Lattice query planner.
//! Defines all types, traits, errors, config, and constants.
//! The planner crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PlannerConfig;
pub use errors::{PlannerError, PlannerResult};
pub use models::{Budget, ExecutionPlan, ExpansionResult, Priority, Query, TraversalPlan};
