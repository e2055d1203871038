//! Capability traits at the planner's external seams.

mod graph_access;
mod tracer;
mod vector_search;

pub use graph_access::GraphAccess;
pub use tracer::{NoopTracer, PlanTracer};
pub use vector_search::VectorSearch;
