use crate::errors::PlannerResult;
use crate::models::{Entity, GraphKind};

/// Knowledge-graph data accessor.
///
/// Accessors declare their shape through `graph_kind()`; the default is
/// `Unknown`, in which case the planner classifies from a sample of
/// relationship types instead of probing for capabilities.
pub trait GraphAccess: Send + Sync {
    /// Feature snapshot for one entity, `None` if absent.
    fn entity(&self, id: &str) -> PlannerResult<Option<Entity>>;

    /// Relationship-type labels present in the graph (sample is fine).
    fn relationship_types(&self) -> PlannerResult<Vec<String>>;

    /// Total entity count, used to detect the degenerate empty graph.
    fn entity_count(&self) -> PlannerResult<usize>;

    /// Declared graph shape.
    fn graph_kind(&self) -> GraphKind {
        GraphKind::Unknown
    }
}
