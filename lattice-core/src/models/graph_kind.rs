use serde::{Deserialize, Serialize};

/// Declared shape of the backing knowledge graph.
///
/// Accessors that know their shape declare it; those that don't return
/// `Unknown` and the planner classifies from sampled relationship types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GraphKind {
    /// Category/taxonomy-style graph: subclass, instance, containment edges.
    Hierarchical,
    /// Flat associative graph: related/similar/mentions edges.
    FlatLink,
    #[default]
    Unknown,
}
