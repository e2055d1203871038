use serde::{Deserialize, Serialize};

/// Query-intent pattern detected by the rewriter.
///
/// Detection order is fixed: Comparison, Definition, Causal, Enumeration,
/// Lookup. First match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// "about X" / "information on X"
    Lookup,
    /// "compare X and Y"
    Comparison,
    /// "what is X"
    Definition,
    /// "effects of X" / "causes of X"
    Causal,
    /// "list X" / "types of X"
    Enumeration,
}

/// Named traversal strategy injected into the plan by the rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Lean on category/subclass edges.
    Hierarchical,
    /// Lean on vector search and topic expansion.
    TopicFocused,
    /// Walk both entities looking for shared categories.
    Comparison,
    /// Follow causal edges in both directions.
    Causal,
    /// Fan out over subclass/instance edges.
    Enumeration,
}

impl PatternKind {
    /// Strategy this pattern selects.
    pub fn strategy(self) -> Strategy {
        match self {
            PatternKind::Lookup => Strategy::TopicFocused,
            PatternKind::Comparison => Strategy::Comparison,
            PatternKind::Definition => Strategy::Hierarchical,
            PatternKind::Causal => Strategy::Causal,
            PatternKind::Enumeration => Strategy::Enumeration,
        }
    }
}
