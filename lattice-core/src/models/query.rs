use serde::{Deserialize, Serialize};

/// Caller-declared urgency. Scales the budget baseline monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    /// Budget multiplier. Monotonic low → high.
    pub fn multiplier(self) -> f64 {
        match self {
            Priority::Low => 0.5,
            Priority::Normal => 1.0,
            Priority::High => 1.5,
        }
    }
}

/// A planning request: an embedding vector (required for planning) plus
/// optional text used for expansion and intent rewriting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    pub embedding: Option<Vec<f32>>,
    pub text: Option<String>,
    pub priority: Priority,
    /// Multiplier applied to topic-expansion budgets when expansion runs.
    pub expansion_factor: f64,
}

impl Query {
    pub fn new(embedding: Vec<f32>) -> Self {
        Self {
            embedding: Some(embedding),
            text: None,
            priority: Priority::Normal,
            expansion_factor: 1.0,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_expansion_factor(mut self, factor: f64) -> Self {
        self.expansion_factor = factor;
        self
    }
}
