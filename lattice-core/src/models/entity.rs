use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A read-only entity snapshot supplied by the caller. The planner never
/// mutates these; absent features score as neutral rather than zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    /// Inbound relationship count.
    pub connections_in: Option<u64>,
    /// Outbound relationship count.
    pub connections_out: Option<u64>,
    /// How many other entities reference this one.
    pub references: Option<u64>,
    /// Category memberships.
    pub categories: Vec<String>,
    /// How often the entity is mentioned in source material.
    pub mentions: Option<u64>,
    pub last_modified: Option<DateTime<Utc>>,
}

impl Entity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            connections_in: None,
            connections_out: None,
            references: None,
            categories: Vec::new(),
            mentions: None,
            last_modified: None,
        }
    }

    /// Total connection count across both directions, if either is known.
    pub fn connections(&self) -> Option<u64> {
        match (self.connections_in, self.connections_out) {
            (None, None) => None,
            (a, b) => Some(a.unwrap_or(0) + b.unwrap_or(0)),
        }
    }
}
