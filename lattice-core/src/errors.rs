//! Planner error taxonomy.
//!
//! Fatal: `InvalidQuery` (missing query vector), `Configuration` (bad
//! overrides at construction time). Everything else is recoverable: the
//! planner logs it, degrades the affected stage, and still produces a plan.

/// Result alias used across the workspace.
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Planner errors.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("invalid query: a query vector is required")]
    InvalidQuery,

    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    #[error("query expansion failed: {reason}")]
    Expansion { reason: String },

    #[error("graph access failed: {reason}")]
    GraphAccess { reason: String },

    #[error("vector search failed: {reason}")]
    Search { reason: String },
}

impl PlannerError {
    /// Recoverable errors degrade a single stage instead of aborting the plan.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            PlannerError::InvalidQuery | PlannerError::Configuration { .. }
        )
    }
}
