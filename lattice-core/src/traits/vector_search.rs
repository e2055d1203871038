use crate::errors::PlannerResult;
use crate::models::SearchHit;

/// External vector-similarity search capability.
pub trait VectorSearch: Send + Sync {
    /// Search for the `top_k` nearest neighbors of `vector`, optionally
    /// filtered to one entity kind (e.g. `"topic"`).
    fn search(
        &self,
        vector: &[f32],
        top_k: usize,
        filter: Option<&str>,
    ) -> PlannerResult<Vec<SearchHit>>;
}
