use uuid::Uuid;

/// Optional trace/metrics sink. Every recoverable failure the planner
/// swallows is reported here in addition to the log.
pub trait PlanTracer: Send + Sync {
    /// Record a planning event with a structured payload.
    fn log_event(&self, kind: &str, payload: &serde_json::Value);

    /// Begin tracking one plan; the returned id is stored on the plan for
    /// correlation with executor-side metrics.
    fn start_tracking(&self, query_params: &serde_json::Value) -> Uuid;
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl PlanTracer for NoopTracer {
    fn log_event(&self, _kind: &str, _payload: &serde_json::Value) {}

    fn start_tracking(&self, _query_params: &serde_json::Value) -> Uuid {
        Uuid::new_v4()
    }
}
