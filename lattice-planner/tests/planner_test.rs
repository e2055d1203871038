//! End-to-end planner tests with stub search and graph collaborators.

use std::sync::{Arc, Mutex};

use lattice_core::config::PlannerConfig;
use lattice_core::errors::{PlannerError, PlannerResult};
use lattice_core::models::{Entity, GraphKind, Priority, Query, SearchHit, Strategy};
use lattice_core::traits::{GraphAccess, PlanTracer, VectorSearch};
use lattice_planner::category::CategoryGraph;
use lattice_planner::engine::QueryPlanner;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Stubs
// ---------------------------------------------------------------------------

struct StubSearch {
    hits: Vec<SearchHit>,
    fail: bool,
}

impl StubSearch {
    fn with_topics(scores: &[f64]) -> Self {
        let hits = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| SearchHit {
                id: format!("topic-{i}"),
                score,
                metadata: serde_json::json!({ "name": format!("Topic {i}"), "type": "topic" }),
            })
            .collect();
        Self { hits, fail: false }
    }

    fn failing() -> Self {
        Self {
            hits: Vec::new(),
            fail: true,
        }
    }
}

impl VectorSearch for StubSearch {
    fn search(
        &self,
        _vector: &[f32],
        top_k: usize,
        _filter: Option<&str>,
    ) -> PlannerResult<Vec<SearchHit>> {
        if self.fail {
            return Err(PlannerError::Search {
                reason: "stub outage".into(),
            });
        }
        Ok(self.hits.iter().take(top_k).cloned().collect())
    }
}

struct StubGraph {
    relationship_types: Vec<String>,
    entity_count: usize,
    kind: GraphKind,
}

impl StubGraph {
    fn hierarchical() -> Self {
        Self {
            relationship_types: vec![
                "subclass_of".to_string(),
                "instance_of".to_string(),
                "part_of".to_string(),
                "related_to".to_string(),
                "mentions".to_string(),
            ],
            entity_count: 1_000,
            kind: GraphKind::Unknown,
        }
    }

    fn empty() -> Self {
        Self {
            relationship_types: Vec::new(),
            entity_count: 0,
            kind: GraphKind::Unknown,
        }
    }
}

impl GraphAccess for StubGraph {
    fn entity(&self, _id: &str) -> PlannerResult<Option<Entity>> {
        Ok(None)
    }

    fn relationship_types(&self) -> PlannerResult<Vec<String>> {
        Ok(self.relationship_types.clone())
    }

    fn entity_count(&self) -> PlannerResult<usize> {
        Ok(self.entity_count)
    }

    fn graph_kind(&self) -> GraphKind {
        self.kind
    }
}

#[derive(Clone, Default)]
struct RecordingTracer {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingTracer {
    fn recorded(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl PlanTracer for RecordingTracer {
    fn log_event(&self, kind: &str, _payload: &serde_json::Value) {
        self.events.lock().unwrap().push(kind.to_string());
    }

    fn start_tracking(&self, _params: &serde_json::Value) -> Uuid {
        Uuid::new_v4()
    }
}

fn planner() -> QueryPlanner {
    QueryPlanner::new(PlannerConfig::default()).unwrap()
}

fn science_categories() -> CategoryGraph {
    let mut g = CategoryGraph::new();
    g.register_edge("Science", "Physics");
    g.register_edge("Physics", "Quantum Physics");
    g
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn plan_requires_a_query_vector() {
    let planner = planner();
    let query = Query {
        embedding: None,
        text: Some("what is x".to_string()),
        priority: Priority::Normal,
        expansion_factor: 1.0,
    };
    let err = planner
        .plan(
            &query,
            &StubSearch::with_topics(&[]),
            &StubGraph::hierarchical(),
            &CategoryGraph::new(),
        )
        .unwrap_err();
    assert!(matches!(err, PlannerError::InvalidQuery));
}

#[test]
fn empty_graph_still_yields_a_plan() {
    let planner = planner();
    let query = Query::new(vec![0.1; 8]);
    let plan = planner
        .plan(
            &query,
            &StubSearch::with_topics(&[]),
            &StubGraph::empty(),
            &CategoryGraph::new(),
        )
        .unwrap();
    assert!(plan.traversal.is_empty());
    assert!(plan.budget.vector_search_ms > 0);
    assert!(plan.budget.vector_top_k > 0);
}

#[test]
fn full_pipeline_composes_every_stage() {
    let planner = planner();
    let query = Query::new(vec![0.1; 8]).with_text("what is quantum physics");
    let plan = planner
        .plan(
            &query,
            &StubSearch::with_topics(&[0.9, 0.8, 0.4]),
            &StubGraph::hierarchical(),
            &science_categories(),
        )
        .unwrap();

    // Expansion ran: 2 topics clear the 0.65 threshold, categories matched.
    let expansion = plan.expansion.as_ref().unwrap();
    assert_eq!(expansion.related_topics.len(), 2);
    assert!(expansion.has_expansions);

    // Rewriting ran: "what is" is a definition, hierarchy edges first.
    assert_eq!(plan.traversal.strategy, Some(Strategy::Hierarchical));
    assert_eq!(plan.traversal.edge_types[0], "subclass_of");
    assert_eq!(plan.traversal.edge_types[1], "instance_of");

    // Traversal schedule covers the graph's edge types.
    assert_eq!(plan.traversal.edge_types.len(), 5);
    assert_eq!(
        plan.traversal.level_budgets.len(),
        PlannerConfig::default().max_depth
    );

    // Hierarchical classification shifted the blend toward the graph.
    assert!(plan.weights.graph > plan.weights.vector);
    assert!(plan.weights.hierarchical_bonus > 1.0);
}

#[test]
fn failing_search_degrades_to_category_expansion() {
    let planner = planner();
    let query = Query::new(vec![0.1; 8]).with_text("physics");
    let plan = planner
        .plan(
            &query,
            &StubSearch::failing(),
            &StubGraph::hierarchical(),
            &science_categories(),
        )
        .unwrap();
    let expansion = plan.expansion.as_ref().unwrap();
    assert!(expansion.related_topics.is_empty());
    assert_eq!(
        expansion.has_expansions,
        !expansion.matched_categories.is_empty()
    );
}

#[test]
fn priority_scales_the_whole_budget() {
    let planner = planner();
    let base = Query::new(vec![0.1; 8]);
    let low = planner
        .plan(
            &base.clone().with_priority(Priority::Low),
            &StubSearch::with_topics(&[]),
            &StubGraph::hierarchical(),
            &CategoryGraph::new(),
        )
        .unwrap();
    let high = planner
        .plan(
            &base.with_priority(Priority::High),
            &StubSearch::with_topics(&[]),
            &StubGraph::hierarchical(),
            &CategoryGraph::new(),
        )
        .unwrap();
    assert!(low.budget.graph_traversal_ms <= high.budget.graph_traversal_ms);
    assert!(low.budget.vector_top_k <= high.budget.vector_top_k);
}

#[test]
fn tracer_assigns_a_plan_id_and_logs_creation() {
    let planner = planner().with_tracer(Box::new(RecordingTracer::default()));
    let query = Query::new(vec![0.1; 8]);
    let plan = planner
        .plan(
            &query,
            &StubSearch::with_topics(&[]),
            &StubGraph::hierarchical(),
            &CategoryGraph::new(),
        )
        .unwrap();
    assert!(plan.plan_id.is_some());
}

#[test]
fn plan_serializes_as_a_nested_document() {
    let planner = planner();
    let query = Query::new(vec![0.1; 8]).with_text("compare apples and oranges");
    let plan = planner
        .plan(
            &query,
            &StubSearch::with_topics(&[0.9]),
            &StubGraph::hierarchical(),
            &science_categories(),
        )
        .unwrap();

    let doc = serde_json::to_value(&plan).unwrap();
    assert!(doc["traversal"]["edge_types"].is_array());
    assert!(doc["budget"]["graph_node_budget"].is_number());
    assert_eq!(doc["traversal"]["strategy"], "comparison");
    assert_eq!(
        doc["traversal"]["hints"]["find_common_categories"],
        serde_json::json!(true)
    );
}

#[test]
fn overridden_default_weight_reaches_unknown_edge_types() {
    let config = PlannerConfig::from_toml("default_edge_weight = 1.9").unwrap();
    let planner = QueryPlanner::new(config).unwrap();
    assert_eq!(planner.weights().weight("never_seen_edge"), 1.9);

    // The override flows into traversal prioritization: an unknown edge at
    // 1.9 now outranks the built-in subclass_of entry.
    let plan = planner
        .plan(
            &Query::new(vec![0.1; 8]),
            &StubSearch::with_topics(&[]),
            &StubGraph {
                relationship_types: vec![
                    "never_seen_edge".to_string(),
                    "subclass_of".to_string(),
                ],
                entity_count: 10,
                kind: GraphKind::Unknown,
            },
            &CategoryGraph::new(),
        )
        .unwrap();
    assert_eq!(plan.traversal.edge_types[0], "never_seen_edge");
}

#[test]
fn failed_entity_count_degrades_loudly_but_keeps_traversal() {
    struct CountlessGraph;

    impl GraphAccess for CountlessGraph {
        fn entity(&self, _id: &str) -> PlannerResult<Option<Entity>> {
            Ok(None)
        }
        fn relationship_types(&self) -> PlannerResult<Vec<String>> {
            Ok(vec!["subclass_of".to_string(), "related_to".to_string()])
        }
        fn entity_count(&self) -> PlannerResult<usize> {
            Err(PlannerError::GraphAccess {
                reason: "count store offline".into(),
            })
        }
    }

    let tracer = RecordingTracer::default();
    let planner = planner().with_tracer(Box::new(tracer.clone()));
    let plan = planner
        .plan(
            &Query::new(vec![0.1; 8]),
            &StubSearch::with_topics(&[]),
            &CountlessGraph,
            &CategoryGraph::new(),
        )
        .unwrap();

    // The edge types we do have still produce a traversal schedule.
    assert!(!plan.traversal.is_empty());
    assert_eq!(
        plan.traversal.edge_types,
        vec!["subclass_of", "related_to"]
    );

    // The failure is observable, not silently dropped.
    assert!(tracer
        .recorded()
        .contains(&"graph_access_degraded".to_string()));
}

#[test]
fn recorded_outcomes_move_weights_and_history() {
    let mut planner = planner();
    let query = Query::new(vec![0.1; 8]);
    let plan = planner
        .plan(
            &query,
            &StubSearch::with_topics(&[]),
            &StubGraph::hierarchical(),
            &CategoryGraph::new(),
        )
        .unwrap();

    let before = planner.weights().weight("related_to");
    let results = vec![
        lattice_planner::learning::TraversedResult {
            id: "r1".to_string(),
            edge_types: vec!["related_to".to_string()],
        },
        lattice_planner::learning::TraversedResult {
            id: "r2".to_string(),
            edge_types: vec!["related_to".to_string()],
        },
    ];
    planner.record_outcome("q1", &results, 15, &plan);

    assert!(planner.weights().weight("related_to") > before);
    assert_eq!(planner.learning().history().len(), 1);
}
