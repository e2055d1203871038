//! Property tests for planner invariants.

use chrono::{Duration, Utc};
use lattice_core::config::BudgetDefaults;
use lattice_core::models::{Entity, Priority, TraversalPlan};
use lattice_planner::budget::BudgetAllocator;
use lattice_planner::importance::EntityImportanceModel;
use lattice_planner::traversal::TraversalPlanner;
use lattice_planner::weights::RelationshipWeightTable;
use proptest::prelude::*;

fn edge_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("subclass_of".to_string()),
        Just("instance_of".to_string()),
        Just("related_to".to_string()),
        Just("mentions".to_string()),
        "[a-z]{3,12}(_[a-z]{2,8})?",
    ]
}

proptest! {
    #[test]
    fn adjustments_never_escape_the_weight_bounds(
        edge in edge_label(),
        deltas in prop::collection::vec(-5.0f64..5.0, 1..20),
    ) {
        let mut table = RelationshipWeightTable::default_weights();
        for delta in deltas {
            table.adjust(&edge, delta);
            let w = table.weight(&edge);
            prop_assert!((0.1..=2.0).contains(&w));
        }
    }

    #[test]
    fn prioritize_is_idempotent(labels in prop::collection::vec(edge_label(), 0..8)) {
        let table = RelationshipWeightTable::default_weights();
        let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let once = table.prioritize(&refs);
        let twice = table.prioritize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn importance_scores_stay_in_unit_interval(
        conn_in in prop::option::of(0u64..100_000),
        conn_out in prop::option::of(0u64..100_000),
        references in prop::option::of(0u64..10_000),
        mentions in prop::option::of(0u64..10_000),
        age_days in prop::option::of(0i64..2_000),
    ) {
        let model = EntityImportanceModel::new();
        let mut entity = Entity::new("prop-entity");
        entity.connections_in = conn_in;
        entity.connections_out = conn_out;
        entity.references = references;
        entity.mentions = mentions;
        entity.last_modified = age_days.map(|d| Utc::now() - Duration::days(d));

        let score = model.score(&entity, None);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn level_budgets_are_front_loaded_and_bounded(
        max_depth in 1usize..10,
        total in 1usize..10_000,
    ) {
        let table = RelationshipWeightTable::default_weights();
        let plan = TraversalPlanner::plan(&table, &["subclass_of", "mentions"], max_depth, total);

        prop_assert_eq!(plan.level_budgets.len(), max_depth);
        prop_assert!(plan.level_budgets.iter().sum::<usize>() <= total);
        for pair in plan.level_budgets.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn active_depths_are_positive_and_capped(
        labels in prop::collection::vec(edge_label(), 1..8),
        max_depth in 1usize..8,
    ) {
        let table = RelationshipWeightTable::default_weights();
        let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let plan = TraversalPlanner::plan(&table, &refs, max_depth, 100);
        for depth in plan.active_depths.values() {
            prop_assert!(*depth >= 1);
            prop_assert!(*depth <= max_depth);
        }
    }

    #[test]
    fn budgets_grow_monotonically_with_priority(expansion in prop::option::of(1.0f64..3.0)) {
        let allocator = BudgetAllocator::new(BudgetDefaults::default());
        let plan = TraversalPlan::empty();

        let low = allocator.allocate(&plan, Priority::Low, expansion);
        let normal = allocator.allocate(&plan, Priority::Normal, expansion);
        let high = allocator.allocate(&plan, Priority::High, expansion);

        prop_assert!(low.vector_search_ms <= normal.vector_search_ms);
        prop_assert!(normal.vector_search_ms <= high.vector_search_ms);
        prop_assert!(low.graph_node_budget <= normal.graph_node_budget);
        prop_assert!(normal.graph_node_budget <= high.graph_node_budget);
        prop_assert!(low.topic_node_budget <= normal.topic_node_budget);
        prop_assert!(normal.topic_node_budget <= high.topic_node_budget);
    }
}
