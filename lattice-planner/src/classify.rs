//! Graph-shape classification from sampled relationship vocabulary.
//!
//! Used when an accessor declares `GraphKind::Unknown`: the relationship
//! labels it exposes are matched against known hierarchical and flat-link
//! vocabularies. A tie stays Unknown.

use lattice_core::models::GraphKind;

use crate::weights::normalize_edge_type;

const HIERARCHICAL_VOCAB: &[&str] = &[
    "subclass_of",
    "instance_of",
    "part_of",
    "category_contains",
    "belongs_to_category",
    "parent_of",
    "child_of",
    "broader_than",
    "narrower_than",
];

const FLAT_LINK_VOCAB: &[&str] = &[
    "related_to",
    "similar_to",
    "mentions",
    "mentioned_by",
    "links_to",
    "see_also",
    "co_occurs_with",
];

/// Classify a graph from its relationship-type labels.
pub fn classify_graph(relationship_types: &[String]) -> GraphKind {
    let mut hierarchical = 0usize;
    let mut flat = 0usize;

    for raw in relationship_types {
        let normalized = normalize_edge_type(raw);
        if HIERARCHICAL_VOCAB.contains(&normalized.as_str()) {
            hierarchical += 1;
        } else if FLAT_LINK_VOCAB.contains(&normalized.as_str()) {
            flat += 1;
        }
    }

    match hierarchical.cmp(&flat) {
        std::cmp::Ordering::Greater => GraphKind::Hierarchical,
        std::cmp::Ordering::Less => GraphKind::FlatLink,
        std::cmp::Ordering::Equal => GraphKind::Unknown,
    }
}
