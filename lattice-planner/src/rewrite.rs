//! Intent-pattern query rewriting.
//!
//! A small ordered table of regex templates. Patterns are tried in a fixed
//! order — Comparison, Definition, Causal, Enumeration, Lookup — and the
//! first match wins. On a match the plan gets a named strategy plus
//! pattern-specific traversal hints; no match leaves the plan unchanged.

use std::sync::LazyLock;

use lattice_core::models::{PatternKind, TraversalPlan};
use regex::Regex;
use tracing::debug;

static COMPARISON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:compare|difference\s+between)\s+(.+?)\s+(?:and|with|to|vs\.?|versus)\s+(.+?)[?.!]*$")
        .expect("comparison pattern")
});

static DEFINITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:what\s+(?:is|are)|define)\s+(?:a\s+|an\s+|the\s+)?(.+?)[?.!]*$")
        .expect("definition pattern")
});

static CAUSAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:effects?|causes?|consequences?|impacts?)\s+of\s+(.+?)[?.!]*$|(?i)\bwhat\s+causes\s+(.+?)[?.!]*$")
        .expect("causal pattern")
});

static ENUMERATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:list|types?\s+of|kinds?\s+of|examples?\s+of)\s+(.+?)[?.!]*$")
        .expect("enumeration pattern")
});

static LOOKUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:about|information\s+on|tell\s+me\s+about)\s+(.+?)[?.!]*$")
        .expect("lookup pattern")
});

/// Detection order. First match wins.
static PATTERN_ORDER: [(PatternKind, &LazyLock<Regex>); 5] = [
    (PatternKind::Comparison, &COMPARISON_RE),
    (PatternKind::Definition, &DEFINITION_RE),
    (PatternKind::Causal, &CAUSAL_RE),
    (PatternKind::Enumeration, &ENUMERATION_RE),
    (PatternKind::Lookup, &LOOKUP_RE),
];

pub struct QueryRewriter;

impl QueryRewriter {
    /// Detect a query-intent pattern and extract its entities.
    pub fn rewrite(query_text: &str) -> Option<(PatternKind, Vec<String>)> {
        for (kind, regex) in PATTERN_ORDER {
            if let Some(caps) = regex.captures(query_text) {
                let entities: Vec<String> = caps
                    .iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str().trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                debug!(?kind, ?entities, "query pattern detected");
                return Some((kind, entities));
            }
        }
        None
    }

    /// Inject the strategy and pattern-specific preferences into a plan.
    pub fn apply_hints(plan: &mut TraversalPlan, kind: PatternKind, entities: &[String]) {
        plan.strategy = Some(kind.strategy());
        plan.hints.insert(
            "pattern_entities".to_string(),
            serde_json::json!(entities),
        );

        let priority_edges: &[&str] = match kind {
            PatternKind::Comparison => {
                plan.hints
                    .insert("find_common_categories".to_string(), serde_json::json!(true));
                &["belongs_to_category", "subclass_of"]
            }
            PatternKind::Definition => &["instance_of", "subclass_of"],
            PatternKind::Causal => &["causes", "caused_by"],
            PatternKind::Enumeration => {
                plan.hints
                    .insert("fan_out".to_string(), serde_json::json!(true));
                &["subclass_of", "instance_of"]
            }
            PatternKind::Lookup => {
                plan.hints
                    .insert("focus_topics".to_string(), serde_json::json!(entities));
                &[]
            }
        };

        if !priority_edges.is_empty() {
            plan.hints.insert(
                "priority_edges".to_string(),
                serde_json::json!(priority_edges),
            );
            promote_edges(plan, priority_edges);
        }
    }
}

/// Move preferred edge types to the front of the walk order, keeping the
/// relative order of everything else.
fn promote_edges(plan: &mut TraversalPlan, preferred: &[&str]) {
    let (mut front, back): (Vec<String>, Vec<String>) = plan
        .edge_types
        .drain(..)
        .partition(|e| preferred.contains(&e.as_str()));
    front.extend(back);
    plan.edge_types = front;
}
