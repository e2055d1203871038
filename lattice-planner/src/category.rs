//! Category hierarchy: a directed graph of category names with memoized
//! depth and bidirectional neighborhood queries.
//!
//! The graph is append-only during a session: callers register parent→child
//! edges up front, then planning reads it concurrently. The depth memo is
//! the only mutable state on the read path, hence the concurrent map.

use std::collections::{HashMap, HashSet, VecDeque};

use dashmap::DashMap;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::Direction;

/// Directed category hierarchy. Edges point parent → child.
pub struct CategoryGraph {
    graph: StableDiGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
    /// Memoized depths, invalidated only by `clear_depth_cache`.
    depth_cache: DashMap<String, usize>,
}

impl CategoryGraph {
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::new(),
            index: HashMap::new(),
            depth_cache: DashMap::new(),
        }
    }

    fn intern(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Register a parent→child edge. Adding the same edge twice is a no-op.
    pub fn register_edge(&mut self, parent: &str, child: &str) {
        let p = self.intern(parent);
        let c = self.intern(child);
        self.graph.update_edge(p, c, ());
    }

    pub fn contains(&self, category: &str) -> bool {
        self.index.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All known category names, in no particular order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Depth of a category: 0 for roots (and unknown names), otherwise
    /// 1 + max(parent depths). Memoized. Cycle-safe: a node revisited
    /// during its own computation contributes 0 for that branch, so cyclic
    /// graphs terminate with a bounded (if arbitrary) depth.
    pub fn depth(&self, category: &str) -> usize {
        let Some(&idx) = self.index.get(category) else {
            return 0;
        };
        let mut visiting = HashSet::new();
        self.depth_inner(idx, &mut visiting)
    }

    fn depth_inner(&self, idx: NodeIndex, visiting: &mut HashSet<NodeIndex>) -> usize {
        let name = &self.graph[idx];
        if let Some(cached) = self.depth_cache.get(name) {
            return *cached;
        }
        if !visiting.insert(idx) {
            // Cycle guard: this node is already on the current path.
            return 0;
        }

        let depth = self
            .graph
            .neighbors_directed(idx, Direction::Incoming)
            .collect::<Vec<_>>()
            .into_iter()
            .map(|parent| self.depth_inner(parent, visiting))
            .max()
            .map(|d| d + 1)
            .unwrap_or(0);

        visiting.remove(&idx);
        self.depth_cache.insert(name.clone(), depth);
        depth
    }

    /// Drop all memoized depths. Call after bulk edge registration if the
    /// graph was queried mid-build.
    pub fn clear_depth_cache(&self) {
        self.depth_cache.clear();
    }

    /// Categories within `max_distance` hops of `category`, walking both
    /// child and parent edges. The source itself is never included.
    pub fn related(&self, category: &str, max_distance: usize) -> Vec<(String, usize)> {
        let Some(&start) = self.index.get(category) else {
            return Vec::new();
        };

        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([(start, 0usize)]);
        let mut found = Vec::new();

        while let Some((idx, dist)) = queue.pop_front() {
            if dist >= max_distance {
                continue;
            }
            let neighbors = self
                .graph
                .neighbors_directed(idx, Direction::Outgoing)
                .chain(self.graph.neighbors_directed(idx, Direction::Incoming));
            for next in neighbors {
                if seen.insert(next) {
                    found.push((self.graph[next].clone(), dist + 1));
                    queue.push_back((next, dist + 1));
                }
            }
        }

        found
    }

    /// Per-category weights for result scoring: deeper (more specific)
    /// categories weigh more, scaled by an optional similarity score.
    pub fn weights_for(
        &self,
        categories: &[String],
        similarity_scores: Option<&HashMap<String, f64>>,
    ) -> HashMap<String, f64> {
        categories
            .iter()
            .map(|cat| {
                let depth_factor = 0.5 + ((self.depth(cat) as f64) / 10.0).min(1.0);
                let similarity = similarity_scores
                    .and_then(|s| s.get(cat))
                    .copied()
                    .unwrap_or(1.0);
                (cat.clone(), depth_factor * similarity)
            })
            .collect()
    }
}

impl Default for CategoryGraph {
    fn default() -> Self {
        Self::new()
    }
}
