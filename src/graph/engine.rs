//! The graph store for a rendered document.
//!
//! Uses petgraph to hold the node/edge collection and keeps a path index
//! for exact-address lookup. Node and edge iteration follows insertion
//! order, which the builder guarantees is pre-order.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;
use std::fmt;

use super::types::{GraphData, GraphEdge, GraphNode, NodeCategory};
use crate::path::PathId;

/// A built JSON graph — nodes, edges, and the path index over them.
///
/// Rebuilt from scratch whenever the input document changes; never mutated
/// incrementally.
#[derive(Debug, Default)]
pub struct JsonGraph {
    /// The directed graph storing one node per JSON location.
    graph: DiGraph<GraphNode, GraphEdge>,
    /// Index: path address -> node index.
    path_index: HashMap<PathId, NodeIndex>,
}

impl JsonGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Node Operations ────────────────────────────────────────

    /// Add a node to the graph. Returns its index.
    ///
    /// If a node with the same path already exists the existing index is
    /// returned and the new node is dropped. Under the addressing scheme
    /// this only triggers for keys containing separator characters.
    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        if let Some(&idx) = self.path_index.get(&node.id) {
            return idx;
        }
        let path = node.id.clone();
        let idx = self.graph.add_node(node);
        self.path_index.insert(path, idx);
        idx
    }

    /// Add a parent→child edge between two existing nodes.
    pub fn add_edge(&mut self, parent: NodeIndex, child: NodeIndex) {
        let edge = GraphEdge::between(self.graph[parent].id.clone(), self.graph[child].id.clone());
        self.graph.add_edge(parent, child, edge);
    }

    // ─── Lookup ─────────────────────────────────────────────────

    /// Find the node at an exact path address.
    pub fn get(&self, path: &PathId) -> Option<&GraphNode> {
        self.path_index.get(path).map(|&idx| &self.graph[idx])
    }

    /// Index of the node at `path`, if present.
    pub(crate) fn index_of(&self, path: &PathId) -> Option<NodeIndex> {
        self.path_index.get(path).copied()
    }

    /// The direct children of the node at `path`, in edge insertion order.
    pub fn children(&self, path: &PathId) -> Vec<&GraphNode> {
        let Some(&idx) = self.path_index.get(path) else {
            return Vec::new();
        };
        let mut child_indices: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect();
        // neighbors_directed walks edges most-recent-first
        child_indices.reverse();
        child_indices.into_iter().map(|i| &self.graph[i]).collect()
    }

    /// Iterate all nodes in creation (pre-order) order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_weights()
    }

    /// Iterate all edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.graph.edge_weights()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    // ─── Snapshot & Stats ───────────────────────────────────────

    /// Clone the collection into the serializable form the rendering
    /// surface consumes.
    pub fn to_data(&self) -> GraphData {
        GraphData {
            nodes: self.nodes().cloned().collect(),
            edges: self.edges().cloned().collect(),
        }
    }

    /// Summarize the graph.
    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            total_edges: self.graph.edge_count(),
            ..GraphStats::default()
        };
        for node in self.graph.node_weights() {
            stats.total_nodes += 1;
            match node.category {
                NodeCategory::Object => stats.objects += 1,
                NodeCategory::Array => stats.arrays += 1,
                _ => stats.scalars += 1,
            }
        }
        stats
    }
}

/// Node and edge counts broken down by shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub objects: usize,
    pub arrays: usize,
    pub scalars: usize,
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} edges (objects: {}, arrays: {}, scalars: {})",
            self.total_nodes, self.total_edges, self.objects, self.arrays, self.scalars
        )
    }
}
