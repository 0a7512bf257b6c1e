//! Graph builder — walks a JSON document and assembles the graph.
//!
//! Pre-order depth-first traversal: every value becomes exactly one node,
//! every non-root value gets one edge from its parent. Arrays are visited
//! in index order, objects in map iteration order (insertion order, since
//! the map preserves it).

use petgraph::graph::NodeIndex;
use serde_json::Value;
use tracing::debug;

use super::engine::JsonGraph;
use super::layout::LayoutCursor;
use super::types::GraphNode;
use crate::path::{PathId, ROOT};

/// Build the complete node/edge collection for a document.
///
/// Pure function of its input: repeated calls over the same value produce
/// identical graphs, positions included. The row cursor lives inside the
/// call, never across calls.
pub fn build_graph(value: &Value) -> JsonGraph {
    let mut builder = Builder {
        graph: JsonGraph::new(),
        cursor: LayoutCursor::new(),
    };
    builder.visit(value, PathId::root(), 0, ROOT, None);
    debug!(
        nodes = builder.graph.node_count(),
        edges = builder.graph.edge_count(),
        "built graph"
    );
    builder.graph
}

struct Builder {
    graph: JsonGraph,
    cursor: LayoutCursor,
}

impl Builder {
    fn visit(
        &mut self,
        value: &Value,
        path: PathId,
        depth: usize,
        name: &str,
        parent: Option<NodeIndex>,
    ) {
        // Skip creation (and its row) if the address is already taken;
        // only reachable through the unescaped-separator ambiguity.
        let idx = match self.graph.index_of(&path) {
            Some(idx) => idx,
            None => {
                let position = self.cursor.place(depth);
                self.graph
                    .add_node(GraphNode::new(path.clone(), name, value, position))
            }
        };

        if let Some(parent) = parent {
            self.graph.add_edge(parent, idx);
        }

        match value {
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    let child_name = format!("{}[{}]", name, i);
                    self.visit(item, path.child_index(i), depth + 1, &child_name, Some(idx));
                }
            }
            Value::Object(members) => {
                for (key, member) in members {
                    self.visit(member, path.child_key(key), depth + 1, key, Some(idx));
                }
            }
            _ => {}
        }
    }
}
