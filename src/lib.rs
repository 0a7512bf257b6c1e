//! # Treeflow
//!
//! Turn any JSON document into a navigable node-and-edge graph.
//!
//! Treeflow converts a parsed JSON value into a uniquely-addressed,
//! positioned graph that a rendering surface can draw directly, and
//! resolves free-text path queries back to graph nodes.
//!
//! ## Key Features
//!
//! - **Path-addressed**: every location gets a stable `$.a.b[0]` address
//! - **Deterministic**: same document, same graph — positions included
//! - **Navigable**: free-text queries resolve to nodes for highlighting
//! - **Renderer-agnostic**: nodes carry ids, positions, and display data;
//!   the drawing surface is an external collaborator
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use treeflow::{build_graph, resolve, Resolution};
//!
//! let doc = json!({"user": {"name": "Ada"}, "active": true});
//! let graph = build_graph(&doc);
//! assert_eq!(graph.node_count(), 4);
//!
//! match resolve(&graph, "user.name") {
//!     Resolution::Found(node) => assert_eq!(node.id.as_str(), "$.user.name"),
//!     other => panic!("unexpected resolution: {:?}", other),
//! }
//! ```

pub mod error;
pub mod graph;
pub mod input;
pub mod path;
pub mod query;

// Re-exports for convenience
pub use error::{Result, TreeflowError};

// Graph re-exports
pub use graph::{
    build_graph, GraphData, GraphEdge, GraphNode, GraphStats, JsonGraph, NodeCategory, NodeColors,
    Position,
};
pub use input::{load_document, parse_text};
pub use path::PathId;
pub use query::{
    normalize, resolve, resolve_and_focus, FocusTarget, Resolution, SearchResponse,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::{HashMap, HashSet, VecDeque};

    fn sample_doc() -> serde_json::Value {
        json!({
            "name": "Bhavesh",
            "items": [1, 2]
        })
    }

    #[test]
    fn test_graph_is_a_tree() {
        let doc = json!({
            "user": {
                "name": "Ada",
                "address": {"city": "London", "zip": null},
                "tags": ["admin", "dev"]
            },
            "counts": [1, [2, 3]],
            "active": true
        });
        let graph = build_graph(&doc);

        // one node per value, one edge per parent-child relation
        assert_eq!(graph.edge_count(), graph.node_count() - 1);

        // every non-root node has exactly one incoming edge
        let mut incoming: HashMap<&str, usize> = HashMap::new();
        for edge in graph.edges() {
            *incoming.entry(edge.target.as_str()).or_default() += 1;
        }
        for node in graph.nodes() {
            if node.id.is_root() {
                assert!(!incoming.contains_key(node.id.as_str()));
            } else {
                assert_eq!(incoming.get(node.id.as_str()), Some(&1), "{}", node.id);
            }
        }

        // all nodes reachable from the root by walking edges
        let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
        for edge in graph.edges() {
            adjacency
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
        }
        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::from(["$"]);
        while let Some(id) = queue.pop_front() {
            if seen.insert(id) {
                queue.extend(adjacency.get(id).into_iter().flatten().copied());
            }
        }
        assert_eq!(seen.len(), graph.node_count());
    }

    #[test]
    fn test_path_ids_are_unique() {
        let doc = json!({
            "a": {"b": [{"c": 1}, {"c": 2}]},
            "b": [null, [true, false]]
        });
        let graph = build_graph(&doc);

        let ids: HashSet<&str> = graph.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), graph.node_count());
    }

    #[test]
    fn test_rebuild_is_identical() {
        let doc = json!({"user": {"tags": ["a", "b"]}, "n": 7});
        let first = build_graph(&doc).to_data();
        let second = build_graph(&doc).to_data();
        // ids, categories, raw values AND positions agree
        assert_eq!(first, second);
    }

    #[test]
    fn test_query_forms_normalize_to_same_node() {
        let doc = json!({"user": {"name": "Ada"}});
        let graph = build_graph(&doc);

        for query in ["user.name", ".user.name", "$.user.name", "  user.name "] {
            match resolve(&graph, query) {
                Resolution::Found(node) => assert_eq!(node.id.as_str(), "$.user.name"),
                other => panic!("{:?} for query {:?}", other, query),
            }
        }
    }

    #[test]
    fn test_category_classification() {
        let graph = build_graph(&json!({"a": null}));
        let node = graph.get(&"$.a".into()).unwrap();
        assert_eq!(node.category, NodeCategory::Null);

        let graph = build_graph(&json!([1, "x", true]));
        let expectations = [
            ("$[0]", NodeCategory::Number),
            ("$[1]", NodeCategory::String),
            ("$[2]", NodeCategory::Boolean),
        ];
        for (path, category) in expectations {
            assert_eq!(graph.get(&path.into()).unwrap().category, category);
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let graph = build_graph(&sample_doc());

        let ids: Vec<&str> = graph.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["$", "$.name", "$.items", "$.items[0]", "$.items[1]"]);
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 4);

        match resolve(&graph, "items[0]") {
            Resolution::Found(node) => {
                assert_eq!(node.id.as_str(), "$.items[0]");
                assert_eq!(node.label, "items[0]: 1 (number)");
            }
            other => panic!("unexpected resolution: {:?}", other),
        }

        match resolve(&graph, "missing") {
            Resolution::NoMatch { normalized } => assert_eq!(normalized.as_str(), "$.missing"),
            other => panic!("unexpected resolution: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_input_yields_empty_graph() {
        let err = parse_text("{bad json").unwrap_err();
        assert!(matches!(err, TreeflowError::MalformedInput(_)));

        // the consumer renders an empty collection in that case; searching
        // it reports "nothing to search" rather than a plain miss
        let graph = JsonGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.to_data(), GraphData::default());
        assert_eq!(resolve(&graph, "anything"), Resolution::EmptyGraph);
    }

    #[test]
    fn test_children_follow_document_order() {
        let doc = json!({"z": 1, "a": 2, "m": 3});
        let graph = build_graph(&doc);

        // insertion order, not alphabetical
        let kids: Vec<&str> = graph
            .children(&PathId::root())
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(kids, vec!["$.z", "$.a", "$.m"]);
    }

    #[test]
    fn test_snapshot_round_trips_through_serde() {
        let graph = build_graph(&sample_doc());
        let data = graph.to_data();

        let text = serde_json::to_string(&data).unwrap();
        let back: GraphData = serde_json::from_str(&text).unwrap();
        assert_eq!(back, data);
        assert_eq!(back.nodes[0].id.as_str(), "$");
    }

    #[test]
    fn test_stats_for_sample_document() {
        let graph = build_graph(&sample_doc());
        let stats = graph.stats();
        assert_eq!(stats.total_nodes, 5);
        assert_eq!(stats.total_edges, 4);
        assert_eq!(stats.objects, 1);
        assert_eq!(stats.arrays, 1);
        assert_eq!(stats.scalars, 3);
    }
}
