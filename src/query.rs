//! Query resolver — free text in, node address out.
//!
//! Normalizes whatever the user typed into a path address and looks it up
//! against the built node set. An empty graph is reported separately from
//! a miss so the caller can say "nothing to search" instead of "not found".

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::{GraphNode, JsonGraph};
use crate::path::PathId;

/// Normalize a user query into a path address.
///
/// Leading/trailing whitespace is trimmed; queries not anchored at `$` are
/// anchored, inserting a `.` unless the rest already starts with one:
/// `user.name` → `$.user.name`, `.user` → `$.user`, `items[0]` →
/// `$.items[0]`. Queries already starting with `$` pass through unchanged.
pub fn normalize(query: &str) -> PathId {
    let trimmed = query.trim();
    if trimmed.starts_with('$') {
        PathId::from(trimmed)
    } else if trimmed.starts_with('.') {
        PathId::from(format!("${}", trimmed))
    } else {
        PathId::from(format!("$.{}", trimmed))
    }
}

/// Outcome of resolving a query against a graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    /// Exactly one node matched the normalized address.
    Found(&'a GraphNode),
    /// The graph has nodes, but none at the normalized address.
    NoMatch { normalized: PathId },
    /// Nothing to search: the graph has no nodes at all.
    EmptyGraph,
}

/// Resolve a free-text query to a node.
pub fn resolve<'a>(graph: &'a JsonGraph, query: &str) -> Resolution<'a> {
    if graph.is_empty() {
        return Resolution::EmptyGraph;
    }
    let normalized = normalize(query);
    match graph.get(&normalized) {
        Some(node) => {
            debug!(path = %normalized, "query matched");
            Resolution::Found(node)
        }
        None => Resolution::NoMatch { normalized },
    }
}

/// Capability the rendering collaborator implements to center and
/// highlight one node. A call must leave exactly that node distinguished,
/// clearing any previous distinction; the core never implements scroll or
/// pan fallbacks itself.
pub trait FocusTarget {
    fn focus(&mut self, id: &PathId);
}

/// Resolve `query` and, on a match, point the rendering surface at it.
pub fn resolve_and_focus<'a>(
    graph: &'a JsonGraph,
    query: &str,
    target: &mut dyn FocusTarget,
) -> Resolution<'a> {
    let resolution = resolve(graph, query);
    if let Resolution::Found(node) = &resolution {
        target.focus(&node.id);
    }
    resolution
}

/// Machine-readable search outcome for external consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub found: bool,
    pub query: String,
    /// The address the query normalized to, when the graph was searchable.
    pub normalized: Option<PathId>,
    pub node: Option<GraphNode>,
    /// How the search ended: "ok", "no_match", or "empty_graph".
    pub outcome: String,
}

impl SearchResponse {
    pub fn from_resolution(query: &str, resolution: &Resolution<'_>) -> Self {
        match resolution {
            Resolution::Found(node) => Self {
                found: true,
                query: query.to_string(),
                normalized: Some(node.id.clone()),
                node: Some((*node).clone()),
                outcome: "ok".to_string(),
            },
            Resolution::NoMatch { normalized } => Self {
                found: false,
                query: query.to_string(),
                normalized: Some(normalized.clone()),
                node: None,
                outcome: "no_match".to_string(),
            },
            Resolution::EmptyGraph => Self {
                found: false,
                query: query.to_string(),
                normalized: None,
                node: None,
                outcome: "empty_graph".to_string(),
            },
        }
    }
}
