//! Graph types for the checker.

use serde::{Deserialize, Serialize};

/// Vertex identifier. Vertices are conventionally numbered `1..=vertex_count`.
pub type VertexId = usize;

/// Undirected edge between two vertices.
///
/// Endpoints are kept in the order they were given. Use [`Edge::canonical`]
/// when a direction-free form is needed. Implements `Ord` for deterministic
/// ordering: (u, v).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint.
    pub u: VertexId,
    /// Second endpoint.
    pub v: VertexId,
}

impl Edge {
    /// Create a new edge.
    pub fn new(u: VertexId, v: VertexId) -> Self {
        Self { u, v }
    }

    /// Same edge with endpoints ordered `(min, max)`.
    pub fn canonical(self) -> Self {
        if self.u <= self.v {
            self
        } else {
            Self { u: self.v, v: self.u }
        }
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((u, v): (VertexId, VertexId)) -> Self {
        Self::new(u, v)
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.u.cmp(&other.u).then_with(|| self.v.cmp(&other.v))
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.u, self.v)
    }
}

/// Input graph: a vertex count and an edge list.
///
/// Duplicate edges and self-loops are kept as given. The graph is read-only
/// once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create a graph from a vertex count and edges.
    pub fn new(vertex_count: usize, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        Self {
            vertex_count,
            edges: edges.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Edges in input order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges (duplicates counted).
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Whether `vertex <= vertex_count`.
    ///
    /// Identifier 0 is accepted, matching the `vertex_count + 1` slot
    /// convention of the input format.
    pub fn is_vertex(&self, vertex: VertexId) -> bool {
        vertex <= self.vertex_count
    }

    /// Whether some edge joins `a` and `b`, in either direction.
    pub fn are_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        let wanted = Edge::new(a, b).canonical();
        self.edges.iter().any(|e| e.canonical() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_ordering() {
        let e1 = Edge::new(1, 2);
        let e2 = Edge::new(1, 3);
        let e3 = Edge::new(2, 3);

        assert!(e1 < e2);
        assert!(e1 < e3);
        assert!(e2 < e3);
    }

    #[test]
    fn test_canonical_edge() {
        assert_eq!(Edge::new(5, 2).canonical(), Edge::new(2, 5));
        assert_eq!(Edge::new(2, 5).canonical(), Edge::new(2, 5));
    }

    #[test]
    fn test_graph_keeps_duplicates_and_loops() {
        let graph = Graph::new(3, [(1, 2), (2, 1), (3, 3)]);
        assert_eq!(graph.num_edges(), 3);
        assert!(graph.are_adjacent(2, 1));
        assert!(graph.are_adjacent(3, 3));
        assert!(!graph.are_adjacent(1, 3));
    }

    #[test]
    fn test_vertex_range() {
        let graph = Graph::new(4, Vec::<Edge>::new());
        assert!(graph.is_vertex(0));
        assert!(graph.is_vertex(4));
        assert!(!graph.is_vertex(5));
    }
}
