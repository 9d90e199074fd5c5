//! Independent-set predicate.
//!
//! A state is independent when no edge of the graph has both endpoints
//! holding a token. The check scans the edge list once and looks both
//! endpoints up in the state's own set, stopping at the first edge whose
//! endpoints are both present. No buffer is sized from `vertex_count`, so a
//! huge declared vertex count costs nothing.
//!
//! Identifiers beyond `vertex_count` are not rejected here. They never count
//! as present, so they never complete an edge; range errors are the
//! validator's job (see `ValidationPolicy::check_vertex_range`).

use crate::types::{Edge, Graph, State};

/// First edge of `graph` (in edge-list order) with both endpoints in `state`.
pub fn find_conflict(graph: &Graph, state: &State) -> Option<Edge> {
    let marked = |v: usize| graph.is_vertex(v) && state.contains(v);

    graph
        .edges()
        .iter()
        .find(|e| marked(e.u) && marked(e.v))
        .copied()
}

/// Whether `state` is an independent set of `graph`.
///
/// O(|edges| * log |state|) time, no extra space. Does not depend on the order of
/// the edge list or of the state's vertices.
pub fn is_independent_set(graph: &Graph, state: &State) -> bool {
    find_conflict(graph, state).is_none()
}
