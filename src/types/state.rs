//! Token placements.
//!
//! A [`State`] is one independent set of the reconfiguration sequence. It is
//! stored as a canonical set: input order and duplicates do not survive
//! construction, so equality and differences never depend on how a solver
//! happened to print its vertices.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::graph::VertexId;

/// Canonical set of vertices holding a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct State {
    vertices: BTreeSet<VertexId>,
}

impl State {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the state holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `vertex` holds a token.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Vertices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    /// Vertices present here but absent from `next`.
    pub fn removed<'a>(&'a self, next: &'a State) -> impl Iterator<Item = VertexId> + 'a {
        self.vertices.difference(&next.vertices).copied()
    }

    /// Vertices present in `next` but absent here.
    pub fn added<'a>(&'a self, next: &'a State) -> impl Iterator<Item = VertexId> + 'a {
        next.vertices.difference(&self.vertices).copied()
    }

    /// Largest vertex identifier, if any.
    pub fn max_vertex(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }
}

impl FromIterator<VertexId> for State {
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[VertexId; N]> for State {
    fn from(vertices: [VertexId; N]) -> Self {
        vertices.into_iter().collect()
    }
}

impl From<Vec<VertexId>> for State {
    fn from(vertices: Vec<VertexId>) -> Self {
        vertices.into_iter().collect()
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for v in &self.vertices {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", v)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_and_duplicates_collapse() {
        let a = State::from(vec![3, 1, 3, 2]);
        let b = State::from([1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert_eq!(a.to_string(), "1 2 3");
    }

    #[test]
    fn test_removed_and_added() {
        let prev = State::from([1, 3]);
        let next = State::from([1, 4]);

        assert_eq!(prev.removed(&next).collect::<Vec<_>>(), vec![3]);
        assert_eq!(prev.added(&next).collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_empty_state() {
        let s = State::new();
        assert!(s.is_empty());
        assert_eq!(s.max_vertex(), None);
        assert_eq!(s.to_string(), "");
    }
}
