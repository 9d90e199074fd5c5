//! Core types for the checker.

pub mod graph;
pub mod state;
pub mod certificate;

pub use graph::{VertexId, Edge, Graph};
pub use state::State;
pub use certificate::{Endpoints, Certificate};
