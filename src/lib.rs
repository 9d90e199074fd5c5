//! # isr-checker
//!
//! Certificate checking for Independent Set Reconfiguration.
//!
//! The checker answers one question:
//!
//! > Does this claimed sequence of independent sets really lead from the
//! > start set to the target set, one token move at a time?
//!
//! ## Core Contract
//!
//! 1. Given a graph, a start/target pair, and a solver's answer, run the
//!    endpoint, independence, and single-move checks in a fixed order
//! 2. Report the **first** violation with its 1-indexed step, or success
//! 3. Never search: a NO answer is accepted as claimed
//!
//! ## Architecture
//!
//! ```text
//! graph.col ─┐
//! st.dat ────┼→ parse → (Graph, Endpoints, Certificate) → ReconfigurationValidator → Outcome
//! answer.dat ┘                                                   ↓
//!                                                      independent::find_conflict
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same inputs → same outcome
//! - States are canonical sets: vertex order in the input never matters
//! - Among several violations, the earliest check and lowest step wins

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod independent;
pub mod validator;
pub mod report;
pub mod parse;
pub mod canonical;

// Re-exports
pub use types::{VertexId, Edge, Graph, State, Endpoints, Certificate};
pub use independent::{is_independent_set, find_conflict};
pub use validator::{
    validate, ReconfigurationValidator, ValidationPolicy,
    Outcome, Verdict, Warning, ValidationError,
};
pub use report::{ordinal, ReportCode, Step};
pub use parse::{
    parse_graph, parse_endpoints, parse_certificate,
    load_graph, load_endpoints, load_certificate,
    ParseError, LoadError,
};
pub use canonical::{to_canonical_bytes, canonical_hash, canonical_hash_hex, instance_fingerprint};

/// Line printed when a certificate is accepted.
pub const SUCCESS_MESSAGE: &str = "Validation success";
