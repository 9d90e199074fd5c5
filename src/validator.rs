//! Reconfiguration certificate validation.
//!
//! ## Check Order
//!
//! A YES certificate is checked in a fixed order, and the first failure is
//! the verdict:
//!
//! | # | Check | Failure |
//! |---|-------|---------|
//! | 1 | Answer claims a sequence at all | (NO is accepted as-is) |
//! | 2 | First state equals start | `StartMismatch` |
//! | 3 | Last state equals target | `TargetMismatch` |
//! | 4 | Every state is independent, ascending | `NotIndependentSet` |
//! | 5 | Every transition removes exactly one vertex | `InvalidMove` |
//!
//! An empty YES sequence fails with `EmptySequence` before check 2. With
//! `check_vertex_range` enabled, each state in check 4 is range-checked right
//! before its independence test.
//!
//! A NO answer is trusted: nothing here searches for a sequence.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::independent::find_conflict;
use crate::report::{ReportCode, Step};
use crate::types::{Certificate, Endpoints, Graph, State, VertexId};

/// Result of validating one certificate.
pub type Outcome = Result<Verdict, ValidationError>;

/// Reason a certificate was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// First state differs from the declared start.
    #[error("The initial state must be equal to the start state")]
    StartMismatch,

    /// Last state differs from the declared target.
    #[error("The last state must be equal to the target state")]
    TargetMismatch,

    /// A state contains two adjacent vertices.
    #[error("The {step} state is not an independent set")]
    NotIndependentSet {
        /// Offending state.
        step: Step,
    },

    /// The transition from `step` to the next state is not a single token move.
    #[error(
        "Each independent set in the sequence results from the previous one \
         by moving exactly one token to another node (violated after the {step} state)"
    )]
    InvalidMove {
        /// State the bad transition starts from.
        step: Step,
    },

    /// A YES answer with no states.
    #[error("The reconfiguration sequence must contain at least one state")]
    EmptySequence,

    /// A state names a vertex the graph does not have.
    #[error("The {step} state contains vertex {vertex}, which is not in the graph")]
    VertexOutOfRange {
        /// Offending state.
        step: Step,
        /// Offending vertex.
        vertex: VertexId,
    },
}

impl ValidationError {
    /// Report code for this failure.
    pub fn code(&self) -> ReportCode {
        match self {
            Self::StartMismatch => ReportCode::Code10,
            Self::TargetMismatch => ReportCode::Code11,
            Self::NotIndependentSet { .. } => ReportCode::Code12,
            Self::InvalidMove { .. } => ReportCode::Code13,
            Self::EmptySequence => ReportCode::Code14,
            Self::VertexOutOfRange { .. } => ReportCode::Code15,
        }
    }

    /// Step the failure points at, if it points at one.
    pub fn step(&self) -> Option<Step> {
        match self {
            Self::NotIndependentSet { step }
            | Self::InvalidMove { step }
            | Self::VertexOutOfRange { step, .. } => Some(*step),
            Self::StartMismatch | Self::TargetMismatch | Self::EmptySequence => None,
        }
    }
}

/// Non-fatal observation on an accepted certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Warning {
    /// The same state occurs twice in the sequence.
    RepeatedState {
        /// Earlier occurrence.
        first: Step,
        /// Later occurrence.
        repeat: Step,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RepeatedState { first, repeat } => write!(
                f,
                "The same state appears multiple times (the {} and {} states)",
                first, repeat
            ),
        }
    }
}

/// Accepted certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The answer claims no sequence exists. Accepted without verification.
    NoSequenceClaimed,
    /// The claimed sequence passed every check.
    Reachable {
        /// Number of states in the sequence.
        steps: usize,
        /// Observations that do not invalidate the sequence.
        warnings: Vec<Warning>,
    },
}

impl Verdict {
    /// Report code for this verdict.
    pub fn code(&self) -> ReportCode {
        match self {
            Self::NoSequenceClaimed => ReportCode::Code00,
            Self::Reachable { warnings, .. } if warnings.is_empty() => ReportCode::Code01,
            Self::Reachable { .. } => ReportCode::Code02,
        }
    }

    /// One-line description of the verdict, as printed next to its code.
    pub fn summary(&self) -> &'static str {
        match self.code() {
            ReportCode::Code00 => {
                "(Answer: NO) Validation success (Note: this validator cannot ensure \
                 that a reconfiguration sequence does not exist for the input)"
            }
            ReportCode::Code01 => "(Answer: YES) Validation success without any warning",
            _ => "(Answer: YES) Validation success, but there is some warning",
        }
    }

    /// Warnings attached to the verdict.
    pub fn warnings(&self) -> &[Warning] {
        match self {
            Self::NoSequenceClaimed => &[],
            Self::Reachable { warnings, .. } => warnings,
        }
    }
}

/// Knobs on top of the reference checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Reject states naming vertices above `vertex_count`.
    pub check_vertex_range: bool,

    /// Also require each transition to add exactly one vertex.
    ///
    /// Off by default: only the removed side is counted, so a transition
    /// between states of different sizes can pass.
    pub symmetric_moves: bool,

    /// Attach a warning when a state occurs more than once.
    pub warn_on_repeated_states: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            check_vertex_range: true,
            symmetric_moves: false,
            warn_on_repeated_states: true,
        }
    }
}

impl ValidationPolicy {
    /// The bare ordered checks, with no vertex range check.
    ///
    /// Out-of-range vertices then never complete an edge and pass silently.
    /// `default()` differs only by rejecting them with `VertexOutOfRange`.
    pub fn reference() -> Self {
        Self {
            check_vertex_range: false,
            ..Self::default()
        }
    }

    /// `default()` plus the symmetric move rule.
    pub fn strict() -> Self {
        Self {
            symmetric_moves: true,
            ..Self::default()
        }
    }
}

/// Checks certificates against one graph and one start/target pair.
#[derive(Debug, Clone)]
pub struct ReconfigurationValidator<'a> {
    graph: &'a Graph,
    start: &'a State,
    target: &'a State,
    policy: ValidationPolicy,
}

impl<'a> ReconfigurationValidator<'a> {
    /// Create a validator with the default policy.
    pub fn new(graph: &'a Graph, endpoints: &'a Endpoints) -> Self {
        Self::from_parts(graph, &endpoints.start, &endpoints.target)
    }

    /// Create a validator from separately held start and target states.
    pub fn from_parts(graph: &'a Graph, start: &'a State, target: &'a State) -> Self {
        Self {
            graph,
            start,
            target,
            policy: ValidationPolicy::default(),
        }
    }

    /// Replace the policy.
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate a certificate.
    pub fn validate(&self, certificate: &Certificate) -> Outcome {
        self.validate_sequence(certificate.sequence_exists, &certificate.answers)
    }

    /// Validate an existence flag and sequence without wrapping them in a
    /// [`Certificate`].
    pub fn validate_sequence(&self, sequence_exists: bool, answers: &[State]) -> Outcome {
        let outcome = self.run_checks(sequence_exists, answers);
        match &outcome {
            Ok(verdict) => info!(code = %verdict.code(), steps = answers.len(), "certificate accepted"),
            Err(e) => info!(code = %e.code(), error = %e, "certificate rejected"),
        }
        outcome
    }

    fn run_checks(&self, sequence_exists: bool, answers: &[State]) -> Outcome {
        if !sequence_exists {
            debug!("answer claims no sequence exists; accepting without search");
            return Ok(Verdict::NoSequenceClaimed);
        }

        let (first, last) = match (answers.first(), answers.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(ValidationError::EmptySequence),
        };

        if first != self.start {
            debug!(expected = %self.start, found = %first, "start mismatch");
            return Err(ValidationError::StartMismatch);
        }
        if last != self.target {
            debug!(expected = %self.target, found = %last, "target mismatch");
            return Err(ValidationError::TargetMismatch);
        }

        self.check_states(answers)?;
        self.check_moves(answers)?;

        let warnings = if self.policy.warn_on_repeated_states {
            find_repeated_state(answers).into_iter().collect()
        } else {
            Vec::new()
        };
        for w in &warnings {
            warn!(warning = %w, "certificate accepted with warning");
        }

        Ok(Verdict::Reachable {
            steps: answers.len(),
            warnings,
        })
    }

    fn check_states(&self, answers: &[State]) -> Result<(), ValidationError> {
        for (i, state) in answers.iter().enumerate() {
            let step = Step::from_index(i);

            if self.policy.check_vertex_range {
                // States are sorted, so the largest vertex is the only candidate.
                if let Some(vertex) = state.max_vertex().filter(|v| !self.graph.is_vertex(*v)) {
                    debug!(step = step.get(), vertex, "vertex out of range");
                    return Err(ValidationError::VertexOutOfRange { step, vertex });
                }
            }

            if let Some(edge) = find_conflict(self.graph, state) {
                debug!(step = step.get(), edge = %edge, "state is not independent");
                return Err(ValidationError::NotIndependentSet { step });
            }
        }
        Ok(())
    }

    fn check_moves(&self, answers: &[State]) -> Result<(), ValidationError> {
        for (i, pair) in answers.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            let removed = prev.removed(next).count();
            let added = prev.added(next).count();

            let ok = removed == 1 && (!self.policy.symmetric_moves || added == 1);
            if !ok {
                let step = Step::from_index(i);
                debug!(step = step.get(), removed, added, "invalid token move");
                return Err(ValidationError::InvalidMove { step });
            }
        }
        Ok(())
    }
}

/// First state (in sequence order) that repeats an earlier one.
fn find_repeated_state(answers: &[State]) -> Option<Warning> {
    let mut seen: HashMap<&State, usize> = HashMap::with_capacity(answers.len());
    for (i, state) in answers.iter().enumerate() {
        if let Some(&first) = seen.get(state) {
            return Some(Warning::RepeatedState {
                first: Step::from_index(first),
                repeat: Step::from_index(i),
            });
        }
        seen.insert(state, i);
    }
    None
}

/// Validate with the default policy.
///
/// `answers` is ignored when `sequence_exists` is false.
pub fn validate(
    graph: &Graph,
    start: &State,
    target: &State,
    sequence_exists: bool,
    answers: &[State],
) -> Outcome {
    ReconfigurationValidator::from_parts(graph, start, target)
        .validate_sequence(sequence_exists, answers)
}
