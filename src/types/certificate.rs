//! Start/target pair and the claimed answer.

use serde::{Deserialize, Serialize};

use super::state::State;

/// Declared start and target independent sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Start state.
    pub start: State,
    /// Target state.
    pub target: State,
}

impl Endpoints {
    /// Create a start/target pair.
    pub fn new(start: impl Into<State>, target: impl Into<State>) -> Self {
        Self {
            start: start.into(),
            target: target.into(),
        }
    }
}

/// A solver's answer.
///
/// `answers` is only meaningful when `sequence_exists` is true; a NO answer
/// carries whatever states were read before the NO line, and they are never
/// inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Whether the answer claims a reconfiguration sequence exists.
    pub sequence_exists: bool,
    /// Claimed reconfiguration sequence, start first.
    pub answers: Vec<State>,
}

impl Certificate {
    /// A YES answer with the given sequence.
    pub fn yes(answers: impl IntoIterator<Item = impl Into<State>>) -> Self {
        Self {
            sequence_exists: true,
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// A NO answer.
    pub fn no() -> Self {
        Self {
            sequence_exists: false,
            answers: Vec::new(),
        }
    }

    /// Number of states in the claimed sequence.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether the claimed sequence has no states.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
