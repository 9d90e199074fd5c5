//! Human-facing step numbering and report codes.

use serde::{Deserialize, Serialize};

/// English ordinal for `n`: `1st`, `2nd`, `3rd`, `4th`, `11th`, `22nd`, ...
pub fn ordinal(n: usize) -> String {
    let suffix = if (11..=13).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", n, suffix)
}

/// 1-indexed position in a reconfiguration sequence.
///
/// Displays as an ordinal, so error messages read "the 3rd state". Never 0,
/// including when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Step(usize);

impl Step {
    /// Step for a 0-based sequence index.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// 1-based step number.
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for Step {
    type Error = String;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Err("step numbers start at 1".to_string()),
            n => Ok(Self(n)),
        }
    }
}

impl From<Step> for usize {
    fn from(step: Step) -> usize {
        step.0
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&ordinal(self.0))
    }
}

/// Stable code attached to every verdict and failure.
///
/// `Code0x` are successes, `Code1x` are failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportCode {
    /// NO answer accepted without verification.
    Code00,
    /// YES answer verified without warnings.
    Code01,
    /// YES answer verified with warnings.
    Code02,
    /// First state differs from start.
    Code10,
    /// Last state differs from target.
    Code11,
    /// A state is not independent.
    Code12,
    /// A transition is not a single token move.
    Code13,
    /// YES answer with no states.
    Code14,
    /// A state names a vertex outside the graph.
    Code15,
}

impl std::fmt::Display for ReportCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (10, "10th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (102, "102nd"),
            (111, "111th"),
            (113, "113th"),
        ];
        for (n, expected) in cases {
            assert_eq!(ordinal(n), expected, "ordinal({})", n);
        }
    }

    #[test]
    fn test_step_display() {
        let step = Step::from_index(2);
        assert_eq!(step.get(), 3);
        assert_eq!(step.to_string(), "3rd");
    }

    #[test]
    fn test_step_rejects_zero() {
        assert!(Step::try_from(0).is_err());
        assert_eq!(Step::try_from(2), Ok(Step::from_index(1)));

        assert!(serde_json::from_str::<Step>("0").is_err());
        let step: Step = serde_json::from_str("4").unwrap();
        assert_eq!(step.to_string(), "4th");
        assert_eq!(serde_json::to_string(&step).unwrap(), "4");
    }

    #[test]
    fn test_codes() {
        assert_eq!(ReportCode::Code12.to_string(), "Code12");
    }
}
