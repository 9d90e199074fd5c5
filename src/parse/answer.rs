//! Answer files.
//!
//! ```text
//! a YES        a NO
//! a 1 3
//! a 1 4
//! ```
//!
//! `a NO` ends the file as far as the checker cares. Without one, the answer
//! is a YES and every other `a` line is a state. Lines not starting with `a`
//! are ignored.

use super::{parse_state, token_lines, ParseError};
use crate::types::Certificate;

/// Parse an answer file.
pub fn parse_certificate(text: &str) -> Result<Certificate, ParseError> {
    let mut answers = Vec::new();

    for (line, tokens) in token_lines(text) {
        if tokens[0] != "a" {
            continue;
        }
        match tokens.get(1).copied() {
            Some("YES") => {}
            Some("NO") => {
                return Ok(Certificate {
                    sequence_exists: false,
                    answers,
                })
            }
            _ => answers.push(parse_state(line, &tokens[1..])?),
        }
    }

    Ok(Certificate {
        sequence_exists: true,
        answers,
    })
}
