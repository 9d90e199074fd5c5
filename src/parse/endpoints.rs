//! Start/target files: one `s v...` line and one `t v...` line.
//!
//! Other lines are ignored. A repeated `s` or `t` line replaces the earlier one.

use super::{parse_state, token_lines, ParseError};
use crate::types::Endpoints;

/// Parse a start/target file.
pub fn parse_endpoints(text: &str) -> Result<Endpoints, ParseError> {
    let mut start = None;
    let mut target = None;

    for (line, tokens) in token_lines(text) {
        match tokens[0] {
            "s" => start = Some(parse_state(line, &tokens[1..])?),
            "t" => target = Some(parse_state(line, &tokens[1..])?),
            _ => {}
        }
    }

    Ok(Endpoints {
        start: start.ok_or(ParseError::MissingStateLine('s'))?,
        target: target.ok_or(ParseError::MissingStateLine('t'))?,
    })
}
