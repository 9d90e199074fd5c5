//! DIMACS-style graph files.
//!
//! - `c ...` comment, ignored
//! - `p <n> <m>` vertex and edge counts (a format word such as `edge` may
//!   precede `<n>`)
//! - `e <u> <v>` undirected edge
//!
//! The declared edge count is advisory: a mismatch is logged, not rejected.

use tracing::warn;

use super::{parse_int, token_lines, ParseError};
use crate::types::{Edge, Graph};

/// Parse a graph file.
pub fn parse_graph(text: &str) -> Result<Graph, ParseError> {
    let mut header: Option<(usize, Option<usize>)> = None;
    let mut raw_edges: Vec<(usize, Edge)> = Vec::new();

    for (line, tokens) in token_lines(text) {
        match tokens[0] {
            "c" => {}
            "p" => header = Some(parse_problem_line(line, &tokens[1..])?),
            "e" => {
                let u = tokens.get(1).ok_or(ParseError::MissingField { line, field: "edge endpoint" })?;
                let v = tokens.get(2).ok_or(ParseError::MissingField { line, field: "edge endpoint" })?;
                raw_edges.push((line, Edge::new(parse_int(line, u)?, parse_int(line, v)?)));
            }
            _ => return Err(ParseError::IllegalLine { line }),
        }
    }

    let (vertex_count, declared_edges) = header.ok_or(ParseError::MissingProblemLine)?;

    // Edges may appear before the p line, so range checks wait until here.
    for (line, edge) in &raw_edges {
        for vertex in [edge.u, edge.v] {
            if vertex > vertex_count {
                return Err(ParseError::VertexOutOfRange {
                    line: *line,
                    vertex,
                    vertex_count,
                });
            }
        }
    }

    if let Some(declared) = declared_edges.filter(|&m| m != raw_edges.len()) {
        warn!(declared, found = raw_edges.len(), "edge count differs from problem line");
    }

    Ok(Graph::new(vertex_count, raw_edges.into_iter().map(|(_, e)| e)))
}

fn parse_problem_line(line: usize, fields: &[&str]) -> Result<(usize, Option<usize>), ParseError> {
    let numeric = match fields.first() {
        Some(word) if word.parse::<usize>().is_err() && word.chars().all(char::is_alphabetic) => &fields[1..],
        _ => fields,
    };

    let n = numeric
        .first()
        .ok_or(ParseError::MissingField { line, field: "vertex count" })?;
    let vertex_count = parse_int(line, n)?;
    let edge_count = numeric.get(1).map(|m| parse_int(line, m)).transpose()?;

    Ok((vertex_count, edge_count))
}
