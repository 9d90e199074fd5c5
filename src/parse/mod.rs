//! Input file formats.
//!
//! Three line-oriented text formats feed the validator:
//!
//! ```text
//! graph.col           start_target.dat     answer.dat
//! c comment           s 1 3                a YES
//! p 4 2               t 1 4                a 1 3
//! e 1 2                                    a 1 4
//! e 2 3
//! ```
//!
//! The first whitespace-separated token of a line selects its meaning. Each
//! parser works on `&str`; the `load_*` functions add file reading and attach
//! the path to errors.

pub mod dimacs;
pub mod endpoints;
pub mod answer;

use std::path::{Path, PathBuf};

use crate::types::{Certificate, Endpoints, Graph, State, VertexId};

pub use dimacs::parse_graph;
pub use endpoints::parse_endpoints;
pub use answer::parse_certificate;

/// Syntax error in an input file. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Line starts with a token the format does not know.
    #[error("illegal input format in line {line}")]
    IllegalLine {
        /// Line number.
        line: usize,
    },

    /// Token that should be a non-negative integer is not one.
    #[error("invalid integer {token:?} in line {line}")]
    InvalidInteger {
        /// Line number.
        line: usize,
        /// Offending token.
        token: String,
    },

    /// Line ends before a required field.
    #[error("missing {field} in line {line}")]
    MissingField {
        /// Line number.
        line: usize,
        /// Name of the missing field.
        field: &'static str,
    },

    /// Graph file has no `p` line.
    #[error("graph has no problem line (p <vertices> <edges>)")]
    MissingProblemLine,

    /// Edge endpoint exceeds the declared vertex count.
    #[error("vertex {vertex} in line {line} exceeds vertex count {vertex_count}")]
    VertexOutOfRange {
        /// Line number.
        line: usize,
        /// Offending vertex.
        vertex: VertexId,
        /// Declared vertex count.
        vertex_count: usize,
    },

    /// Start/target file lacks an `s` or `t` line.
    #[error("missing '{0}' line")]
    MissingStateLine(char),
}

/// Failure to turn a file into parsed input.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File could not be read.
    #[error("File {} cannot be opened: {source}", .path.display())]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// File contents are malformed.
    #[error("{}: {source}", .path.display())]
    Parse {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: ParseError,
    },
}

fn load<T>(path: &Path, parse: fn(&str) -> Result<T, ParseError>) -> Result<T, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a graph file.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    load(path.as_ref(), parse_graph)
}

/// Read and parse a start/target file.
pub fn load_endpoints(path: impl AsRef<Path>) -> Result<Endpoints, LoadError> {
    load(path.as_ref(), parse_endpoints)
}

/// Read and parse an answer file.
pub fn load_certificate(path: impl AsRef<Path>) -> Result<Certificate, LoadError> {
    load(path.as_ref(), parse_certificate)
}

/// Non-blank lines with their 1-based numbers, split into tokens.
fn token_lines(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.split_whitespace().collect::<Vec<_>>()))
        .filter(|(_, tokens)| !tokens.is_empty())
}

fn parse_int(line: usize, token: &str) -> Result<usize, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidInteger {
        line,
        token: token.to_string(),
    })
}

/// Parse every token as a vertex.
fn parse_state(line: usize, tokens: &[&str]) -> Result<State, ParseError> {
    tokens.iter().map(|t| parse_int(line, t)).collect()
}
