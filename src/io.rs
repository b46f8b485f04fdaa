//! Edge-list ingestion.
//!
//! Text format: line 1 is the vertex count V, line 2 the edge count E,
//! followed by E lines of `from to weight` with 0-based endpoints and a
//! strictly positive decimal weight. Everything malformed is rejected here,
//! before any algorithm runs; the engine itself never re-validates input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::graph::{CompactGraph, Edge};
use crate::{Error, Result};

/// Reads an edge-list file into a graph (adjacency not yet built).
pub fn read_edgelist<P: AsRef<Path>>(path: P) -> Result<CompactGraph<f64>> {
    let file = File::open(path)?;
    parse_edgelist(BufReader::new(file))
}

/// Parses the edge-list format from any buffered reader.
pub fn parse_edgelist<R: BufRead>(reader: R) -> Result<CompactGraph<f64>> {
    let mut lines = NumberedLines::new(reader);

    let (line, text) = lines.next_content()?;
    let vertex_count: usize = parse_field(&text, line, "vertex count")?;
    let (line, text) = lines.next_content()?;
    let edge_count: usize = parse_field(&text, line, "edge count")?;

    let mut edges = Vec::new();
    edges.try_reserve_exact(edge_count)?;
    while edges.len() < edge_count {
        let (line, text) = lines.next_content().map_err(|err| match err {
            Error::MalformedInput { line, .. } => Error::MalformedInput {
                line,
                reason: format!("expected {edge_count} edges, found {}", edges.len()),
            },
            other => other,
        })?;
        edges.push(parse_edge(&text, line, vertex_count)?);
    }

    debug!("read edge list: {vertex_count} vertices, {edge_count} edges");
    CompactGraph::from_edges(vertex_count, edges)
}

fn parse_edge(text: &str, line: usize, vertex_count: usize) -> Result<Edge<f64>> {
    let mut fields = text.split_whitespace();
    let from: usize = parse_field(fields.next().unwrap_or(""), line, "source vertex")?;
    let to: usize = parse_field(fields.next().unwrap_or(""), line, "target vertex")?;
    let weight: f64 = parse_field(fields.next().unwrap_or(""), line, "weight")?;
    if fields.next().is_some() {
        return Err(malformed(line, "trailing fields after the weight"));
    }
    if from >= vertex_count || to >= vertex_count {
        return Err(malformed(
            line,
            format!("vertex id outside 0..{vertex_count}"),
        ));
    }
    if !(weight > 0.0) || !weight.is_finite() {
        return Err(malformed(line, format!("non-positive weight {weight}")));
    }
    Ok(Edge::new(from, to, weight))
}

fn parse_field<T: std::str::FromStr>(text: &str, line: usize, what: &str) -> Result<T> {
    let text = text.trim();
    if text.is_empty() {
        return Err(malformed(line, format!("missing {what}")));
    }
    text.parse()
        .map_err(|_| malformed(line, format!("invalid {what} {text:?}")))
}

fn malformed(line: usize, reason: impl Into<String>) -> Error {
    Error::MalformedInput {
        line,
        reason: reason.into(),
    }
}

/// Line iterator that skips blanks and tracks 1-based line numbers for
/// error reporting.
struct NumberedLines<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        NumberedLines { reader, line: 0 }
    }

    fn next_content(&mut self) -> Result<(usize, String)> {
        let mut text = String::new();
        loop {
            text.clear();
            let read = self.reader.read_line(&mut text)?;
            if read == 0 {
                return Err(malformed(self.line + 1, "unexpected end of input"));
            }
            self.line += 1;
            if !text.trim().is_empty() {
                return Ok((self.line, text.trim().to_string()));
            }
        }
    }
}
