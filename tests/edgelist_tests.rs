use std::io::Cursor;

use graph_efficiency::io::parse_edgelist;
use graph_efficiency::{Error, Graph};

fn parse(text: &str) -> graph_efficiency::Result<graph_efficiency::CompactGraph<f64>> {
    parse_edgelist(Cursor::new(text))
}

#[test]
fn test_parses_well_formed_input() {
    let graph = parse("4\n4\n0 1 1.0\n1 2 1.0\n2 3 1.0\n0 3 10.0\n").unwrap();
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.edge_slice()[3].weight, 10.0);
    // Ingestion leaves the adjacency form for the caller.
    assert!(!graph.adjacency_ready());
}

#[test]
fn test_tolerates_blank_lines_and_padding() {
    let graph = parse("2\n\n1\n  0   1   2.5  \n").unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_slice()[0].weight, 2.5);
}

#[test]
fn test_rejects_truncated_edge_section() {
    let err = parse("3\n2\n0 1 1.0\n").unwrap_err();
    assert!(matches!(err, Error::MalformedInput { .. }));
}

#[test]
fn test_rejects_garbage_fields() {
    assert!(matches!(
        parse("x\n1\n0 0 1.0\n"),
        Err(Error::MalformedInput { line: 1, .. })
    ));
    assert!(matches!(
        parse("2\n1\n0 one 1.0\n"),
        Err(Error::MalformedInput { line: 3, .. })
    ));
    assert!(matches!(
        parse("2\n1\n0 1 1.0 extra\n"),
        Err(Error::MalformedInput { line: 3, .. })
    ));
}

#[test]
fn test_rejects_out_of_range_vertices() {
    assert!(matches!(
        parse("2\n1\n0 2 1.0\n"),
        Err(Error::MalformedInput { line: 3, .. })
    ));
}

#[test]
fn test_rejects_non_positive_weights() {
    assert!(matches!(
        parse("2\n1\n0 1 0.0\n"),
        Err(Error::MalformedInput { line: 3, .. })
    ));
    assert!(matches!(
        parse("2\n1\n0 1 -2.0\n"),
        Err(Error::MalformedInput { line: 3, .. })
    ));
    assert!(matches!(
        parse("2\n1\n0 1 inf\n"),
        Err(Error::MalformedInput { line: 3, .. })
    ));
}

#[test]
fn test_rejects_empty_input() {
    assert!(matches!(parse(""), Err(Error::MalformedInput { .. })));
}
