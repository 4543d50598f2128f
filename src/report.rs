//! Rendering of adjacency lists as text.
//!
//! Each vertex gets one line: its id, a colon, and every neighbor followed
//! by a space, eg. `1: 2 3 `. An isolated vertex renders as `4: `.

use std::io;

use super::graph::{AdjacencyGraph, Iter, Neighbors, VertexId};

fn render_line(vertex: VertexId, neighbors: Neighbors<'_>) -> String {
    let mut line = format!("{}: ", vertex);
    for neighbor in neighbors {
        line.push_str(&neighbor.to_string());
        line.push(' ');
    }
    line
}

/// Lazily rendered lines of a graph, returned by [`lines`](fn.lines.html).
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    vertices: Iter<'a>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.vertices.next().map(|(vertex, neighbors)| render_line(vertex, neighbors))
    }
}

/// Lines of the report, one per vertex in ascending order.
pub fn lines(graph: &AdjacencyGraph) -> Lines<'_> { Lines { vertices: graph.iter() } }

/// Renders the whole report.
///
/// # Examples
///
/// ```
/// # use adjlist::{AdjacencyGraph, report};
/// let mut graph = AdjacencyGraph::new(3).unwrap();
/// graph.insert_undirected(1, 3).unwrap();
/// assert_eq!(report::render(&graph), ["1: 3 ", "2: ", "3: 1 "]);
/// ```
pub fn render(graph: &AdjacencyGraph) -> Vec<String> { lines(graph).collect() }

/// Writes the report to `sink`, each line terminated by `\n`, and flushes it.
pub fn write_report<W: io::Write>(graph: &AdjacencyGraph, mut sink: W) -> io::Result<()> {
    for line in lines(graph) {
        writeln!(sink, "{}", line)?;
    }
    sink.flush()
}

#[test]
fn test_render_example() {
    let mut graph = AdjacencyGraph::new(4).unwrap();
    for &(u, v) in &[(1, 2), (3, 1), (2, 4)] {
        graph.insert_undirected(u, v).unwrap();
    }
    assert_eq!(render(&graph), ["1: 2 3 ", "2: 1 4 ", "3: 1 ", "4: 2 "]);
}

#[test]
fn test_render_single_vertex() {
    let graph = AdjacencyGraph::new(1).unwrap();
    assert_eq!(render(&graph), ["1: "]);
}

#[test]
fn test_render_does_not_consume() {
    let mut graph = AdjacencyGraph::new(2).unwrap();
    graph.insert_undirected(2, 1).unwrap();
    assert_eq!(render(&graph), render(&graph));
    assert_eq!(lines(&graph).count(), 2);
}

#[test]
fn test_write_report() {
    let mut graph = AdjacencyGraph::new(3).unwrap();
    graph.insert_undirected(3, 3).unwrap();
    let mut out = Vec::new();
    write_report(&graph, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1: \n2: \n3: 3 3 \n");
}
