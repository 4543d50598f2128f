//! Crate for building sorted adjacency lists of undirected graphs.
//!
//! The input is a text of whitespace-separated integer pairs, each pair
//! being an edge. Vertices are numbered from 1 up to the largest id
//! found in the input. The result is one line per vertex listing its
//! neighbors in ascending order.
//!
//! The crate is split into:
//!
//! * [`EdgeReader`](reader/struct.EdgeReader.html), which streams edges out of a `BufRead`,
//! * [`EdgeList`](source/struct.EdgeList.html), which keeps all edges of an input in memory,
//! * [`AdjacencyGraph`](graph/struct.AdjacencyGraph.html), which keeps every neighbor list
//!   sorted while edges are inserted,
//! * the [`report`](report/index.html) module, which renders the lists.
//!
//! # Examples
//!
//! Basics
//!
//! ```
//! # use adjlist::render_str;
//! let lines = render_str("1 2\n3 1\n2 4\n").unwrap();
//! assert_eq!(lines, ["1: 2 3 ", "2: 1 4 ", "3: 1 ", "4: 2 "]);
//! ```
//!
//! Building a graph from a file.
//!
//! ```no_run
//! # use adjlist::{AdjacencyGraph, EdgeList};
//! let edges = EdgeList::open("edges.txt").unwrap();
//! let graph = AdjacencyGraph::from_edges(&edges).unwrap();
//! for (vertex, neighbors) in &graph {
//!     println!("{} has {} neighbors", vertex, neighbors.count());
//! }
//! ```

pub mod config;
pub use self::config::Config;

pub mod error;
pub use self::error::{Error, Result};

pub mod graph;
pub use self::graph::{AdjacencyGraph, Neighbors, VertexId};

pub mod reader;
pub use self::reader::{Edge, EdgeReader, Location};

pub mod report;

pub mod source;
pub use self::source::{determine_vertex_count, EdgeList};

pub mod stream;

/// Builds the graph described by `input` and renders its report lines.
///
/// Malformed words are skipped, vertex ids out of range are an error.
///
/// # Examples
///
/// ```
/// # use adjlist::render_str;
/// assert_eq!(render_str("").unwrap(), ["1: "]);
/// assert!(render_str("1 0").is_err());
/// ```
pub fn render_str(input: &str) -> Result<Vec<String>> {
    let edges = EdgeList::read(input.as_bytes())?;
    let graph = AdjacencyGraph::from_edges(&edges)?;
    Ok(report::render(&graph))
}
