//! This module defines the `EdgeList` struct, the in-memory edge source.
//!
//! The input is read exactly once: the vertex bound and the edges
//! both come from the same snapshot, even if the file changes later.

use std::io;
use std::path::Path;
use std::slice;

use tracing::debug;

use super::error::{Error, Result};
use super::graph::VertexId;
use super::reader::{Edge, EdgeReader};

/// Converts the largest id seen into a vertex count.
///
/// Inputs without any id above 1 still describe one vertex.
fn vertex_count_for(max_id: Option<VertexId>) -> Result<usize> {
    let bound = max_id.map_or(1, |max| max.max(1));
    usize::try_from(bound).map_err(|_| Error::InvalidVertexCount(bound))
}

/// Scans the whole stream and returns the number of vertices it describes.
///
/// That's the largest integer in the stream, but at least 1.
///
/// # Examples
///
/// ```
/// # use adjlist::determine_vertex_count;
/// assert_eq!(determine_vertex_count(&b"1 2\n3 1\n2 4\n"[..]).unwrap(), 4);
/// assert_eq!(determine_vertex_count(&b""[..]).unwrap(), 1);
/// ```
pub fn determine_vertex_count<B: io::BufRead>(buf: B) -> Result<usize> {
    vertex_count_for(EdgeReader::new(buf).scan_max()?)
}

/// All edges of an input, together with its vertex bound.
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    edges: Vec<Edge>,
    max_id: Option<VertexId>,
}

impl EdgeList {
    /// Reads every edge from a BufRead.
    pub fn read<B: io::BufRead>(buf: B) -> Result<EdgeList> {
        EdgeList::collect(EdgeReader::new(buf))
    }

    /// Reads every edge from a file.
    ///
    /// The file is closed before this function returns, also on error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<EdgeList> {
        EdgeList::collect(EdgeReader::open(path)?)
    }

    fn collect<B: io::BufRead>(mut reader: EdgeReader<B>) -> Result<EdgeList> {
        let edges = (&mut reader).collect::<Result<Vec<_>>>()?;
        debug!(edges = edges.len(), max_id = ?reader.max_id(), skipped = reader.skipped(), "read edge list");
        Ok(EdgeList { edges, max_id: reader.max_id() })
    }

    /// Number of vertices: the largest integer in the input, but at least 1.
    pub fn vertex_count(&self) -> Result<usize> { vertex_count_for(self.max_id) }

    /// Largest integer in the input, also counting a trailing unpaired one.
    pub fn max_id(&self) -> Option<VertexId> { self.max_id }

    pub fn edges(&self) -> &[Edge] { &self.edges }

    pub fn len(&self) -> usize { self.edges.len() }

    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Iterates the edges in input order. Can be called any number of times.
    pub fn iter(&self) -> slice::Iter<'_, Edge> { self.edges.iter() }
}

impl<'a> IntoIterator for &'a EdgeList {
    type Item = &'a Edge;
    type IntoIter = slice::Iter<'a, Edge>;

    fn into_iter(self) -> slice::Iter<'a, Edge> { self.edges.iter() }
}

#[test]
fn test_vertex_count() {
    let list = EdgeList::read(&b"1 2\n3 1\n2 4\n"[..]).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.vertex_count().unwrap(), 4);
}

#[test]
fn test_empty_input_has_one_vertex() {
    let list = EdgeList::read(&b""[..]).unwrap();
    assert!(list.is_empty());
    assert_eq!(list.max_id(), None);
    assert_eq!(list.vertex_count().unwrap(), 1);

    let list = EdgeList::read(&b"0 -4\n"[..]).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.vertex_count().unwrap(), 1);
}

#[test]
fn test_trailing_vertex_widens_bound() {
    let list = EdgeList::read(&b"1 2\n7"[..]).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.vertex_count().unwrap(), 7);
}

#[test]
fn test_iter_is_restartable() {
    let list = EdgeList::read(&b"1 2 2 3"[..]).unwrap();
    let first: Vec<_> = list.iter().map(|e| e.source).collect();
    let second: Vec<_> = (&list).into_iter().map(|e| e.source).collect();
    assert_eq!(first, [1, 2]);
    assert_eq!(first, second);
}

#[test]
fn test_read_error_is_reported() {
    struct Failing;

    impl io::Read for Failing {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    match EdgeList::read(io::BufReader::new(Failing)) {
        Err(Error::Read(e)) => assert_eq!(e.to_string(), "disk on fire"),
        other => panic!("unexpected result: {:?}", other),
    }
}
