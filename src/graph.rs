//! This module defines the `AdjacencyGraph` struct.
//!
//! Every vertex owns a singly-linked list of its neighbors, kept sorted
//! while it's built. The lists don't own heap nodes: all nodes live in one
//! arena and link to each other with `NodeId` handles.
//!
//! The first `vertex_count` nodes of the arena are sentinels. The sentinel
//! of vertex `v` sits at index `v - 1`, holds `v` itself and is never
//! reported as a neighbor. Because every list starts with a sentinel,
//! an insertion always has a predecessor to link from.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use tracing::{debug, trace, warn};

use super::error::{Error, Result};
use super::source::EdgeList;

/// Identifier of a vertex. Valid ids are `1..=vertex_count`.
pub type VertexId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

#[derive(Debug)]
struct Node {
    vertex: VertexId,
    next: Option<NodeId>,
}

/// Undirected graph stored as sorted adjacency lists.
///
/// The graph has a fixed number of vertices, chosen on creation.
/// It can only grow by inserting edges, and it's freed as a whole on drop.
///
/// # Examples
///
/// ```
/// # use adjlist::AdjacencyGraph;
/// let mut graph = AdjacencyGraph::new(4).unwrap();
/// graph.insert_undirected(1, 2).unwrap();
/// graph.insert_undirected(3, 1).unwrap();
/// graph.insert_undirected(2, 4).unwrap();
///
/// let neighbors: Vec<_> = graph.neighbors(1).unwrap().collect();
/// assert_eq!(neighbors, [2, 3]);
/// assert_eq!(graph.degree(4).unwrap(), 1);
/// assert!(graph.insert_edge(1, 5).is_err());
/// ```
#[derive(Debug)]
pub struct AdjacencyGraph {
    nodes: Vec<Node>,
    vertex_count: usize,
}

/// # Constructors
impl AdjacencyGraph {
    /// Creates a graph with vertices `1..=vertex_count` and no edges.
    ///
    /// ### Errors
    ///
    /// `InvalidVertexCount` if `vertex_count` is zero or the sentinels can't be allocated.
    pub fn new(vertex_count: usize) -> Result<AdjacencyGraph> {
        let invalid = || Error::InvalidVertexCount(i64::try_from(vertex_count).unwrap_or(i64::MAX));
        if vertex_count == 0 {
            return Err(invalid());
        }

        let mut nodes = Vec::new();
        nodes.try_reserve_exact(vertex_count).map_err(|_| invalid())?;
        // A successful reservation bounds vertex_count well below i64::MAX.
        nodes.extend((1..=vertex_count).map(|vertex| Node { vertex: vertex as VertexId, next: None }));

        debug!(vertex_count, "created graph");
        Ok(AdjacencyGraph { nodes, vertex_count })
    }

    /// Creates a graph whose largest vertex is `max_id`.
    pub fn with_vertex_bound(max_id: VertexId) -> Result<AdjacencyGraph> {
        if max_id < 1 {
            return Err(Error::InvalidVertexCount(max_id));
        }
        let vertex_count = usize::try_from(max_id).map_err(|_| Error::InvalidVertexCount(max_id))?;
        AdjacencyGraph::new(vertex_count)
    }

    /// Builds the graph of an edge list, inserting every edge in both directions.
    ///
    /// Stops at the first edge with a vertex outside the list's bound.
    pub fn from_edges(edges: &EdgeList) -> Result<AdjacencyGraph> {
        let mut graph = AdjacencyGraph::new(edges.vertex_count()?)?;
        for edge in edges {
            graph.insert_undirected(edge.source, edge.destination).map_err(|e| {
                warn!(source = edge.source, destination = edge.destination, location = %edge.location, "rejected edge");
                e
            })?;
        }
        debug!(vertex_count = graph.vertex_count, entries = graph.edge_entries(), "built graph");
        Ok(graph)
    }
}

/// # Insertion
impl AdjacencyGraph {
    fn sentinel(&self, vertex: VertexId) -> Result<NodeId> {
        match usize::try_from(vertex) {
            Ok(v) if v >= 1 && v <= self.vertex_count => Ok(NodeId(v - 1)),
            _ => Err(Error::VertexOutOfRange { vertex, vertex_count: self.vertex_count }),
        }
    }

    /// Inserts `source` into the neighbor list of `destination`.
    ///
    /// The list stays sorted: `source` lands right before the first neighbor
    /// that is not smaller than it, or at the end. Repeated insertions of
    /// the same pair are all kept, and `source == destination` is allowed.
    ///
    /// Only one direction is inserted, see
    /// [`insert_undirected`](#method.insert_undirected) for both.
    ///
    /// ### Errors
    ///
    /// `VertexOutOfRange` if either vertex is outside `1..=vertex_count`.
    /// The graph is left unchanged then.
    pub fn insert_edge(&mut self, source: VertexId, destination: VertexId) -> Result<()> {
        self.sentinel(source)?;
        let mut prev = self.sentinel(destination)?;

        while let Some(next) = self.nodes[prev.0].next {
            if self.nodes[next.0].vertex >= source {
                break;
            }
            prev = next;
        }

        let node = NodeId(self.nodes.len());
        let next = self.nodes[prev.0].next;
        self.nodes.push(Node { vertex: source, next });
        self.nodes[prev.0].next = Some(node);

        trace!(source, destination, "inserted neighbor");
        Ok(())
    }

    /// Inserts an undirected edge, ie. both `u -> v` and `v -> u`.
    ///
    /// Both ends are checked before anything is inserted.
    /// A self-loop `(v, v)` puts `v` into its own list twice.
    pub fn insert_undirected(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.sentinel(u)?;
        self.sentinel(v)?;
        self.insert_edge(u, v)?;
        self.insert_edge(v, u)
    }
}

/// # Queries
impl AdjacencyGraph {
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Total number of neighbor entries over all lists.
    ///
    /// Every undirected edge contributes two entries.
    pub fn edge_entries(&self) -> usize { self.nodes.len() - self.vertex_count }

    /// All vertex ids in ascending order.
    pub fn vertices(&self) -> RangeInclusive<VertexId> { 1..=self.vertex_count as VertexId }

    /// Neighbors of `vertex` in ascending order, without the sentinel.
    ///
    /// Each call walks the list from its head again.
    pub fn neighbors(&self, vertex: VertexId) -> Result<Neighbors<'_>> {
        let head = self.sentinel(vertex)?;
        Ok(Neighbors { nodes: &self.nodes, cursor: self.nodes[head.0].next })
    }

    pub fn degree(&self, vertex: VertexId) -> Result<usize> { Ok(self.neighbors(vertex)?.count()) }

    /// Iterates over `(vertex, neighbors)` for all vertices in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { nodes: &self.nodes, vertices: self.vertices() }
    }
}

/// Iterator over the neighbors of one vertex.
///
/// Returned by [`AdjacencyGraph::neighbors`](struct.AdjacencyGraph.html#method.neighbors).
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    nodes: &'a [Node],
    cursor: Option<NodeId>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        let node = &self.nodes[self.cursor?.0];
        self.cursor = node.next;
        Some(node.vertex)
    }
}

impl<'a> FusedIterator for Neighbors<'a> {}

/// Iterator over all vertices and their neighbors.
///
/// Returned by [`AdjacencyGraph::iter`](struct.AdjacencyGraph.html#method.iter).
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    nodes: &'a [Node],
    vertices: RangeInclusive<VertexId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (VertexId, Neighbors<'a>);

    fn next(&mut self) -> Option<(VertexId, Neighbors<'a>)> {
        let vertex = self.vertices.next()?;
        let head = &self.nodes[(vertex - 1) as usize];
        Some((vertex, Neighbors { nodes: self.nodes, cursor: head.next }))
    }
}

impl<'a> IntoIterator for &'a AdjacencyGraph {
    type Item = (VertexId, Neighbors<'a>);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> { self.iter() }
}

#[cfg(test)]
fn neighbors_of(graph: &AdjacencyGraph, vertex: VertexId) -> Vec<VertexId> {
    graph.neighbors(vertex).unwrap().collect()
}

#[test]
fn test_new_graph_is_empty() {
    let graph = AdjacencyGraph::new(5).unwrap();
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_entries(), 0);
    for vertex in graph.vertices() {
        assert!(neighbors_of(&graph, vertex).is_empty());
    }
}

#[test]
fn test_invalid_vertex_count() {
    match AdjacencyGraph::new(0) {
        Err(Error::InvalidVertexCount(0)) => (),
        other => panic!("unexpected result: {:?}", other),
    }
    match AdjacencyGraph::with_vertex_bound(-2) {
        Err(Error::InvalidVertexCount(-2)) => (),
        other => panic!("unexpected result: {:?}", other),
    }
    match AdjacencyGraph::new(usize::MAX) {
        Err(Error::InvalidVertexCount(_)) => (),
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(AdjacencyGraph::with_vertex_bound(3).unwrap().vertex_count(), 3);
}

#[test]
fn test_insertions_stay_sorted() {
    let mut graph = AdjacencyGraph::new(10).unwrap();
    for &source in &[7, 2, 9, 1, 10, 5, 3, 8, 4, 6] {
        graph.insert_edge(source, 5).unwrap();
        let neighbors = neighbors_of(&graph, 5);
        assert!(neighbors.windows(2).all(|w| w[0] <= w[1]), "unsorted: {:?}", neighbors);
    }
    assert_eq!(neighbors_of(&graph, 5), [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    // one direction only
    assert!(neighbors_of(&graph, 7).is_empty());
}

#[test]
fn test_undirected_symmetry() {
    let mut graph = AdjacencyGraph::new(6).unwrap();
    let edges = [(1, 4), (6, 2), (4, 6), (3, 1), (5, 4)];
    for &(u, v) in &edges {
        graph.insert_undirected(u, v).unwrap();
    }
    for &(u, v) in &edges {
        assert!(neighbors_of(&graph, u).contains(&v));
        assert!(neighbors_of(&graph, v).contains(&u));
    }
    assert_eq!(neighbors_of(&graph, 4), [1, 5, 6]);
    assert_eq!(graph.edge_entries(), 2 * edges.len());
}

#[test]
fn test_duplicates_are_kept() {
    let mut graph = AdjacencyGraph::new(3).unwrap();
    graph.insert_undirected(1, 3).unwrap();
    graph.insert_undirected(1, 2).unwrap();
    graph.insert_undirected(3, 1).unwrap();
    assert_eq!(neighbors_of(&graph, 1), [2, 3, 3]);
    assert_eq!(neighbors_of(&graph, 3), [1, 1]);
    assert_eq!(graph.degree(1).unwrap(), 3);
}

#[test]
fn test_self_loop() {
    let mut graph = AdjacencyGraph::new(3).unwrap();
    graph.insert_undirected(1, 2).unwrap();
    graph.insert_undirected(2, 3).unwrap();
    graph.insert_edge(2, 2).unwrap();
    assert_eq!(neighbors_of(&graph, 2), [1, 2, 3]);

    graph.insert_undirected(3, 3).unwrap();
    assert_eq!(neighbors_of(&graph, 3), [2, 3, 3]);
}

#[test]
fn test_out_of_range_leaves_graph_unchanged() {
    let mut graph = AdjacencyGraph::new(3).unwrap();
    graph.insert_undirected(1, 2).unwrap();

    for &(u, v) in &[(1, 4), (4, 1), (0, 2), (2, -1), (VertexId::MAX, 1)] {
        match graph.insert_undirected(u, v) {
            Err(Error::VertexOutOfRange { vertex_count: 3, .. }) => (),
            other => panic!("unexpected result for {:?}: {:?}", (u, v), other),
        }
    }
    match graph.insert_edge(2, 9) {
        Err(Error::VertexOutOfRange { vertex: 9, vertex_count: 3 }) => (),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(graph.neighbors(0).is_err());
    assert!(graph.neighbors(4).is_err());

    assert_eq!(graph.edge_entries(), 2);
    assert_eq!(neighbors_of(&graph, 1), [2]);
    assert!(neighbors_of(&graph, 3).is_empty());
}

#[test]
fn test_neighbors_restartable() {
    let mut graph = AdjacencyGraph::new(3).unwrap();
    graph.insert_undirected(1, 3).unwrap();
    graph.insert_undirected(1, 2).unwrap();
    let neighbors = graph.neighbors(1).unwrap();
    assert_eq!(neighbors.clone().collect::<Vec<_>>(), [2, 3]);
    assert_eq!(neighbors.collect::<Vec<_>>(), [2, 3]);
    assert_eq!(neighbors_of(&graph, 1), [2, 3]);
}

#[test]
fn test_iter_covers_all_vertices() {
    let mut graph = AdjacencyGraph::new(4).unwrap();
    graph.insert_undirected(4, 2).unwrap();
    let all: Vec<(VertexId, Vec<VertexId>)> =
        graph.iter().map(|(v, neighbors)| (v, neighbors.collect())).collect();
    assert_eq!(all, [(1, vec![]), (2, vec![4]), (3, vec![]), (4, vec![2])]);
}

#[test]
fn test_from_edges() {
    let edges = EdgeList::read(&b"1 2\n3 1\n2 4\n"[..]).unwrap();
    let graph = AdjacencyGraph::from_edges(&edges).unwrap();
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(neighbors_of(&graph, 1), [2, 3]);
    assert_eq!(neighbors_of(&graph, 2), [1, 4]);
    assert_eq!(neighbors_of(&graph, 3), [1]);
    assert_eq!(neighbors_of(&graph, 4), [2]);

    let edges = EdgeList::read(&b"2 0\n"[..]).unwrap();
    match AdjacencyGraph::from_edges(&edges) {
        Err(Error::VertexOutOfRange { vertex: 0, vertex_count: 2 }) => (),
        other => panic!("unexpected result: {:?}", other),
    }
}
