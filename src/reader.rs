//! This module defines the `EdgeReader` struct.
//!
//! See the [`EdgeReader`](struct.EdgeReader.html) for docs.

use std::fmt;
use std::fs;
use std::io;
use std::num::IntErrorKind;
use std::path::Path;
use std::str;

use tracing::debug;

use super::error::{Error, Result};
use super::graph::VertexId;
use super::stream::{AsciiWords, WordStream};

/// A 1-based position of a word in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub row: u64,
    pub col: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}, column {}", self.row, self.col)
    }
}

/// One undirected edge, as read from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: VertexId,
    pub destination: VertexId,
    /// Where the edge's first vertex was found.
    pub location: Location,
}

/// Reads edges from a BufRead, one pair of integers at a time.
///
/// Line breaks carry no meaning, so a pair may span two lines.
/// Words that are not integers are skipped, so `1 x 2` reads as the edge `(1, 2)`.
/// The reader is not restartable: to read the input again, open it again
/// (or keep the result in an [`EdgeList`](../source/struct.EdgeList.html)).
///
/// # Examples
///
/// ```
/// # use adjlist::EdgeReader;
/// let mut reader = EdgeReader::new(&b"1 2\n3\n1\n"[..]);
/// let edge = reader.next_edge().unwrap().unwrap();
/// assert_eq!((edge.source, edge.destination), (1, 2));
/// let edge = reader.next_edge().unwrap().unwrap();
/// assert_eq!((edge.source, edge.destination), (3, 1));
/// assert!(reader.next_edge().unwrap().is_none());
/// assert_eq!(reader.max_id(), Some(3));
/// ```
pub struct EdgeReader<B: io::BufRead> {
    buf: B,
    row: u64,
    line: Vec<u8>,
    col: usize,
    max_id: Option<VertexId>,
    skipped: u64,
}

/// What a single word turned out to be.
enum Word {
    Vertex(VertexId),
    Overflow(String),
    Malformed(String),
}

impl Word {
    fn classify(word: &[u8]) -> Word {
        let text = match str::from_utf8(word) {
            Ok(text) => text,
            Err(_) => return Word::Malformed(String::from_utf8_lossy(word).into_owned()),
        };
        match text.parse::<VertexId>() {
            Ok(id) => Word::Vertex(id),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Word::Overflow(text.to_owned()),
                _ => Word::Malformed(text.to_owned()),
            },
        }
    }
}

/// # Constructors
impl<B: io::BufRead> EdgeReader<B> {
    /// Wraps a BufRead.
    ///
    /// Note that you don't have to pass an owned buffered reader, it could be also `&mut`.
    pub fn new(buf: B) -> EdgeReader<B> {
        EdgeReader {
            buf,
            row: 0,
            line: Vec::new(),
            col: 0,
            max_id: None,
            skipped: 0,
        }
    }
}

impl EdgeReader<io::BufReader<fs::File>> {
    /// Opens a file and wraps it in an EdgeReader.
    ///
    /// A directory can't be read as an edge list, so it fails to open too.
    /// The file is closed when the reader is dropped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<EdgeReader<io::BufReader<fs::File>>> {
        let path = path.as_ref();
        let open_error = |source| Error::Open { path: path.to_owned(), source };
        let file = fs::File::open(path).map_err(open_error)?;
        if file.metadata().map_err(open_error)?.is_dir() {
            return Err(open_error(io::Error::new(io::ErrorKind::Other, "is a directory")));
        }
        debug!(path = %path.display(), "opened edge list");
        Ok(EdgeReader::new(io::BufReader::new(file)))
    }
}

impl<B: io::BufRead> EdgeReader<B> {
    fn read_line(&mut self) -> io::Result<Option<()>> {
        self.row += 1;
        self.line.clear();
        self.col = 0;
        let n_bytes = self.buf.read_until(b'\n', &mut self.line)?;
        if n_bytes == 0 {
            return Ok(None);
        }
        Ok(Some(()))
    }

    /// Reads the next integer, skipping anything that isn't one.
    ///
    /// ### Errors
    ///
    /// Besides IO errors, an integer too large for a `VertexId` is
    /// `IdOverflow`: no graph could hold that vertex.
    fn next_vertex(&mut self) -> Result<Option<(VertexId, Location)>> {
        loop {
            let (word, len) = match self.next_word()? {
                Some(word) => (Word::classify(word), word.len()),
                None => return Ok(None),
            };
            let location = Location { row: self.row, col: self.col - len + 1 };
            match word {
                Word::Vertex(id) => {
                    self.max_id = Some(self.max_id.map_or(id, |max| max.max(id)));
                    return Ok(Some((id, location)));
                }
                Word::Overflow(word) => return Err(Error::IdOverflow { word, location }),
                Word::Malformed(word) => {
                    debug!(word = %word, %location, "skipping malformed word");
                    self.skipped += 1;
                }
            }
        }
    }

    /// Reads the next pair of integers.
    ///
    /// Returns `Ok(None)` at the end of input. A trailing integer without
    /// a partner yields no edge, but still counts towards [`max_id`](#method.max_id).
    pub fn next_edge(&mut self) -> Result<Option<Edge>> {
        let (source, location) = match self.next_vertex()? {
            Some(first) => first,
            None => return Ok(None),
        };
        match self.next_vertex()? {
            Some((destination, _)) => Ok(Some(Edge { source, destination, location })),
            None => {
                debug!(vertex = source, %location, "ignoring unpaired vertex at end of input");
                Ok(None)
            }
        }
    }

    /// Consumes the rest of the input, returning the largest integer in it.
    pub fn scan_max(&mut self) -> Result<Option<VertexId>> {
        while self.next_vertex()?.is_some() {}
        Ok(self.max_id)
    }

    /// The largest integer read so far.
    pub fn max_id(&self) -> Option<VertexId> { self.max_id }

    /// Number of malformed words skipped so far.
    pub fn skipped(&self) -> u64 { self.skipped }

    /// Gets underlying buffer back.
    pub fn into_inner(self) -> B { self.buf }
}

impl<B: io::BufRead> WordStream for EdgeReader<B> {
    fn next_word(&mut self) -> io::Result<Option<&[u8]>> {
        loop {
            let mut words = AsciiWords::starting_at(&self.line, self.col);
            let found = words.next().map(|word| word.len());
            self.col = words.position();
            if let Some(len) = found {
                return Ok(Some(&self.line[self.col - len..self.col]));
            }
            if self.read_line()?.is_none() {
                return Ok(None);
            }
        }
    }
}

impl<B: io::BufRead> Iterator for EdgeReader<B> {
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Result<Edge>> { self.next_edge().transpose() }
}

#[cfg(test)]
fn pairs(input: &str) -> Vec<(VertexId, VertexId)> {
    EdgeReader::new(input.as_bytes())
        .map(|edge| edge.map(|e| (e.source, e.destination)))
        .collect::<Result<_>>()
        .unwrap()
}

#[test]
fn test_newline_agnostic() {
    assert_eq!(pairs("1 2\n3 1\n2 4\n"), [(1, 2), (3, 1), (2, 4)]);
    assert_eq!(pairs("1\n\n2 3\n  4"), [(1, 2), (3, 4)]);
    assert_eq!(pairs("1 2 3 4"), [(1, 2), (3, 4)]);
}

#[test]
fn test_skips_malformed_words() {
    let mut reader = EdgeReader::new(&b"1 x 2\n3 4.5 -- 5\n"[..]);
    let edges: Vec<_> = (&mut reader).map(|e| e.unwrap()).collect();
    let pairs: Vec<_> = edges.iter().map(|e| (e.source, e.destination)).collect();
    assert_eq!(pairs, [(1, 2), (3, 5)]);
    assert_eq!(reader.skipped(), 3);
}

#[test]
fn test_skips_invalid_utf8() {
    let mut reader = EdgeReader::new(&b"1 2\n\xff\xfe junk\n3 \xc3 1\n"[..]);
    let edges: Vec<_> = (&mut reader).map(|e| e.unwrap()).collect();
    let pairs: Vec<_> = edges.iter().map(|e| (e.source, e.destination)).collect();
    assert_eq!(pairs, [(1, 2), (3, 1)]);
    assert_eq!(reader.skipped(), 3);
    assert_eq!(edges[1].location, Location { row: 3, col: 1 });
}

#[test]
fn test_too_large_id_is_an_error() {
    for input in &["1 99999999999999999999 2", "-99999999999999999999 1"] {
        let mut reader = EdgeReader::new(input.as_bytes());
        match reader.next_edge() {
            Err(Error::IdOverflow { word, .. }) => assert!(word.ends_with("99999999999999999999")),
            other => panic!("unexpected result for {:?}: {:?}", input, other),
        }
    }
    let mut reader = EdgeReader::new(&b"1 2\n3 99999999999999999999\n"[..]);
    assert!(reader.next_edge().unwrap().is_some());
    match reader.next_edge() {
        Err(Error::IdOverflow { location, .. }) => assert_eq!(location, Location { row: 2, col: 3 }),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_keeps_zero_and_negative() {
    assert_eq!(pairs("0 -3"), [(0, -3)]);
}

#[test]
fn test_unpaired_counts_towards_max() {
    let mut reader = EdgeReader::new(&b"1 2 9"[..]);
    assert!(reader.next_edge().unwrap().is_some());
    assert!(reader.next_edge().unwrap().is_none());
    assert_eq!(reader.max_id(), Some(9));
}

#[test]
fn test_scan_max() {
    let mut reader = EdgeReader::new(&b"4 2\n17 x 3\n"[..]);
    assert_eq!(reader.scan_max().unwrap(), Some(17));
    assert_eq!(EdgeReader::new(&b" \n"[..]).scan_max().unwrap(), None);
}

#[test]
fn test_locations() {
    let mut reader = EdgeReader::new(&b"1 2\n\n  3\n4\n"[..]);
    let first = reader.next_edge().unwrap().unwrap();
    assert_eq!(first.location, Location { row: 1, col: 1 });
    let second = reader.next_edge().unwrap().unwrap();
    assert_eq!(second.location, Location { row: 3, col: 3 });
    assert_eq!(second.location.to_string(), "line 3, column 3");
}

#[test]
fn test_word_stream() {
    let mut reader = EdgeReader::new(&b"a\nb  c\n"[..]);
    let mut words = vec![];
    while let Some(word) = reader.next_word().unwrap() {
        words.push(word.to_vec());
    }
    assert_eq!(words, [b"a", b"b", b"c"]);
}

#[test]
fn test_open_missing_file() {
    match EdgeReader::open("/nonexistent/adjlist/input.txt") {
        Err(Error::Open { path, .. }) => assert!(path.ends_with("input.txt")),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("opened a missing file"),
    }
}

#[test]
fn test_open_directory() {
    let dir = tempfile::tempdir().unwrap();
    match EdgeReader::open(dir.path()) {
        Err(Error::Open { path, .. }) => assert_eq!(path, dir.path()),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("opened a directory"),
    }
}
